// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    models::{
        category::{Category, DEFAULT_CATEGORIES},
        question::{NewQuestion, Question},
    },
    quiz::QuizFilter,
    store::{StoreError, TriviaStore},
};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    /// Next id handed out by `insert_question`. Only ever grows.
    next_question_id: i64,
}

/// Process-local store used when no database is configured.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl MemoryStore {
    /// Builds a store holding exactly the given rows.
    /// New questions get ids above the highest one supplied.
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions
            .iter()
            .map(|q| q.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);

        Self {
            tables: RwLock::new(Tables {
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                next_question_id,
            }),
        }
    }

    /// Empty question bank with the six default categories (ids 1 to 6).
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(label, id)| Category {
                id,
                category_type: label.to_string(),
            })
            .collect();

        Self::new(categories, Vec::new())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        let count = self.tables.read().await.questions.len();
        i64::try_from(count).map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn list_questions(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id += 1;

        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );

        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();

        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn random_question(&self, filter: &QuizFilter) -> Result<Option<Question>, StoreError> {
        let tables = self.tables.read().await;
        let picked = filter
            .pick(tables.questions.values(), &mut rand::thread_rng())
            .cloned();
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn default_categories_are_numbered_from_one() {
        let store = MemoryStore::with_default_categories();
        let categories = store.list_categories().await.unwrap();

        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].category_type, "Science");
        assert_eq!(categories[5].category_type, "Sports");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::with_default_categories();
        let first = store.insert_question(new_question("first", 1)).await.unwrap();
        let second = store.insert_question(new_question("second", 1)).await.unwrap();

        assert!(store.delete_question(second).await.unwrap());
        let third = store.insert_question(new_question("third", 1)).await.unwrap();

        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn second_delete_reports_missing() {
        let store = MemoryStore::default();
        let id = store.insert_question(new_question("gone", 1)).await.unwrap();

        assert!(store.delete_question(id).await.unwrap());
        assert!(!store.delete_question(id).await.unwrap());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_empty_matches_all() {
        let store = MemoryStore::default();
        for (text, category) in [
            ("Who painted the Mona Lisa?", 2),
            ("What is the heaviest metal?", 1),
        ] {
            store.insert_question(new_question(text, category)).await.unwrap();
        }

        let hits = store.search_questions("mona").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, 2);

        assert_eq!(store.search_questions("").await.unwrap().len(), 2);
        assert!(store.search_questions("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_window_past_end_is_empty() {
        let store = MemoryStore::default();
        for i in 0..12 {
            let text = format!("q{}", i);
            store.insert_question(new_question(&text, 1)).await.unwrap();
        }

        assert_eq!(store.list_questions(0, 10).await.unwrap().len(), 10);
        assert_eq!(store.list_questions(10, 10).await.unwrap().len(), 2);
        assert!(store.list_questions(20, 10).await.unwrap().is_empty());
        assert!(store.list_questions(i64::MAX, 10).await.unwrap().is_empty());
        assert_eq!(store.count_questions().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn seeded_ids_are_kept_and_continued() {
        let store = MemoryStore::new(
            Vec::new(),
            vec![Question {
                id: 40,
                question: "seeded".to_string(),
                answer: "yes".to_string(),
                category: 1,
                difficulty: 3,
            }],
        );

        let id = store.insert_question(new_question("next", 1)).await.unwrap();
        assert_eq!(id, 41);
    }

    #[tokio::test]
    async fn seeding_the_largest_id_does_not_overflow() {
        let store = MemoryStore::new(
            Vec::new(),
            vec![Question {
                id: i64::MAX,
                question: "last".to_string(),
                answer: "yes".to_string(),
                category: 1,
                difficulty: 1,
            }],
        );

        assert_eq!(store.count_questions().await.unwrap(), 1);
        assert!(store.delete_question(i64::MAX).await.unwrap());
    }

    #[tokio::test]
    async fn random_question_honours_filter() {
        let store = MemoryStore::default();
        let keep = store.insert_question(new_question("keep", 4)).await.unwrap();
        let seen = store.insert_question(new_question("seen", 4)).await.unwrap();
        store.insert_question(new_question("other", 5)).await.unwrap();

        let filter = QuizFilter::new(Some(4), [seen]);
        for _ in 0..20 {
            let picked = store.random_question(&filter).await.unwrap().unwrap();
            assert_eq!(picked.id, keep);
        }
    }
}

// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use crate::{
    models::question::Question, quiz::QuizFilter,
    utils::deserializers::deserialize_optional_number,
};

/// Category selector as sent by the quiz frontend: `{ "id": "1", "type": "Science" }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub id: Option<i64>,

    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

/// DTO for `POST /quizzes`.
///
/// The category can be given directly (`category`) or as the frontend's
/// `quiz_category` object. Id `0` stands for "all categories".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub category: Option<i64>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,

    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

impl QuizRequest {
    pub fn into_filter(self) -> QuizFilter {
        let category = self
            .category
            .or_else(|| self.quiz_category.and_then(|c| c.id))
            .filter(|id| *id != 0);

        QuizFilter::new(category, self.previous_questions.unwrap_or_default())
    }
}

/// Response body of `POST /quizzes`. `question` is null once the eligible set is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_of(json: &str) -> QuizFilter {
        serde_json::from_str::<QuizRequest>(json).unwrap().into_filter()
    }

    #[test]
    fn empty_body_means_any_category_nothing_excluded() {
        let filter = filter_of("{}");
        assert_eq!(filter.category(), None);
        assert!(filter.previous().is_empty());
    }

    #[test]
    fn direct_category_is_used() {
        let filter = filter_of(r#"{"category": 3, "previous_questions": [1, 2]}"#);
        assert_eq!(filter.category(), Some(3));
        assert!(filter.previous().contains(&1));
        assert!(filter.previous().contains(&2));
    }

    #[test]
    fn frontend_quiz_category_with_string_id() {
        let filter = filter_of(
            r#"{"previous_questions": [20, 21], "quiz_category": {"type": "Science", "id": "1"}}"#,
        );
        assert_eq!(filter.category(), Some(1));
    }

    #[test]
    fn category_zero_means_all() {
        assert_eq!(filter_of(r#"{"category": 0}"#).category(), None);
        assert_eq!(
            filter_of(r#"{"quiz_category": {"type": "click", "id": 0}}"#).category(),
            None
        );
    }

    #[test]
    fn direct_category_wins_over_quiz_category() {
        let filter = filter_of(r#"{"category": 2, "quiz_category": {"id": 5}}"#);
        assert_eq!(filter.category(), Some(2));
    }
}

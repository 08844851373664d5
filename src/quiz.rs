// src/quiz.rs

//! Quiz picker: one random question out of those the player has not seen yet.

use std::collections::HashSet;

use rand::{Rng, seq::IteratorRandom};

use crate::{
    models::question::Question,
    store::{StoreError, TriviaStore},
};

/// Constraints that decide which questions are eligible for the next quiz round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    category: Option<i64>,
    previous: HashSet<i64>,
}

impl QuizFilter {
    pub fn new(category: Option<i64>, previous: impl IntoIterator<Item = i64>) -> Self {
        Self {
            category,
            previous: previous.into_iter().collect(),
        }
    }

    pub fn category(&self) -> Option<i64> {
        self.category
    }

    pub fn previous(&self) -> &HashSet<i64> {
        &self.previous
    }

    /// Previously seen ids in ascending order, for binding into a query.
    pub fn excluded_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.previous.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether `question` belongs to the eligible set.
    pub fn admits(&self, question: &Question) -> bool {
        !self.previous.contains(&question.id)
            && self.category.is_none_or(|category| question.category == category)
    }

    /// Chooses uniformly among the admitted questions. Single pass, no weighting.
    pub fn pick<'a, I, R>(&self, questions: I, rng: &mut R) -> Option<&'a Question>
    where
        I: IntoIterator<Item = &'a Question>,
        R: Rng + ?Sized,
    {
        questions
            .into_iter()
            .filter(|question| self.admits(question))
            .choose(rng)
    }
}

/// Returns the next quiz question, or `None` when every eligible question was already played.
pub async fn next_question(
    store: &dyn TriviaStore,
    filter: &QuizFilter,
) -> Result<Option<Question>, StoreError> {
    let question = store.random_question(filter).await?;

    match &question {
        Some(q) => tracing::debug!(
            question_id = q.id,
            category = ?filter.category(),
            excluded = filter.previous().len(),
            "picked quiz question"
        ),
        None => tracing::debug!(
            category = ?filter.category(),
            excluded = filter.previous().len(),
            "no eligible quiz question left"
        ),
    }

    Ok(question)
}

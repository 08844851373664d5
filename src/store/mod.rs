// src/store/mod.rs

//! Persistence seam. Handlers only see [`TriviaStore`]; the concrete backend is
//! chosen at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    quiz::QuizFilter,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Operations the HTTP layer needs from the question bank.
///
/// Listings are ordered by ascending id.
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;

    /// One window of all questions. An offset past the end yields an empty list.
    async fn list_questions(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError>;

    /// Stores the question and returns its freshly assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<i64, StoreError>;

    /// Returns `false` when no question had this id.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, StoreError>;

    /// A uniformly random question admitted by `filter`, if any.
    async fn random_question(&self, filter: &QuizFilter) -> Result<Option<Question>, StoreError>;
}

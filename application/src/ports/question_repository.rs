//! Question repository port
//!
//! Defines the interface for storing and querying question records.

use async_trait::async_trait;
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField};
use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent store of question records
///
/// This port defines how the application layer reads and writes questions.
/// Implementations (adapters) live in the infrastructure layer. Failures are
/// surfaced as-is; callers never retry.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a new question, assigning its id and creation date
    async fn insert_one(&self, question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Store several questions, preserving input order in the result
    async fn insert_many(
        &self,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Look up a question by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Question>, RepositoryError>;

    /// All stored questions, in insertion order
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Questions whose `field` equals `value` exactly
    async fn find_by_field(
        &self,
        field: QuestionField,
        value: &str,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Persist an updated question under its existing id
    async fn save(&self, question: Question) -> Result<Question, RepositoryError>;

    /// Remove a question by id
    async fn delete_by_id(&self, id: &str) -> Result<DeletionResult, RepositoryError>;
}

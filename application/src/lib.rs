//! Application layer for question-bank
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::question_repository::{QuestionRepository, RepositoryError};
pub use use_cases::generate_paper::{GeneratePaperError, GeneratePaperInput, GeneratePaperUseCase};
pub use use_cases::manage_questions::{ManageQuestionsError, ManageQuestionsUseCase};

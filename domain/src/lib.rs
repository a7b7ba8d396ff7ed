//! Domain layer for question-bank
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A stored question record with its subject, topic, difficulty label and
//! marks. Partial updates go through [`QuestionPatch`].
//!
//! ## Paper
//!
//! Question papers are assembled per difficulty bucket:
//!
//! - **Distribution**: percentages per difficulty, must sum to exactly 100
//! - **Shuffle**: Fisher-Yates over the bucket's candidates with an injected RNG
//! - **Selection**: greedy first-fit against the bucket's marks target

pub mod config;
pub mod core;
pub mod paper;
pub mod question;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use paper::{
    distribution::{DistributionEntry, bucket_marks, ensure_valid, is_valid, total_percentage},
    selection::{select_questions, selected_marks},
    shuffle::shuffle,
};
pub use question::entities::{
    DeletionResult, NewQuestion, Question, QuestionField, QuestionId, QuestionPatch,
};

//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_paper;
pub mod manage_questions;

#[cfg(test)]
pub(crate) mod mock_repository;

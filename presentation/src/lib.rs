//! Presentation layer for question-bank
//!
//! This crate contains CLI definitions and the HTTP surface
//! that binds request handlers to the application use cases.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::{Cli, StorageArg};
pub use http::{ApiError, AppState, ErrorBody, create_router};

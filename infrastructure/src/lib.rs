//! Infrastructure layer for question-bank
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileServerConfig, FileStorageConfig,
    StorageBackend,
};
pub use storage::{InMemoryQuestionRepository, JsonFileQuestionRepository};

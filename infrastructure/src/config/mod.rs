//! Configuration file loading for question-bank
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QBANK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./qbank.toml` or `./.qbank.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/question-bank/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileServerConfig, FileStorageConfig, StorageBackend,
};
pub use loader::ConfigLoader;

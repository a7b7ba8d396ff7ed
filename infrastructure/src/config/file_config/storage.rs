//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which question repository adapter to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store, lost on exit
    #[default]
    Memory,
    /// JSON file rewritten on every change
    Json,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Json => "json",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "json" | "file" => Ok(StorageBackend::Json),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Backend name (`memory` or `json`)
    pub backend: String,
    /// Data file for the `json` backend
    pub path: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default().to_string(),
            path: PathBuf::from("questions.json"),
        }
    }
}

impl FileStorageConfig {
    /// Parse `backend`, falling back to memory on unknown values
    pub fn parse_backend(&self) -> StorageBackend {
        self.backend.parse().unwrap_or_default()
    }
}

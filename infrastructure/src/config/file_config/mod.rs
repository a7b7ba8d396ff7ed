//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod server;
mod storage;

pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;
pub use storage::{FileStorageConfig, StorageBackend};

use qbank_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Question store settings
    pub storage: FileStorageConfig,
    /// Log level and optional log file
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.storage.backend.parse::<StorageBackend>().is_err() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: "storage.backend".to_string(),
                    value: self.storage.backend.clone(),
                    valid_values: vec!["memory".to_string(), "json".to_string()],
                },
                message: format!(
                    "storage.backend: unknown value '{}', falling back to 'memory'",
                    self.storage.backend
                ),
            });
        }

        if self.storage.parse_backend() == StorageBackend::Json
            && self.storage.path.as_os_str().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyPath {
                    field: "storage.path".to_string(),
                },
                message: "storage.path must be set when storage.backend = \"json\"".to_string(),
            });
        }

        if self.server.port == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EphemeralPort,
                message: "server.port is 0, the OS will pick a random port".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 3000

[storage]
backend = "json"
path = "data/questions.json"

[logging]
level = "debug"
file = "logs/qbank.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.parse_backend(), StorageBackend::Json);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 8081
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8081);
        // Defaults should apply
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.parse_backend(), StorageBackend::Memory);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_unknown_backend_warns() {
        let mut config = FileConfig::default();
        config.storage.backend = "mongo".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ));
    }

    #[test]
    fn test_validate_json_without_path_is_error() {
        let mut config = FileConfig::default();
        config.storage.backend = "json".to_string();
        config.storage.path = Default::default();

        let issues = config.validate();
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_port_zero_warns() {
        let mut config = FileConfig::default();
        config.server.port = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EphemeralPort);
    }
}

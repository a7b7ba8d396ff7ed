//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s rather than failing
//! outright, so the binary can decide what is fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its accepted set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A path field is set but empty.
    EmptyPath { field: String },
    /// The server port is 0, so the OS would pick one at random.
    EphemeralPort,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// True if any issue in the list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::EphemeralPort,
            message: "port is 0".to_string(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(ConfigIssue::has_errors(&[
            issue(Severity::Warning),
            issue(Severity::Error)
        ]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!ConfigIssue::has_errors(&[issue(Severity::Warning)]));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        let issues: Vec<ConfigIssue> = vec![];
        assert!(!ConfigIssue::has_errors(&issues));
    }
}

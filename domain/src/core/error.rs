//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid difficulty distribution: percentages sum to {total}, expected 100")]
    InvalidDistribution { total: f64 },
}

impl DomainError {
    /// Check if this error is a rejected difficulty distribution
    pub fn is_invalid_distribution(&self) -> bool {
        matches!(self, DomainError::InvalidDistribution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_distribution_display() {
        let error = DomainError::InvalidDistribution { total: 90.0 };
        assert_eq!(
            error.to_string(),
            "Invalid difficulty distribution: percentages sum to 90, expected 100"
        );
    }

    #[test]
    fn test_is_invalid_distribution_check() {
        assert!(DomainError::InvalidDistribution { total: 0.0 }.is_invalid_distribution());
    }
}

//! Difficulty distribution value objects and validation.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Share of the paper's marks assigned to one difficulty label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub difficulty: String,
    pub percentage: f64,
}

impl DistributionEntry {
    pub fn new(difficulty: impl Into<String>, percentage: f64) -> Self {
        Self {
            difficulty: difficulty.into(),
            percentage,
        }
    }
}

/// Sum of all percentages in the distribution
pub fn total_percentage(distribution: &[DistributionEntry]) -> f64 {
    distribution.iter().map(|entry| entry.percentage).sum()
}

/// A distribution is valid iff its percentages sum to exactly 100.
///
/// There is no tolerance, so an empty distribution (sum 0) is invalid.
pub fn is_valid(distribution: &[DistributionEntry]) -> bool {
    total_percentage(distribution) == 100.0
}

/// [`is_valid`] as a `Result`, carrying the offending total.
pub fn ensure_valid(distribution: &[DistributionEntry]) -> Result<(), DomainError> {
    let total = total_percentage(distribution);
    if total == 100.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidDistribution { total })
    }
}

/// Marks target for one bucket: `percentage / 100 * total_marks`
pub fn bucket_marks(entry: &DistributionEntry, total_marks: f64) -> f64 {
    (entry.percentage / 100.0) * total_marks
}

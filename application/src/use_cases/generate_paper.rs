//! Generate Paper use case
//!
//! Assembles a question paper from the bank, one difficulty bucket at a time:
//!
//! 1. **Validate**: the distribution must sum to exactly 100 percent
//! 2. **Fetch**: load every question with the bucket's difficulty
//! 3. **Shuffle**: Fisher-Yates with the caller's (or a fresh) RNG
//! 4. **Select**: greedy first-fit against the bucket's marks target
//!
//! Buckets are concatenated in distribution order. The paper is not stored.

use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use qbank_domain::{
    DistributionEntry, DomainError, Question, QuestionField, bucket_marks, ensure_valid,
    select_questions, selected_marks, shuffle,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during paper generation
#[derive(Error, Debug)]
pub enum GeneratePaperError {
    #[error(transparent)]
    InvalidDistribution(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the GeneratePaper use case
#[derive(Debug, Clone)]
pub struct GeneratePaperInput {
    /// Marks the whole paper should approach
    pub total_marks: f64,
    /// Ordered split of `total_marks` across difficulty labels
    pub distribution: Vec<DistributionEntry>,
}

impl GeneratePaperInput {
    pub fn new(total_marks: f64, distribution: Vec<DistributionEntry>) -> Self {
        Self {
            total_marks,
            distribution,
        }
    }

    pub fn with_entry(mut self, difficulty: impl Into<String>, percentage: f64) -> Self {
        self.distribution
            .push(DistributionEntry::new(difficulty, percentage));
        self
    }
}

/// Use case for generating a question paper
pub struct GeneratePaperUseCase {
    repository: Arc<dyn QuestionRepository>,
}

impl GeneratePaperUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Execute the use case with a freshly seeded generator
    ///
    /// Repeated calls on the same data may pick different questions.
    pub async fn execute(
        &self,
        input: &GeneratePaperInput,
    ) -> Result<Vec<Question>, GeneratePaperError> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.execute_with_rng(input, &mut rng).await
    }

    /// Execute the use case, shuffling each bucket with `rng`
    pub async fn execute_with_rng<R: Rng + Send + ?Sized>(
        &self,
        input: &GeneratePaperInput,
        rng: &mut R,
    ) -> Result<Vec<Question>, GeneratePaperError> {
        if let Err(e) = ensure_valid(&input.distribution) {
            warn!("Rejecting paper request: {}", e);
            return Err(e.into());
        }

        info!(
            "Generating paper for {} marks across {} difficulty buckets",
            input.total_marks,
            input.distribution.len()
        );

        let mut paper = Vec::new();
        for entry in &input.distribution {
            let bucket = self
                .fill_bucket(entry, input.total_marks, &mut *rng)
                .await?;
            paper.extend(bucket);
        }

        info!(
            "Generated paper with {} questions worth {} marks",
            paper.len(),
            selected_marks(&paper)
        );
        Ok(paper)
    }

    async fn fill_bucket<R: Rng + Send + ?Sized>(
        &self,
        entry: &DistributionEntry,
        total_marks: f64,
        rng: &mut R,
    ) -> Result<Vec<Question>, GeneratePaperError> {
        let target = bucket_marks(entry, total_marks);

        let mut candidates = self
            .repository
            .find_by_field(QuestionField::Difficulty, &entry.difficulty)
            .await?;
        let available = candidates.len();

        shuffle(&mut candidates, rng);
        let selected = select_questions(candidates, target);

        debug!(
            "Bucket {:?}: target {} marks, {} candidates, {} selected ({} marks)",
            entry.difficulty,
            target,
            available,
            selected.len(),
            selected_marks(&selected)
        );
        Ok(selected)
    }
}

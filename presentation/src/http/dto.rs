//! Request bodies that do not map one-to-one onto domain types

use qbank_application::GeneratePaperInput;
use qbank_domain::DistributionEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchByDifficultyRequest {
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBySubjectRequest {
    pub subject: String,
}

/// Body of `POST /generateQuestionPaper`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePaperRequest {
    pub total_marks: f64,
    pub difficulty_distribution: Vec<DistributionEntry>,
}

impl From<GeneratePaperRequest> for GeneratePaperInput {
    fn from(req: GeneratePaperRequest) -> Self {
        GeneratePaperInput::new(req.total_marks, req.difficulty_distribution)
    }
}

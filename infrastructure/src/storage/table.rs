//! Ordered question table shared by the storage adapters.

use chrono::Utc;
use qbank_application::RepositoryError;
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField};
use uuid::Uuid;

/// Questions in insertion order
#[derive(Debug, Clone, Default)]
pub(crate) struct QuestionTable {
    rows: Vec<Question>,
}

impl QuestionTable {
    pub(crate) fn from_rows(rows: Vec<Question>) -> Self {
        Self { rows }
    }

    pub(crate) fn rows(&self) -> &[Question] {
        &self.rows
    }

    pub(crate) fn insert(&mut self, question: NewQuestion) -> Question {
        let stored = question.into_question(Uuid::new_v4().to_string(), Utc::now());
        self.rows.push(stored.clone());
        stored
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Question> {
        self.rows.iter().find(|q| q.id == id)
    }

    pub(crate) fn matching(&self, field: QuestionField, value: &str) -> Vec<Question> {
        self.rows
            .iter()
            .filter(|q| q.field(field) == value)
            .cloned()
            .collect()
    }

    pub(crate) fn replace(&mut self, question: Question) -> Result<Question, RepositoryError> {
        let slot = self
            .rows
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| {
                RepositoryError::Storage(format!("question {} no longer exists", question.id))
            })?;
        *slot = question.clone();
        Ok(question)
    }

    pub(crate) fn remove(&mut self, id: &str) -> DeletionResult {
        let before = self.rows.len();
        self.rows.retain(|q| q.id != id);
        DeletionResult::deleted((before - self.rows.len()) as u64)
    }
}

//! Manage Questions use case
//!
//! CRUD and search operations over the question bank.

use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField, QuestionPatch};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while managing questions
#[derive(Error, Debug)]
pub enum ManageQuestionsError {
    #[error("Question not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ManageQuestionsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ManageQuestionsError::NotFound(_))
    }
}

/// Use case for creating, reading, updating, deleting and searching questions
pub struct ManageQuestionsUseCase {
    repository: Arc<dyn QuestionRepository>,
}

impl ManageQuestionsUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, question: NewQuestion) -> Result<Question, ManageQuestionsError> {
        let created = self
            .repository
            .insert_one(question)
            .await
            .inspect_err(|e| error!("Error in creating a question: {}", e))?;

        info!("Question created successfully: {}", created.id);
        Ok(created)
    }

    pub async fn create_many(
        &self,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<Question>, ManageQuestionsError> {
        let count = questions.len();
        let created = self
            .repository
            .insert_many(questions)
            .await
            .inspect_err(|e| error!("Error in creating {} questions: {}", count, e))?;

        info!("{} questions created successfully", created.len());
        Ok(created)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Question, ManageQuestionsError> {
        let question = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!("Error in retrieving question {}: {}", id, e))?
            .ok_or_else(|| ManageQuestionsError::NotFound(id.to_string()))?;

        info!("Question retrieved successfully: {}", question.id);
        Ok(question)
    }

    pub async fn get_all(&self) -> Result<Vec<Question>, ManageQuestionsError> {
        let questions = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| error!("Error in retrieving questions: {}", e))?;

        info!("{} questions retrieved", questions.len());
        Ok(questions)
    }

    /// Apply the fields present in `patch` to an existing question and save it.
    pub async fn update_by_id(
        &self,
        id: &str,
        patch: QuestionPatch,
    ) -> Result<Question, ManageQuestionsError> {
        let mut question = self.get_by_id(id).await?;
        question.apply(&patch);

        let updated = self
            .repository
            .save(question)
            .await
            .inspect_err(|e| error!("Error in updating question {}: {}", id, e))?;

        info!("Question updated successfully: {}", updated.id);
        Ok(updated)
    }

    /// Delete an existing question. A missing id leaves the store untouched.
    pub async fn delete_by_id(&self, id: &str) -> Result<DeletionResult, ManageQuestionsError> {
        self.get_by_id(id).await?;

        let result = self
            .repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!("Error in deleting question {}: {}", id, e))?;

        info!(
            "Question deleted successfully: {} (deleted {})",
            id, result.deleted_count
        );
        Ok(result)
    }

    pub async fn search_by_difficulty(
        &self,
        difficulty: &str,
    ) -> Result<Vec<Question>, ManageQuestionsError> {
        self.search(QuestionField::Difficulty, difficulty).await
    }

    pub async fn search_by_subject(
        &self,
        subject: &str,
    ) -> Result<Vec<Question>, ManageQuestionsError> {
        self.search(QuestionField::Subject, subject).await
    }

    async fn search(
        &self,
        field: QuestionField,
        value: &str,
    ) -> Result<Vec<Question>, ManageQuestionsError> {
        let questions = self
            .repository
            .find_by_field(field, value)
            .await
            .inspect_err(|e| error!("Error in searching questions by {}: {}", field, e))?;

        info!(
            "{} questions matched {} = {:?}",
            questions.len(),
            field,
            value
        );
        Ok(questions)
    }
}

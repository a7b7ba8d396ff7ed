//! In-memory question repository

use super::table::QuestionTable;
use async_trait::async_trait;
use qbank_application::{QuestionRepository, RepositoryError};
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField};
use tokio::sync::RwLock;
use tracing::trace;

/// Question repository backed by a process-local table.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    table: RwLock<QuestionTable>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already-materialized questions
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            table: RwLock::new(QuestionTable::from_rows(questions)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert_one(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let stored = self.table.write().await.insert(question);
        trace!("inserted question {}", stored.id);
        Ok(stored)
    }

    async fn insert_many(
        &self,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(questions.into_iter().map(|q| table.insert(q)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Question>, RepositoryError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.table.read().await.rows().to_vec())
    }

    async fn find_by_field(
        &self,
        field: QuestionField,
        value: &str,
    ) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.table.read().await.matching(field, value))
    }

    async fn save(&self, question: Question) -> Result<Question, RepositoryError> {
        self.table.write().await.replace(question)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeletionResult, RepositoryError> {
        Ok(self.table.write().await.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_domain::QuestionPatch;

    fn new_question(subject: &str, difficulty: &str, marks: f64) -> NewQuestion {
        NewQuestion::new("Name a prime.", subject, "numbers", difficulty, marks)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryQuestionRepository::new();
        let created = repo.insert_one(new_question("math", "easy", 2.0)).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_many_keeps_order() {
        let repo = InMemoryQuestionRepository::new();
        let created = repo
            .insert_many(vec![
                new_question("math", "easy", 1.0),
                new_question("cs", "hard", 2.0),
                new_question("bio", "medium", 3.0),
            ])
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, created);
        assert_eq!(all[2].subject, "bio");
    }

    #[tokio::test]
    async fn test_find_by_field_is_exact_match() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert_many(vec![
            new_question("math", "easy", 1.0),
            new_question("math", "Easy", 1.0),
            new_question("cs", "easy", 1.0),
        ])
        .await
        .unwrap();

        let easy = repo
            .find_by_field(QuestionField::Difficulty, "easy")
            .await
            .unwrap();
        assert_eq!(easy.len(), 2);

        let math = repo
            .find_by_field(QuestionField::Subject, "math")
            .await
            .unwrap();
        assert_eq!(math.len(), 2);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryQuestionRepository::new();
        let mut q = repo.insert_one(new_question("math", "easy", 1.0)).await.unwrap();
        q.apply(&QuestionPatch::default().with_difficulty("hard"));

        repo.save(q.clone()).await.unwrap();
        let found = repo.find_by_id(&q.id).await.unwrap().unwrap();
        assert_eq!(found.difficulty, "hard");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryQuestionRepository::new();
        let q = repo.insert_one(new_question("math", "easy", 1.0)).await.unwrap();

        assert_eq!(repo.delete_by_id(&q.id).await.unwrap().deleted_count, 1);
        assert_eq!(repo.delete_by_id(&q.id).await.unwrap().deleted_count, 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

//! In-test question repository with call counters and failure injection.

use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use async_trait::async_trait;
use chrono::Utc;
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub(crate) struct MockRepository {
    questions: Mutex<Vec<Question>>,
    next_id: AtomicUsize,
    fail: bool,
    find_by_field_calls: AtomicUsize,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockRepository {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_questions(questions: Vec<NewQuestion>) -> Self {
        let repo = Self::default();
        {
            let mut stored = repo.questions.lock().unwrap();
            for q in questions {
                let id = repo.next_id.fetch_add(1, Ordering::SeqCst);
                stored.push(q.into_question(format!("q{id}"), Utc::now()));
            }
        }
        repo
    }

    pub(crate) fn find_by_field_calls(&self) -> usize {
        self.find_by_field_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            Err(RepositoryError::Storage("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl QuestionRepository for MockRepository {
    async fn insert_one(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = question.into_question(format!("q{id}"), Utc::now());
        self.questions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn insert_many(
        &self,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut created = Vec::with_capacity(questions.len());
        for q in questions {
            created.push(self.insert_one(q).await?);
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Question>, RepositoryError> {
        self.check()?;
        let stored = self.questions.lock().unwrap();
        Ok(stored.iter().find(|q| q.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn find_by_field(
        &self,
        field: QuestionField,
        value: &str,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.find_by_field_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let stored = self.questions.lock().unwrap();
        Ok(stored
            .iter()
            .filter(|q| q.field(field) == value)
            .cloned()
            .collect())
    }

    async fn save(&self, question: Question) -> Result<Question, RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut stored = self.questions.lock().unwrap();
        let slot = stored
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| RepositoryError::Storage(format!("missing {}", question.id)))?;
        *slot = question.clone();
        Ok(question)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeletionResult, RepositoryError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut stored = self.questions.lock().unwrap();
        let before = stored.len();
        stored.retain(|q| q.id != id);
        Ok(DeletionResult::deleted((before - stored.len()) as u64))
    }
}

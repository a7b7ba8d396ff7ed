//! JSON file question repository
//!
//! Keeps the table in memory and rewrites the whole file after every
//! mutation. Writes go to a sibling `.tmp` file first and are then renamed
//! over the data file.

use super::table::QuestionTable;
use async_trait::async_trait;
use qbank_application::{QuestionRepository, RepositoryError};
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionField};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Question repository persisted as a JSON array on disk.
#[derive(Debug)]
pub struct JsonFileQuestionRepository {
    path: PathBuf,
    table: RwLock<QuestionTable>,
}

impl JsonFileQuestionRepository {
    /// Open the data file, starting empty if it does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();

        let rows = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<Question>>(&bytes).map_err(|e| {
                RepositoryError::Serialization(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Loaded {} questions from {}",
            rows.len(),
            path.display()
        );

        Ok(Self {
            path,
            table: RwLock::new(QuestionTable::from_rows(rows)),
        })
    }

    /// Get the path to the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the table and swap it in once the copy
    /// is on disk. A failed write leaves the in-memory table untouched.
    async fn commit<T>(
        &self,
        change: impl FnOnce(&mut QuestionTable) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let output = change(&mut staged)?;
        self.persist(&staged).await?;
        *table = staged;
        Ok(output)
    }

    async fn persist(&self, table: &QuestionTable) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(table.rows())
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(
            "Persisted {} questions to {}",
            table.rows().len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for JsonFileQuestionRepository {
    async fn insert_one(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        self.commit(|table| Ok(table.insert(question))).await
    }

    async fn insert_many(
        &self,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.commit(|table| Ok(questions.into_iter().map(|q| table.insert(q)).collect()))
            .await
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
        self.commit(|table| table.replace(question)).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeletionResult, RepositoryError> {
        if self.table.read().await.get(id).is_none() {
            return Ok(DeletionResult::deleted(0));
        }
        self.commit(|table| Ok(table.remove(id))).await
    }
}

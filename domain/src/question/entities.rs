//! Question entities and value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a question by the repository
pub type QuestionId = String;

/// A stored question (Entity)
///
/// Owned by the repository. Text fields are kept trimmed; `creation_date`
/// is set once on insert and never touched by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
    pub marks: f64,
    pub creation_date: DateTime<Utc>,
}

impl Question {
    /// Apply every field present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &QuestionPatch) {
        if let Some(question) = &patch.question {
            self.question = question.trim().to_string();
        }
        if let Some(subject) = &patch.subject {
            self.subject = subject.trim().to_string();
        }
        if let Some(topic) = &patch.topic {
            self.topic = topic.trim().to_string();
        }
        if let Some(difficulty) = &patch.difficulty {
            self.difficulty = difficulty.trim().to_string();
        }
        if let Some(marks) = patch.marks {
            self.marks = marks;
        }
    }

    /// Read the value of a searchable field
    pub fn field(&self, field: QuestionField) -> &str {
        match field {
            QuestionField::Subject => &self.subject,
            QuestionField::Topic => &self.topic,
            QuestionField::Difficulty => &self.difficulty,
        }
    }
}

/// Insert payload for a question
///
/// Every field is optional on the wire; missing text defaults to empty
/// and missing marks to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewQuestion {
    pub question: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
    pub marks: f64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        subject: impl Into<String>,
        topic: impl Into<String>,
        difficulty: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            question: question.into(),
            subject: subject.into(),
            topic: topic.into(),
            difficulty: difficulty.into(),
            marks,
        }
    }

    /// Materialize the stored record under the given id and creation time.
    pub fn into_question(self, id: impl Into<QuestionId>, creation_date: DateTime<Utc>) -> Question {
        Question {
            id: id.into(),
            question: self.question.trim().to_string(),
            subject: self.subject.trim().to_string(),
            topic: self.topic.trim().to_string(),
            difficulty: self.difficulty.trim().to_string(),
            marks: self.marks,
            creation_date,
        }
    }
}

/// Partial update for a question
///
/// `Some` means the field was provided and is applied as-is, including
/// zero marks and empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
}

impl QuestionPatch {
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_marks(mut self, marks: f64) -> Self {
        self.marks = Some(marks);
        self
    }

    /// True when no field was provided
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.subject.is_none()
            && self.topic.is_none()
            && self.difficulty.is_none()
            && self.marks.is_none()
    }
}

/// Fields a question can be looked up by equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Subject,
    Topic,
    Difficulty,
}

impl QuestionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionField::Subject => "subject",
            QuestionField::Topic => "topic",
            QuestionField::Difficulty => "difficulty",
        }
    }
}

impl std::fmt::Display for QuestionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Acknowledgement returned by a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeletionResult {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        NewQuestion::new("What is 2 + 2?", "math", "arithmetic", "easy", 5.0)
            .into_question("q-1", Utc::now())
    }

    #[test]
    fn test_into_question_trims_text_fields() {
        let q = NewQuestion::new("  Define entropy. ", " physics", "thermo  ", " hard ", 10.0)
            .into_question("q-2", Utc::now());
        assert_eq!(q.question, "Define entropy.");
        assert_eq!(q.subject, "physics");
        assert_eq!(q.topic, "thermo");
        assert_eq!(q.difficulty, "hard");
        assert_eq!(q.marks, 10.0);
    }

    #[test]
    fn test_apply_marks_only_leaves_other_fields() {
        let mut q = sample();
        let before = q.clone();
        q.apply(&QuestionPatch::default().with_marks(8.0));

        assert_eq!(q.marks, 8.0);
        assert_eq!(q.question, before.question);
        assert_eq!(q.subject, before.subject);
        assert_eq!(q.topic, before.topic);
        assert_eq!(q.difficulty, before.difficulty);
        assert_eq!(q.creation_date, before.creation_date);
    }

    #[test]
    fn test_apply_keeps_zero_and_empty_values() {
        let mut q = sample();
        q.apply(&QuestionPatch::default().with_marks(0.0).with_topic(""));
        assert_eq!(q.marks, 0.0);
        assert_eq!(q.topic, "");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut q = sample();
        let before = q.clone();
        let patch = QuestionPatch::default();
        assert!(patch.is_empty());
        q.apply(&patch);
        assert_eq!(q, before);
    }

    #[test]
    fn test_patch_deserialize_distinguishes_missing_from_zero() {
        let patch: QuestionPatch = serde_json::from_str(r#"{"marks": 0}"#).unwrap();
        assert_eq!(patch.marks, Some(0.0));
        assert!(patch.subject.is_none());
    }

    #[test]
    fn test_new_question_deserialize_defaults() {
        let new: NewQuestion = serde_json::from_str(r#"{"question": "Q"}"#).unwrap();
        assert_eq!(new.question, "Q");
        assert_eq!(new.marks, 0.0);
        assert!(new.difficulty.is_empty());
    }

    #[test]
    fn test_question_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("creationDate").is_some());
        assert_eq!(value["difficulty"], "easy");
    }

    #[test]
    fn test_field_lookup() {
        let q = sample();
        assert_eq!(q.field(QuestionField::Subject), "math");
        assert_eq!(q.field(QuestionField::Topic), "arithmetic");
        assert_eq!(q.field(QuestionField::Difficulty), "easy");
    }

    #[test]
    fn test_deletion_result_serialization() {
        let json = serde_json::to_value(DeletionResult::deleted(1)).unwrap();
        assert_eq!(json["acknowledged"], true);
        assert_eq!(json["deletedCount"], 1);
    }
}

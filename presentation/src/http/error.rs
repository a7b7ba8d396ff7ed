//! HTTP error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qbank_application::{GeneratePaperError, ManageQuestionsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure returned to HTTP clients.
///
/// Repository failures collapse into a generic message naming the
/// operation; the underlying error is logged by the use case, not sent.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Question not found")]
    NotFound,

    #[error("Invalid difficulty distribution")]
    InvalidDistribution,

    #[error("Error in {operation}")]
    RepositoryFailure { operation: &'static str },
}

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl ApiError {
    /// Translate a question-management failure, naming the operation on 500s
    pub(crate) fn managing(operation: &'static str) -> impl FnOnce(ManageQuestionsError) -> Self {
        move |e| match e {
            ManageQuestionsError::NotFound(_) => ApiError::NotFound,
            ManageQuestionsError::Repository(_) => ApiError::RepositoryFailure { operation },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidDistribution => StatusCode::BAD_REQUEST,
            ApiError::RepositoryFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GeneratePaperError> for ApiError {
    fn from(e: GeneratePaperError) -> Self {
        match e {
            GeneratePaperError::InvalidDistribution(_) => ApiError::InvalidDistribution,
            GeneratePaperError::Repository(_) => ApiError::RepositoryFailure {
                operation: "generating a question paper",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            msg: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

//! HTTP surface
//!
//! Routes are grouped per resource and share an [`AppState`] holding the
//! use cases. Every handler returns JSON; failures go through [`ApiError`].

pub mod dto;
pub mod error;
mod question;

pub use error::{ApiError, ErrorBody};

use axum::Router;
use axum::routing::get;
use qbank_application::{GeneratePaperUseCase, ManageQuestionsUseCase, QuestionRepository};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

const WELCOME: &str = "Welcome to the Server. Server is running!";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<ManageQuestionsUseCase>,
    pub papers: Arc<GeneratePaperUseCase>,
}

impl AppState {
    /// Wire both use cases to the same repository
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            questions: Arc::new(ManageQuestionsUseCase::new(repository.clone())),
            papers: Arc::new(GeneratePaperUseCase::new(repository)),
        }
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/api/question", question::create_router())
        // Router layers are called bottom to top
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME
}

//! Handlers mounted under `/api/question`

use super::AppState;
use super::dto::{GeneratePaperRequest, SearchByDifficultyRequest, SearchBySubjectRequest};
use super::error::ApiError;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use qbank_application::GeneratePaperInput;
use qbank_domain::{DeletionResult, NewQuestion, Question, QuestionPatch};

pub(crate) fn create_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_question))
        .route("/createMany", post(create_many_questions))
        .route("/get/{id}", get(get_question_by_id))
        .route("/getAll", get(get_all_questions))
        .route("/update/{id}", put(update_question_by_id))
        .route("/delete/{id}", delete(delete_question_by_id))
        .route("/searchByDifficulty", post(search_by_difficulty))
        .route("/searchBySubject", post(search_by_subject))
        .route("/generateQuestionPaper", post(generate_question_paper))
}

async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<NewQuestion>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questions
        .create(body)
        .await
        .map_err(ApiError::managing("creating a question"))?;
    Ok(Json(question))
}

async fn create_many_questions(
    State(state): State<AppState>,
    Json(body): Json<Vec<NewQuestion>>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state
        .questions
        .create_many(body)
        .await
        .map_err(ApiError::managing("creating questions"))?;
    Ok(Json(questions))
}

async fn get_question_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questions
        .get_by_id(&id)
        .await
        .map_err(ApiError::managing("retrieving a question"))?;
    Ok(Json(question))
}

async fn get_all_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state
        .questions
        .get_all()
        .await
        .map_err(ApiError::managing("retrieving questions"))?;
    Ok(Json(questions))
}

async fn update_question_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<QuestionPatch>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questions
        .update_by_id(&id, patch)
        .await
        .map_err(ApiError::managing("updating a question"))?;
    Ok(Json(question))
}

async fn delete_question_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletionResult>, ApiError> {
    let result = state
        .questions
        .delete_by_id(&id)
        .await
        .map_err(ApiError::managing("deleting a question"))?;
    Ok(Json(result))
}

async fn search_by_difficulty(
    State(state): State<AppState>,
    Json(body): Json<SearchByDifficultyRequest>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state
        .questions
        .search_by_difficulty(&body.difficulty)
        .await
        .map_err(ApiError::managing("searching by difficulty"))?;
    Ok(Json(questions))
}

async fn search_by_subject(
    State(state): State<AppState>,
    Json(body): Json<SearchBySubjectRequest>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state
        .questions
        .search_by_subject(&body.subject)
        .await
        .map_err(ApiError::managing("searching by subject"))?;
    Ok(Json(questions))
}

async fn generate_question_paper(
    State(state): State<AppState>,
    Json(body): Json<GeneratePaperRequest>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let input: GeneratePaperInput = body.into();
    let paper = state.papers.execute(&input).await?;
    Ok(Json(paper))
}

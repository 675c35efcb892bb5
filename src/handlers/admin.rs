// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        draft::{AddQuestionRequest, CreateDraftRequest, QuizDraft},
        quiz::{Quiz, SaveQuizRequest},
        result::ShortlistRequest,
    },
    state::AppState,
};

const RESULTS_FILENAME: &str = "interview_results.csv";
const SHORTLIST_FILENAME: &str = "shortlisted_candidates.csv";

/// Lists the names of all saved quizzes, sorted.
pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut quizzes = state.quizzes().list().await?;
    quizzes.sort();

    Ok(Json(json!({ "quizzes": quizzes })))
}

/// Saves a quiz, replacing any quiz with the same name.
pub async fn save_quiz(
    State(state): State<AppState>,
    Json(payload): Json<SaveQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    for question in &payload.questions {
        question.validate()?;
    }

    let quiz = Quiz::new(payload.quiz_name, payload.questions);
    state.quizzes().save(&quiz).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "quiz_name": quiz.quiz_name,
            "questions": quiz.questions.len(),
        })),
    ))
}

/// Returns a stored quiz including correct answers.
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state.quizzes().load(&name).await?;
    Ok(Json(quiz))
}

/// Builds the link candidates open to take a quiz.
pub async fn quiz_link(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Only link to quizzes that exist.
    let quiz = state.quizzes().load(&name).await?;

    let link = share_link(&state.config.public_base_url, &quiz.quiz_name);

    Ok(Json(json!({
        "quiz_name": quiz.quiz_name,
        "quiz_link": link.as_str(),
    })))
}

/// `<base>/?quiz_name=<name>`, keeping any path prefix of the base URL.
fn share_link(base: &Url, quiz_name: &str) -> Url {
    let mut link = base.clone();
    if !link.path().ends_with('/') {
        let path = format!("{}/", link.path());
        link.set_path(&path);
    }
    link.set_fragment(None);
    link.query_pairs_mut()
        .clear()
        .append_pair("quiz_name", quiz_name);
    link
}

/// Opens an empty authoring draft.
pub async fn create_draft(
    Json(payload): Json<CreateDraftRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    Ok((StatusCode::CREATED, Json(QuizDraft::new(payload.quiz_name))))
}

/// Returns the given draft with one more question at the end.
pub async fn add_draft_question(
    Json(payload): Json<AddQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    Ok(Json(payload.draft.with_question(payload.question)))
}

/// Lists every recorded result in ledger order.
pub async fn list_results(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let results = state.ledger().read_all().await?;
    Ok(Json(results))
}

/// Downloads the full ledger CSV.
pub async fn download_results(State(state): State<AppState>) -> Result<Response, AppError> {
    let bytes = state
        .ledger()
        .raw()
        .await?
        .ok_or(AppError::NotFound("No results recorded yet".to_string()))?;

    Ok(csv_attachment(RESULTS_FILENAME, bytes))
}

/// Re-derives the shortlist for a qualifying score.
pub async fn derive_shortlist(
    State(state): State<AppState>,
    Json(payload): Json<ShortlistRequest>,
) -> Result<impl IntoResponse, AppError> {
    let shortlist = state.shortlist().derive(payload.qualifying_score).await?;

    Ok(Json(json!({
        "qualifying_score": shortlist.threshold,
        "shortlisted_count": shortlist.records.len(),
        "total_candidates": shortlist.ledger_size,
        "shortlisted": shortlist.records,
        "shortlisted_csv_url": "/api/admin/shortlist/download",
    })))
}

/// Downloads the latest shortlist CSV.
pub async fn download_shortlist(State(state): State<AppState>) -> Result<Response, AppError> {
    let bytes = state
        .shortlist()
        .raw()
        .await?
        .ok_or(AppError::NotFound("No shortlist derived yet".to_string()))?;

    Ok(csv_attachment(SHORTLIST_FILENAME, bytes))
}

fn csv_attachment(filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

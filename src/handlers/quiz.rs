// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::result::{StartQuizRequest, Submission},
    state::AppState,
};

/// Opens a quiz for a candidate.
///
/// Returns the questions without their correct answers.
pub async fn start_quiz(
    State(state): State<AppState>,
    Json(req): Json<StartQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let quiz = state.session().start(&req.quiz_name).await?;
    tracing::info!(quiz = %req.quiz_name, candidate = %req.email, "quiz started");

    Ok(Json(json!({
        "quiz_name": quiz.quiz_name,
        "name": req.name,
        "email": req.email,
        "questions": quiz.public_questions(),
    })))
}

/// Scores a candidate's answers and appends the result to the ledger.
pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<impl IntoResponse, AppError> {
    submission.validate()?;

    let outcome = state.session().submit(submission).await?;

    Ok(Json(json!({
        "name": outcome.record.name,
        "score": outcome.record.score,
        "total_questions": outcome.total_questions,
        "message": "Quiz submitted successfully"
    })))
}

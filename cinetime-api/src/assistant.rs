use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/assistant/ask", post(ask))
}

async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = req.question.as_str();
    if question.trim().is_empty() {
        return Err(AppError::ValidationError("question must not be empty".to_string()));
    }

    let rule = state.assistant.matching_rule(question).map(|r| r.name.as_str());
    debug!(rule = rule.unwrap_or("fallback"), "Assistant question");

    if !state.assistant_delay.is_zero() {
        tokio::time::sleep(state.assistant_delay).await;
    }
    Ok(Json(AskResponse {
        answer: state.assistant.respond(question),
    }))
}

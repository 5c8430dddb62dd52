use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use cinetime_core::{ContactReceipt, ContactRequest};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactReceipt>), AppError> {
    let receipt = state.contact.submit(req).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

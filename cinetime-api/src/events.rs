use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cinetime_catalog::{EventFilter, LiveEvent};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/sports-events", get(list_events))
}

async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<LiveEvent>>, AppError> {
    let events = state.catalog.list_events().await?;
    Ok(Json(filter.apply(&events)))
}

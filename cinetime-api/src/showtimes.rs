use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cinetime_catalog::Showtime;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShowtimeQuery {
    pub movie_id: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/showtimes", get(list_showtimes))
}

async fn list_showtimes(
    State(state): State<AppState>,
    Query(query): Query<ShowtimeQuery>,
) -> Result<Json<Vec<Showtime>>, AppError> {
    let showtimes = state.catalog.list_showtimes(query.movie_id).await?;
    Ok(Json(showtimes))
}

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cinetime_catalog::{Movie, MovieFilter};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/movies", get(list_movies))
}

/// `?genre=Action&search=spider`; `genre=All` is the same as no genre.
async fn list_movies(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.catalog.list_movies().await?;
    Ok(Json(filter.apply(&movies)))
}

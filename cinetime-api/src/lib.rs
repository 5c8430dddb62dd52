use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod assistant;
pub mod bookings;
pub mod contact;
pub mod error;
pub mod events;
pub mod movies;
pub mod showtimes;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(movies::routes())
        .merge(showtimes::routes())
        .merge(bookings::routes())
        .merge(events::routes())
        .merge(contact::routes())
        .merge(assistant::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

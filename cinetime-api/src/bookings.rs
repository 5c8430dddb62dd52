use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use cinetime_booking::{
    BookingSession, BookingStep, Checkout, HistoryEntry, Listing, QuickBooking, ToggleOutcome,
};
use cinetime_catalog::{DateWindow, PriceBreakdown, SeatId};
use cinetime_core::CustomerInfo;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub movie_id: u32,
    pub theater: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: Vec<String>,
    pub customer: CustomerInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub amounts: PriceBreakdown,
}

/// Seat-count booking for an event or a movie. Exactly one of `movie_id`
/// and `event_id` is set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickBookingBody {
    #[serde(default)]
    pub movie_id: Option<u32>,
    #[serde(default)]
    pub event_id: Option<u32>,
    pub seats: u32,
    pub date: NaiveDate,
    pub time: String,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickBookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub total_inr: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub upcoming: Vec<HistoryEntry>,
    pub past: Vec<HistoryEntry>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/quick", post(create_quick_booking))
}

/// Runs the whole movie → showtime → seats → summary flow for one request,
/// then pays. Seats are priced here; clients never send amounts.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let today = Utc::now().date_naive();
    if !DateWindow::starting(today).is_selectable(req.date) {
        return Err(AppError::ValidationError(format!("{} is in the past", req.date)));
    }

    let movie = state.catalog.get_movie(req.movie_id).await?;
    let showtime = state
        .catalog
        .list_showtimes(req.movie_id)
        .await?
        .into_iter()
        .find(|s| s.theater == req.theater && s.time == req.time)
        .ok_or_else(|| {
            AppError::NotFoundError(format!("No {} show at {}", req.time, req.theater))
        })?;

    let mut session = BookingSession::new(today, state.seat_map.clone(), state.max_seats);
    session.choose_date(req.date);
    session.choose_movie(movie)?;
    session.choose_showtime(showtime)?;

    for raw in &req.seats {
        let seat: SeatId = raw.parse()?;
        state.seat_map.check(&seat)?;
        if !state.seat_map.is_available(&seat) {
            return Err(AppError::ConflictError(format!("Seat {} is not available", seat)));
        }
        match session.toggle_seat(seat.clone())? {
            ToggleOutcome::Selected => {}
            _ => {
                return Err(AppError::ValidationError(format!("Seat {} is listed more than once", seat)))
            }
        }
    }

    if session.proceed_to_summary()? != BookingStep::Summary {
        return Err(AppError::ValidationError("Select at least one seat".to_string()));
    }

    let checkout = Checkout::new(state.submitter(), state.pricing.clone());
    let booking = checkout.pay(&session, req.customer).await?;

    info!(booking_id = %booking.booking_id, "Booking created");
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            booking_id: booking.booking_id,
            amounts: booking.amounts,
        }),
    ))
}

/// Books a number of seats without a seat map, at a flat price per seat.
async fn create_quick_booking(
    State(state): State<AppState>,
    Json(req): Json<QuickBookingBody>,
) -> Result<(StatusCode, Json<QuickBookingResponse>), AppError> {
    let listing = match (req.movie_id, req.event_id) {
        (Some(movie_id), None) => Listing::Movie(state.catalog.get_movie(movie_id).await?),
        (None, Some(event_id)) => Listing::Event(state.catalog.get_event(event_id).await?),
        _ => {
            return Err(AppError::ValidationError(
                "Give either movieId or eventId".to_string(),
            ))
        }
    };

    let mut booking = QuickBooking::new(listing, req.date, &req.time, req.seats);
    if let Some(text) = &req.special_requests {
        booking = booking.with_special_requests(text);
    }

    let today = Utc::now().date_naive();
    let checkout = Checkout::new(state.submitter(), state.pricing.clone());
    let request = checkout.book_quick(&booking, req.customer, today).await?;

    info!(booking_id = %request.booking_id, kind = request.kind.as_str(), "Quick booking created");
    Ok((
        StatusCode::CREATED,
        Json(QuickBookingResponse {
            success: true,
            booking_id: request.booking_id,
            total_inr: request.total_inr,
        }),
    ))
}

async fn list_bookings(State(state): State<AppState>) -> Json<HistoryResponse> {
    let today = Utc::now().date_naive();
    let history = state.bookings.history().await;

    Json(HistoryResponse {
        upcoming: history.upcoming(today).into_iter().cloned().collect(),
        past: history.past(today).into_iter().cloned().collect(),
    })
}

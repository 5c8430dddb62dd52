use async_trait::async_trait;
use chrono::NaiveDate;
use cinetime_catalog::{PriceBreakdown, SeatId};
use serde::{Deserialize, Serialize};

use crate::customer::CustomerInfo;

/// Everything the payment step hands to the booking backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub booking_id: String,
    pub movie_id: u32,
    pub movie_title: String,
    pub theater: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: Vec<SeatId>,
    pub customer: CustomerInfo,
    pub amounts: PriceBreakdown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    Movie,
    Event,
}

impl BookingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Movie => "movie",
            BookingKind::Event => "event",
        }
    }
}

/// Seat-count booking from the quick booking form. No seat map is involved;
/// the price is a flat amount per seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickBookingRequest {
    pub booking_id: String,
    pub kind: BookingKind,
    pub listing_id: u32,
    pub title: String,
    pub venue: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: u32,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub total_inr: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub success: bool,
    pub booking_id: String,
}

#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    /// Submit a priced booking. No retry is attempted by callers.
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError>;

    async fn submit_quick(&self, request: QuickBookingRequest) -> Result<BookingConfirmation, BookingError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Booking rejected: {0}")]
    Rejected(String),

    #[error("Booking service unavailable: {0}")]
    Unavailable(String),
}

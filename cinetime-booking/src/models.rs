use chrono::{DateTime, NaiveDate, Utc};
use cinetime_catalog::{Movie, PriceBreakdown, SeatId, Showtime};
use cinetime_core::{BookingRequest, CustomerInfo, QuickBookingRequest};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub use cinetime_core::BookingKind;

static BOOKING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Status shown on the bookings page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

/// Booking assembled when the customer pays. Lives only in process memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: String,
    pub movie: Movie,
    pub showtime: Showtime,
    pub date: NaiveDate,
    pub seats: Vec<SeatId>,
    pub customer: CustomerInfo,
    pub amounts: PriceBreakdown,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// `BK`, the creation time in unix milliseconds, then a process-wide
    /// sequence number so bookings made in the same millisecond differ.
    pub fn generate_id(at: DateTime<Utc>) -> String {
        let seq = BOOKING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        format!("BK{}-{:04}", at.timestamp_millis(), seq % 10_000)
    }

    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            booking_id: self.booking_id.clone(),
            movie_id: self.movie.id,
            movie_title: self.movie.title.clone(),
            theater: self.showtime.theater.clone(),
            date: self.date,
            time: self.showtime.time.clone(),
            seats: self.seats.clone(),
            customer: self.customer.clone(),
            amounts: self.amounts,
        }
    }

    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            booking_id: self.booking_id.clone(),
            title: self.movie.title.clone(),
            kind: BookingKind::Movie,
            date: self.date,
            time: self.showtime.time.clone(),
            seats: self.seats.len() as u32,
            venue: self.showtime.theater.clone(),
            total_amount_inr: self.amounts.total_inr,
            status: BookingStatus::Confirmed,
            booking_date: self.created_at.date_naive(),
        }
    }
}

/// One row of the booking history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub booking_id: String,
    pub title: String,
    pub kind: BookingKind,
    pub date: NaiveDate,
    pub time: String,
    pub seats: u32,
    pub venue: String,
    pub total_amount_inr: u32,
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
}

impl HistoryEntry {
    pub fn from_request(request: &BookingRequest, booked_on: NaiveDate) -> Self {
        Self {
            booking_id: request.booking_id.clone(),
            title: request.movie_title.clone(),
            kind: BookingKind::Movie,
            date: request.date,
            time: request.time.clone(),
            seats: request.seats.len() as u32,
            venue: request.theater.clone(),
            total_amount_inr: request.amounts.total_inr,
            status: BookingStatus::Confirmed,
            booking_date: booked_on,
        }
    }

    pub fn from_quick(request: &QuickBookingRequest, booked_on: NaiveDate) -> Self {
        Self {
            booking_id: request.booking_id.clone(),
            title: request.title.clone(),
            kind: request.kind,
            date: request.date,
            time: request.time.clone(),
            seats: request.seats,
            venue: request.venue.clone(),
            total_amount_inr: request.total_inr,
            status: BookingStatus::Confirmed,
            booking_date: booked_on,
        }
    }
}

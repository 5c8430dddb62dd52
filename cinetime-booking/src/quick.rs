use chrono::{DateTime, NaiveDate, Utc};
use cinetime_catalog::schedule::bookable_dates;
use cinetime_catalog::{LiveEvent, Movie, Showtime};
use cinetime_core::{BookingKind, CustomerInfo, QuickBookingRequest};

use crate::models::Booking;
use crate::selection::MAX_SEATS;

pub const MOVIE_SEAT_PRICE_INR: u32 = 200;
pub const EVENT_SEAT_PRICE_INR: u32 = 300;

/// What the quick form is booking.
#[derive(Debug, Clone)]
pub enum Listing {
    Movie(Movie),
    Event(LiveEvent),
}

impl Listing {
    pub fn kind(&self) -> BookingKind {
        match self {
            Listing::Movie(_) => BookingKind::Movie,
            Listing::Event(_) => BookingKind::Event,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Listing::Movie(m) => m.id,
            Listing::Event(e) => e.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Listing::Movie(m) => &m.title,
            Listing::Event(e) => &e.title,
        }
    }

    /// Events have a single venue; a movie is booked at its first listed theater.
    pub fn venue(&self) -> &str {
        match self {
            Listing::Movie(m) => m.theaters.first().map(String::as_str).unwrap_or_default(),
            Listing::Event(e) => &e.venue,
        }
    }

    pub fn seat_price_inr(&self) -> u32 {
        match self {
            Listing::Movie(_) => MOVIE_SEAT_PRICE_INR,
            Listing::Event(_) => EVENT_SEAT_PRICE_INR,
        }
    }
}

/// Seat count, date and time slot picked on the quick booking form.
#[derive(Debug, Clone)]
pub struct QuickBooking {
    listing: Listing,
    date: NaiveDate,
    time: String,
    seats: u32,
    special_requests: Option<String>,
}

impl QuickBooking {
    pub fn new(listing: Listing, date: NaiveDate, time: &str, seats: u32) -> Self {
        Self {
            listing,
            date,
            time: time.to_string(),
            seats,
            special_requests: None,
        }
    }

    pub fn with_special_requests(mut self, text: &str) -> Self {
        if !text.trim().is_empty() {
            self.special_requests = Some(text.to_string());
        }
        self
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Flat price per seat, no fee or tax.
    pub fn total_inr(&self) -> u32 {
        self.listing.seat_price_inr() * self.seats
    }

    /// 1 to 10 seats, a date within the next seven days, one of the daily slots.
    pub fn validate(&self, today: NaiveDate) -> Result<(), QuickBookingError> {
        if self.seats == 0 || self.seats as usize > MAX_SEATS {
            return Err(QuickBookingError::SeatCount {
                requested: self.seats,
                max: MAX_SEATS,
            });
        }
        if !bookable_dates(today).contains(&self.date) {
            return Err(QuickBookingError::DateUnavailable(self.date));
        }
        if !Showtime::is_time_slot(&self.time) {
            return Err(QuickBookingError::UnknownTimeSlot(self.time.clone()));
        }
        Ok(())
    }

    pub fn to_request(&self, customer: CustomerInfo, at: DateTime<Utc>) -> QuickBookingRequest {
        QuickBookingRequest {
            booking_id: Booking::generate_id(at),
            kind: self.listing.kind(),
            listing_id: self.listing.id(),
            title: self.listing.title().to_string(),
            venue: self.listing.venue().to_string(),
            date: self.date,
            time: self.time.clone(),
            seats: self.seats,
            customer,
            special_requests: self.special_requests.clone(),
            total_inr: self.total_inr(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuickBookingError {
    #[error("Number of seats must be between 1 and {max} (got {requested})")]
    SeatCount { requested: u32, max: usize },

    #[error("{0} is not open for booking")]
    DateUnavailable(NaiveDate),

    #[error("No show at {0}")]
    UnknownTimeSlot(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use cinetime_catalog::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn event() -> Listing {
        Listing::Event(fixtures::live_events().remove(0))
    }

    #[test]
    fn test_event_priced_at_300_per_seat() {
        let booking = QuickBooking::new(event(), today(), "07:00 PM", 4);
        assert!(booking.validate(today()).is_ok());
        assert_eq!(booking.total_inr(), 1200);

        let movie = QuickBooking::new(Listing::Movie(fixtures::movies().remove(1)), today(), "10:00 AM", 3);
        assert_eq!(movie.total_inr(), 600);
    }

    #[test]
    fn test_seat_count_bounds() {
        let none = QuickBooking::new(event(), today(), "07:00 PM", 0);
        assert_eq!(
            none.validate(today()),
            Err(QuickBookingError::SeatCount { requested: 0, max: 10 })
        );
        assert!(QuickBooking::new(event(), today(), "07:00 PM", 10).validate(today()).is_ok());
        assert!(QuickBooking::new(event(), today(), "07:00 PM", 11).validate(today()).is_err());
    }

    #[test]
    fn test_date_must_be_in_next_seven_days() {
        let last = today() + Duration::days(6);
        assert!(QuickBooking::new(event(), last, "04:00 PM", 1).validate(today()).is_ok());

        let too_far = today() + Duration::days(7);
        assert_eq!(
            QuickBooking::new(event(), too_far, "04:00 PM", 1).validate(today()),
            Err(QuickBookingError::DateUnavailable(too_far))
        );

        let yesterday = today() - Duration::days(1);
        assert!(QuickBooking::new(event(), yesterday, "04:00 PM", 1).validate(today()).is_err());
    }

    #[test]
    fn test_time_must_be_a_slot() {
        let booking = QuickBooking::new(event(), today(), "09:30 PM", 2);
        assert_eq!(
            booking.validate(today()),
            Err(QuickBookingError::UnknownTimeSlot("09:30 PM".into()))
        );
    }

    #[test]
    fn test_request_carries_listing_details() {
        let at = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 3, 15, 9, 0, 0).unwrap();
        let request = QuickBooking::new(event(), today(), "07:00 PM", 3)
            .with_special_requests("Aisle seats please")
            .to_request(CustomerInfo::new("Asha", "asha@example.com", "9876543210"), at);

        assert_eq!(request.kind, BookingKind::Event);
        assert_eq!(request.listing_id, 1);
        assert_eq!(request.venue, "Rajiv Gandhi International Stadium");
        assert_eq!(request.total_inr, 900);
        assert_eq!(request.special_requests.as_deref(), Some("Aisle seats please"));
        assert!(request.booking_id.starts_with("BK"));
    }
}

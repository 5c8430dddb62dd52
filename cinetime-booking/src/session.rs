use chrono::{DateTime, NaiveDate, Utc};
use cinetime_catalog::{Movie, PriceBreakdown, PricingEngine, SeatId, SeatMap, Showtime};
use cinetime_core::CustomerInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::models::Booking;
use crate::selection::{SeatSelection, SelectionError, ToggleOutcome};

/// Stage of the linear movie → showtime → seats → summary flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    Movies,
    Showtimes,
    Seats,
    Summary,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStep::Movies => "MOVIES",
            BookingStep::Showtimes => "SHOWTIMES",
            BookingStep::Seats => "SEATS",
            BookingStep::Summary => "SUMMARY",
        };
        f.write_str(name)
    }
}

/// Selections accumulated by one customer while booking.
///
/// Owned by a single flow and dropped when the flow ends.
#[derive(Debug, Clone)]
pub struct BookingSession {
    step: BookingStep,
    movie: Option<Movie>,
    date: NaiveDate,
    showtime: Option<Showtime>,
    selection: SeatSelection,
    seat_map: Arc<SeatMap>,
}

impl BookingSession {
    /// A fresh session on the movie list with `today` as the selected date.
    pub fn new(today: NaiveDate, seat_map: Arc<SeatMap>, max_seats: usize) -> Self {
        Self {
            step: BookingStep::Movies,
            movie: None,
            date: today,
            showtime: None,
            selection: SeatSelection::new(max_seats),
            seat_map,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn showtime(&self) -> Option<&Showtime> {
        self.showtime.as_ref()
    }

    pub fn seats(&self) -> &[SeatId] {
        self.selection.seats()
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Transition: Movies → Showtimes. Drops any earlier showtime and seats.
    pub fn choose_movie(&mut self, movie: Movie) -> Result<(), StepError> {
        self.expect_step(BookingStep::Movies, BookingStep::Showtimes)?;

        self.movie = Some(movie);
        self.showtime = None;
        self.selection.clear();
        self.step = BookingStep::Showtimes;
        Ok(())
    }

    /// The date can change at any stage without moving the flow.
    pub fn choose_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Transition: Showtimes → Seats
    pub fn choose_showtime(&mut self, showtime: Showtime) -> Result<(), StepError> {
        self.expect_step(BookingStep::Showtimes, BookingStep::Seats)?;

        self.showtime = Some(showtime);
        self.step = BookingStep::Seats;
        Ok(())
    }

    pub fn toggle_seat(&mut self, seat: SeatId) -> Result<ToggleOutcome, StepError> {
        if self.step != BookingStep::Seats {
            return Err(StepError::InvalidTransition {
                from: self.step,
                to: BookingStep::Seats,
            });
        }
        Ok(self.selection.toggle(seat, &self.seat_map)?)
    }

    /// Transition: Seats → Summary when at least one seat is held,
    /// otherwise the flow stays on Seats.
    pub fn proceed_to_summary(&mut self) -> Result<BookingStep, StepError> {
        self.expect_step(BookingStep::Seats, BookingStep::Summary)?;

        if !self.selection.is_empty() {
            self.step = BookingStep::Summary;
        }
        Ok(self.step)
    }

    /// Back to the movie list from anywhere. The selected date is kept.
    pub fn reset(&mut self) {
        self.movie = None;
        self.showtime = None;
        self.selection.clear();
        self.step = BookingStep::Movies;
    }

    pub fn quote(&self, pricing: &PricingEngine) -> PriceBreakdown {
        pricing.quote(&self.seat_map, self.selection.seats())
    }

    /// Assemble the booking record. Only possible on the summary step.
    pub fn to_booking(
        &self,
        customer: CustomerInfo,
        pricing: &PricingEngine,
        at: DateTime<Utc>,
    ) -> Result<Booking, StepError> {
        let (movie, showtime) = match (&self.movie, &self.showtime) {
            (Some(movie), Some(showtime)) if self.step == BookingStep::Summary => (movie, showtime),
            _ => return Err(StepError::Incomplete(self.step)),
        };

        Ok(Booking {
            booking_id: Booking::generate_id(at),
            movie: movie.clone(),
            showtime: showtime.clone(),
            date: self.date,
            seats: self.selection.seats().to_vec(),
            customer,
            amounts: self.quote(pricing),
            created_at: at,
        })
    }

    fn expect_step(&self, expected: BookingStep, to: BookingStep) -> Result<(), StepError> {
        if self.step != expected {
            return Err(StepError::InvalidTransition { from: self.step, to });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition { from: BookingStep, to: BookingStep },

    #[error("Booking is not ready for payment (current step {0})")]
    Incomplete(BookingStep),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinetime_catalog::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn session() -> BookingSession {
        BookingSession::new(today(), Arc::new(SeatMap::default()), 10)
    }

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    fn at_seats() -> BookingSession {
        let mut session = session();
        session.choose_movie(fixtures::movies().remove(0)).unwrap();
        session.choose_showtime(fixtures::showtimes().remove(0)).unwrap();
        session
    }

    #[test]
    fn test_full_flow() {
        let mut session = session();
        assert_eq!(session.step(), BookingStep::Movies);
        assert_eq!(session.date(), today());

        session.choose_movie(fixtures::movies().remove(3)).unwrap();
        assert_eq!(session.step(), BookingStep::Showtimes);
        assert!(session.showtime().is_none());
        assert!(session.seats().is_empty());

        session.choose_showtime(fixtures::showtimes().remove(2)).unwrap();
        assert_eq!(session.step(), BookingStep::Seats);

        session.toggle_seat(seat("A1")).unwrap();
        assert_eq!(session.proceed_to_summary().unwrap(), BookingStep::Summary);
    }

    #[test]
    fn test_zero_seats_stays_on_seats() {
        let mut session = at_seats();
        assert_eq!(session.proceed_to_summary().unwrap(), BookingStep::Seats);
        assert_eq!(session.step(), BookingStep::Seats);

        session.toggle_seat(seat("D1")).unwrap();
        assert_eq!(session.proceed_to_summary().unwrap(), BookingStep::Summary);
    }

    #[test]
    fn test_choosing_movie_clears_previous_selection() {
        let mut session = at_seats();
        session.toggle_seat(seat("A1")).unwrap();

        session.reset();
        assert_eq!(session.step(), BookingStep::Movies);
        assert!(session.movie().is_none());
        assert!(session.showtime().is_none());
        assert!(session.seats().is_empty());

        session.choose_movie(fixtures::movies().remove(1)).unwrap();
        assert_eq!(session.step(), BookingStep::Showtimes);
        assert!(session.seats().is_empty());
    }

    #[test]
    fn test_out_of_order_events_rejected() {
        let mut session = session();

        let err = session.choose_showtime(fixtures::showtimes().remove(0)).unwrap_err();
        assert_eq!(
            err,
            StepError::InvalidTransition {
                from: BookingStep::Movies,
                to: BookingStep::Seats
            }
        );
        assert!(session.toggle_seat(seat("A1")).is_err());
        assert!(session.proceed_to_summary().is_err());
        assert_eq!(session.step(), BookingStep::Movies);

        session.choose_movie(fixtures::movies().remove(0)).unwrap();
        assert!(session.choose_movie(fixtures::movies().remove(1)).is_err());
        assert_eq!(session.movie().unwrap().id, 1);
    }

    #[test]
    fn test_date_change_keeps_step() {
        let mut session = at_seats();
        let tomorrow = today().succ_opt().unwrap();
        session.choose_date(tomorrow);
        assert_eq!(session.date(), tomorrow);
        assert_eq!(session.step(), BookingStep::Seats);
    }

    #[test]
    fn test_capacity_error_surfaces_through_session() {
        let mut session = BookingSession::new(today(), Arc::new(SeatMap::default()), 1);
        session.choose_movie(fixtures::movies().remove(0)).unwrap();
        session.choose_showtime(fixtures::showtimes().remove(0)).unwrap();
        session.toggle_seat(seat("A1")).unwrap();

        let err = session.toggle_seat(seat("A2")).unwrap_err();
        assert_eq!(err, StepError::Selection(SelectionError::CapacityExceeded { max: 1 }));
        assert_eq!(session.seats(), &[seat("A1")]);
    }

    #[test]
    fn test_to_booking_requires_summary() {
        let mut session = at_seats();
        let pricing = PricingEngine::default();
        let customer = CustomerInfo::new("Priya", "priya@example.com", "9876543210");

        let err = session.to_booking(customer.clone(), &pricing, Utc::now()).unwrap_err();
        assert_eq!(err, StepError::Incomplete(BookingStep::Seats));

        for id in ["A1", "A2", "F1"] {
            session.toggle_seat(seat(id)).unwrap();
        }
        session.proceed_to_summary().unwrap();

        let booking = session.to_booking(customer, &pricing, Utc::now()).unwrap();
        assert!(booking.booking_id.starts_with("BK"));
        assert_eq!(booking.amounts.total_inr, 867);
        assert_eq!(booking.seats.len(), 3);
    }
}

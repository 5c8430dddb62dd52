pub mod models;
pub mod selection;
pub mod session;
pub mod checkout;
pub mod history;
pub mod quick;

pub use models::{Booking, BookingKind, BookingStatus, HistoryEntry};
pub use selection::{SeatSelection, SelectionError, ToggleOutcome, MAX_SEATS};
pub use session::{BookingSession, BookingStep, StepError};
pub use checkout::{Checkout, CheckoutError};
pub use history::BookingHistory;
pub use quick::{Listing, QuickBooking, QuickBookingError, EVENT_SEAT_PRICE_INR, MOVIE_SEAT_PRICE_INR};

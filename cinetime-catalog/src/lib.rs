pub mod movie;
pub mod showtime;
pub mod event;
pub mod seat;
pub mod pricing;
pub mod schedule;
pub mod fixtures;

pub use movie::{Movie, MovieFilter};
pub use showtime::Showtime;
pub use event::{EventCategory, EventFilter, LiveEvent};
pub use seat::{SeatError, SeatId, SeatMap, SeatTier};
pub use pricing::{PriceBreakdown, PricingConfig, PricingEngine};
pub use schedule::{DateWindow, DayLabel};

use serde::{Deserialize, Serialize};

/// Show slots offered every day.
pub const TIME_SLOTS: [&str; 5] = ["10:00 AM", "01:00 PM", "04:00 PM", "07:00 PM", "10:00 PM"];

/// A (time, theater, price) a movie can be booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub time: String,
    pub theater: String,
    /// Lowest ticket price for the show ("₹200 onwards")
    pub price_inr: u32,
}

impl Showtime {
    pub fn new(time: &str, theater: &str, price_inr: u32) -> Self {
        Self {
            time: time.to_string(),
            theater: theater.to_string(),
            price_inr,
        }
    }

    /// True for one of the five daily slots.
    pub fn is_time_slot(time: &str) -> bool {
        TIME_SLOTS.contains(&time)
    }
}

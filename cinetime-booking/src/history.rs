use chrono::NaiveDate;

use crate::models::{BookingStatus, HistoryEntry};

/// Booking list split the way the bookings page shows it.
#[derive(Debug, Clone, Default)]
pub struct BookingHistory {
    entries: Vec<HistoryEntry>,
}

impl BookingHistory {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Confirmed bookings for today or later.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= today && e.status == BookingStatus::Confirmed)
            .collect()
    }

    /// Anything dated before today, plus completed bookings.
    ///
    /// Cancelled future bookings appear in neither list.
    pub fn past(&self, today: NaiveDate) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.date < today || e.status == BookingStatus::Completed)
            .collect()
    }

    pub fn find(&self, booking_id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.booking_id == booking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, on: NaiveDate, status: BookingStatus) -> HistoryEntry {
        HistoryEntry {
            booking_id: id.to_string(),
            title: "Dune: Part Two".to_string(),
            kind: BookingKind::Movie,
            date: on,
            time: "04:00 PM".to_string(),
            seats: 1,
            venue: "INOX Movies, Hyderabad".to_string(),
            total_amount_inr: 200,
            status,
            booking_date: date(2024, 2, 25),
        }
    }

    #[test]
    fn test_upcoming_and_past_split() {
        let today = date(2024, 3, 15);
        let history = BookingHistory::new(vec![
            entry("BK1", date(2024, 3, 20), BookingStatus::Confirmed),
            entry("BK2", date(2024, 2, 28), BookingStatus::Completed),
            entry("BK3", date(2024, 3, 15), BookingStatus::Confirmed),
            entry("BK4", date(2024, 4, 1), BookingStatus::Cancelled),
            entry("BK5", date(2024, 3, 1), BookingStatus::Confirmed),
        ]);

        let upcoming: Vec<&str> = history.upcoming(today).iter().map(|e| e.booking_id.as_str()).collect();
        let past: Vec<&str> = history.past(today).iter().map(|e| e.booking_id.as_str()).collect();

        assert_eq!(upcoming, vec!["BK1", "BK3"]);
        assert_eq!(past, vec!["BK2", "BK5"]);
        assert!(history.find("BK4").is_some());
    }
}

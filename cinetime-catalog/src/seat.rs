use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Seats blocked in the reference auditorium.
pub const DEFAULT_BLOCKED_SEATS: [&str; 12] = [
    "A5", "A6", "B8", "C3", "C4", "D7", "E9", "F5", "F6", "G2", "H10", "I4",
];

/// A seat identifier: row letter followed by a 1-based column number ("F5").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: char,
    number: u16,
}

impl SeatId {
    pub fn new(row: char, number: u16) -> Result<Self, SeatError> {
        let row = row.to_ascii_uppercase();
        if !row.is_ascii_uppercase() || number == 0 {
            return Err(SeatError::Malformed(format!("{}{}", row, number)));
        }
        Ok(Self { row, number })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = SeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row = chars
            .next()
            .ok_or_else(|| SeatError::Malformed(s.to_string()))?;
        let number = chars
            .as_str()
            .parse::<u16>()
            .map_err(|_| SeatError::Malformed(s.to_string()))?;
        SeatId::new(row, number).map_err(|_| SeatError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}

/// Price tier derived from the row letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatTier {
    Regular,
    Premium,
}

/// One cell of the rendered seat grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: SeatId,
    pub tier: SeatTier,
    pub is_available: bool,
}

/// Static auditorium layout: rows `A..=last_row`, `seats_per_row` columns,
/// rows at or after `premium_from` are premium, `blocked` seats are sold.
#[derive(Debug, Clone)]
pub struct SeatMap {
    last_row: char,
    seats_per_row: u16,
    premium_from: char,
    blocked: HashSet<SeatId>,
}

impl SeatMap {
    pub fn new(
        last_row: char,
        seats_per_row: u16,
        premium_from: char,
        blocked: impl IntoIterator<Item = SeatId>,
    ) -> Self {
        Self {
            last_row: last_row.to_ascii_uppercase(),
            seats_per_row,
            premium_from: premium_from.to_ascii_uppercase(),
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Premium classification is a plain letter comparison and does not
    /// depend on the seat being inside the grid.
    pub fn tier(&self, seat: &SeatId) -> SeatTier {
        if seat.row() >= self.premium_from {
            SeatTier::Premium
        } else {
            SeatTier::Regular
        }
    }

    pub fn contains(&self, seat: &SeatId) -> bool {
        seat.row() <= self.last_row && seat.number() <= self.seats_per_row
    }

    pub fn is_blocked(&self, seat: &SeatId) -> bool {
        self.blocked.contains(seat)
    }

    /// Rejects seats outside the grid; blocked seats pass.
    pub fn check(&self, seat: &SeatId) -> Result<(), SeatError> {
        if self.contains(seat) {
            Ok(())
        } else {
            Err(SeatError::OutOfRange(seat.to_string()))
        }
    }

    /// A seat can be booked when it exists in the grid and is not blocked.
    pub fn is_available(&self, seat: &SeatId) -> bool {
        self.contains(seat) && !self.is_blocked(seat)
    }

    pub fn rows(&self) -> impl Iterator<Item = char> {
        'A'..=self.last_row
    }

    pub fn capacity(&self) -> usize {
        self.rows().count() * self.seats_per_row as usize
    }

    pub fn layout(&self) -> Vec<Vec<SeatView>> {
        self.rows()
            .map(|row| {
                (1..=self.seats_per_row)
                    .map(|number| {
                        let id = SeatId { row, number };
                        SeatView {
                            tier: self.tier(&id),
                            is_available: !self.is_blocked(&id),
                            id,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        let blocked = DEFAULT_BLOCKED_SEATS
            .iter()
            .filter_map(|s| s.parse().ok());
        Self::new('J', 12, 'F', blocked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Malformed seat identifier: {0}")]
    Malformed(String),

    #[error("Seat {0} does not exist in this auditorium")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_seat_ids() {
        assert_eq!(seat("F5").row(), 'F');
        assert_eq!(seat("H10").number(), 10);
        assert_eq!(seat("c3"), seat("C3"));
        assert_eq!(seat("H10").to_string(), "H10");

        assert!("".parse::<SeatId>().is_err());
        assert!("5F".parse::<SeatId>().is_err());
        assert!("A".parse::<SeatId>().is_err());
        assert!("A0".parse::<SeatId>().is_err());
    }

    #[test]
    fn test_tier_by_row_letter() {
        let map = SeatMap::default();
        for row in 'A'..='E' {
            assert_eq!(map.tier(&SeatId::new(row, 1).unwrap()), SeatTier::Regular);
        }
        for row in 'F'..='J' {
            assert_eq!(map.tier(&SeatId::new(row, 12).unwrap()), SeatTier::Premium);
        }
    }

    #[test]
    fn test_blocked_seats_unavailable() {
        let map = SeatMap::default();
        for id in DEFAULT_BLOCKED_SEATS {
            assert!(!map.is_available(&seat(id)), "{} should be blocked", id);
        }
        assert!(map.is_available(&seat("A1")));
        assert!(map.is_available(&seat("J12")));
        assert!(!map.is_available(&seat("K1")));
        assert!(!map.is_available(&seat("A13")));
    }

    #[test]
    fn test_check_reports_out_of_range() {
        let map = SeatMap::default();
        assert_eq!(map.check(&seat("J12")), Ok(()));
        assert_eq!(map.check(&seat("A5")), Ok(()));
        assert_eq!(map.check(&seat("K1")), Err(SeatError::OutOfRange("K1".into())));
        assert_eq!(map.check(&seat("A13")), Err(SeatError::OutOfRange("A13".into())));
    }

    #[test]
    fn test_layout_shape() {
        let map = SeatMap::default();
        let layout = map.layout();
        assert_eq!(layout.len(), 10);
        assert!(layout.iter().all(|row| row.len() == 12));
        assert_eq!(map.capacity(), 120);

        let unavailable = layout.iter().flatten().filter(|s| !s.is_available).count();
        assert_eq!(unavailable, 12);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&seat("G2")).unwrap();
        assert_eq!(json, "\"G2\"");
        let err = serde_json::from_str::<SeatId>("\"??\"");
        assert!(err.is_err());
    }
}

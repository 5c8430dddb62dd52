use cinetime_catalog::{SeatId, SeatMap};
use serde::Serialize;

/// Most seats one booking may hold.
pub const MAX_SEATS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The seat is sold or outside the grid; nothing changed.
    Ignored,
}

/// Seats picked on the seat map, in the order they were clicked.
#[derive(Debug, Clone, Serialize)]
pub struct SeatSelection {
    seats: Vec<SeatId>,
    #[serde(skip)]
    max_seats: usize,
}

impl SeatSelection {
    pub fn new(max_seats: usize) -> Self {
        Self {
            seats: Vec::new(),
            max_seats,
        }
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, seat: &SeatId) -> bool {
        self.seats.contains(seat)
    }

    pub fn max_seats(&self) -> usize {
        self.max_seats
    }

    /// Select a free seat or release a selected one.
    ///
    /// Unavailable seats are ignored. Adding past the cap fails and leaves
    /// the selection untouched.
    pub fn toggle(&mut self, seat: SeatId, seat_map: &SeatMap) -> Result<ToggleOutcome, SelectionError> {
        if !seat_map.is_available(&seat) {
            return Ok(ToggleOutcome::Ignored);
        }

        if let Some(pos) = self.seats.iter().position(|s| *s == seat) {
            self.seats.remove(pos);
            return Ok(ToggleOutcome::Deselected);
        }

        if self.seats.len() >= self.max_seats {
            return Err(SelectionError::CapacityExceeded { max: self.max_seats });
        }

        self.seats.push(seat);
        Ok(ToggleOutcome::Selected)
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }
}

impl Default for SeatSelection {
    fn default() -> Self {
        Self::new(MAX_SEATS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("You can select maximum {max} seats")]
    CapacityExceeded { max: usize },
}

use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingConfirmedEvent {
    pub booking_id: String,
    pub movie_id: u32,
    pub movie_title: String,
    pub theater: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: Vec<String>,
    pub total_inr: u32,
    pub timestamp: i64,
}

/// A seat-count booking for an event or movie, made without a seat map.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct QuickBookingConfirmedEvent {
    pub booking_id: String,
    pub kind: String,
    pub listing_id: u32,
    pub title: String,
    pub venue: String,
    pub date: NaiveDate,
    pub time: String,
    pub seats: u32,
    pub total_inr: u32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct ContactReceivedEvent {
    pub reference: Uuid,
    pub category: String,
    pub subject: String,
    pub timestamp: i64,
}

/// Everything the engine announces to in-process listeners.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    BookingConfirmed(BookingConfirmedEvent),
    QuickBookingConfirmed(QuickBookingConfirmedEvent),
    ContactReceived(ContactReceivedEvent),
}

impl DomainEvent {
    /// Topic name used when the event is published.
    pub fn topic(&self) -> &'static str {
        match self {
            DomainEvent::BookingConfirmed(_) => "booking.confirmed",
            DomainEvent::QuickBookingConfirmed(_) => "booking.quick_confirmed",
            DomainEvent::ContactReceived(_) => "contact.received",
        }
    }

    /// Partition key: booking id or contact reference.
    pub fn key(&self) -> String {
        match self {
            DomainEvent::BookingConfirmed(e) => e.booking_id.clone(),
            DomainEvent::QuickBookingConfirmed(e) => e.booking_id.clone(),
            DomainEvent::ContactReceived(e) => e.reference.to_string(),
        }
    }
}

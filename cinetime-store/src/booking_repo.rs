use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use cinetime_booking::{BookingHistory, BookingKind, BookingStatus, HistoryEntry};
use cinetime_core::{
    BookingConfirmation, BookingError, BookingRequest, BookingSubmitter, QuickBookingRequest,
};
use cinetime_shared::{BookingConfirmedEvent, DomainEvent, QuickBookingConfirmedEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::events::EventProducer;

/// Stand-in for the payment and booking backend. Accepts every request
/// after a fixed delay unless told to fail, and keeps what it accepted as
/// booking history.
pub struct SimulatedBookingSubmitter {
    history: RwLock<Vec<HistoryEntry>>,
    payment_latency: Duration,
    history_latency: Duration,
    failing: AtomicBool,
    events: EventProducer,
}

impl SimulatedBookingSubmitter {
    pub fn new(
        history: Vec<HistoryEntry>,
        payment_latency: Duration,
        history_latency: Duration,
        events: EventProducer,
    ) -> Self {
        Self {
            history: RwLock::new(history),
            payment_latency,
            history_latency,
            failing: AtomicBool::new(false),
            events,
        }
    }

    /// Every following submission fails while set.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn history(&self) -> BookingHistory {
        if !self.history_latency.is_zero() {
            tokio::time::sleep(self.history_latency).await;
        }
        BookingHistory::new(self.history.read().await.clone())
    }

    async fn charge(&self, booking_id: &str) -> Result<(), BookingError> {
        if !self.payment_latency.is_zero() {
            tokio::time::sleep(self.payment_latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            warn!(booking_id, "Simulated payment outage");
            return Err(BookingError::Unavailable("payment gateway did not respond".into()));
        }
        Ok(())
    }

    async fn record(&self, entry: HistoryEntry) -> Result<(), BookingError> {
        let mut history = self.history.write().await;
        if history.iter().any(|e| e.booking_id == entry.booking_id) {
            return Err(BookingError::Rejected(format!(
                "duplicate booking id {}",
                entry.booking_id
            )));
        }
        history.push(entry);
        Ok(())
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedBookingSubmitter {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        self.charge(&request.booking_id).await?;

        let now = Utc::now();
        self.record(HistoryEntry::from_request(&request, now.date_naive())).await?;

        info!(
            booking_id = %request.booking_id,
            customer = %request.customer.email,
            seats = request.seats.len(),
            "Booking stored"
        );

        self.events.publish(DomainEvent::BookingConfirmed(BookingConfirmedEvent {
            booking_id: request.booking_id.clone(),
            movie_id: request.movie_id,
            movie_title: request.movie_title.clone(),
            theater: request.theater.clone(),
            date: request.date,
            time: request.time.clone(),
            seats: request.seats.iter().map(|s| s.to_string()).collect(),
            total_inr: request.amounts.total_inr,
            timestamp: now.timestamp(),
        }));

        Ok(BookingConfirmation {
            success: true,
            booking_id: request.booking_id,
        })
    }

    async fn submit_quick(&self, request: QuickBookingRequest) -> Result<BookingConfirmation, BookingError> {
        self.charge(&request.booking_id).await?;

        let now = Utc::now();
        self.record(HistoryEntry::from_quick(&request, now.date_naive())).await?;

        info!(
            booking_id = %request.booking_id,
            customer = %request.customer.email,
            kind = ?request.kind,
            seats = request.seats,
            "Quick booking stored"
        );

        self.events.publish(DomainEvent::QuickBookingConfirmed(QuickBookingConfirmedEvent {
            booking_id: request.booking_id.clone(),
            kind: request.kind.as_str().to_string(),
            listing_id: request.listing_id,
            title: request.title.clone(),
            venue: request.venue.clone(),
            date: request.date,
            time: request.time.clone(),
            seats: request.seats,
            total_inr: request.total_inr,
            timestamp: now.timestamp(),
        }));

        Ok(BookingConfirmation {
            success: true,
            booking_id: request.booking_id,
        })
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Bookings shown on a fresh install's "My Bookings" page.
pub fn seed_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            booking_id: "BK123456789".into(),
            title: "Spider-Man: No Way Home".into(),
            kind: BookingKind::Movie,
            date: day(2024, 3, 20),
            time: "07:00 PM".into(),
            seats: 2,
            venue: "PVR Cinemas, Hyderabad".into(),
            total_amount_inr: 400,
            status: BookingStatus::Confirmed,
            booking_date: day(2024, 3, 15),
        },
        HistoryEntry {
            booking_id: "BK987654321".into(),
            title: "A.R. Rahman Live Concert".into(),
            kind: BookingKind::Event,
            date: day(2024, 4, 1),
            time: "06:00 PM".into(),
            seats: 4,
            venue: "Gachibowli Stadium".into(),
            total_amount_inr: 1200,
            status: BookingStatus::Confirmed,
            booking_date: day(2024, 3, 10),
        },
        HistoryEntry {
            booking_id: "BK456789123".into(),
            title: "IPL 2024: SRH vs MI".into(),
            kind: BookingKind::Event,
            date: day(2024, 4, 15),
            time: "07:30 PM".into(),
            seats: 3,
            venue: "Rajiv Gandhi International Stadium".into(),
            total_amount_inr: 900,
            status: BookingStatus::Confirmed,
            booking_date: day(2024, 3, 12),
        },
        HistoryEntry {
            booking_id: "BK789123456".into(),
            title: "Dune: Part Two".into(),
            kind: BookingKind::Movie,
            date: day(2024, 2, 28),
            time: "04:00 PM".into(),
            seats: 1,
            venue: "INOX Movies, Hyderabad".into(),
            total_amount_inr: 200,
            status: BookingStatus::Completed,
            booking_date: day(2024, 2, 25),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinetime_catalog::PriceBreakdown;
    use cinetime_core::CustomerInfo;

    fn request(id: &str) -> BookingRequest {
        BookingRequest {
            booking_id: id.into(),
            movie_id: 2,
            movie_title: "Dune: Part Two".into(),
            theater: "Prasads IMAX".into(),
            date: day(2024, 3, 22),
            time: "04:00 PM".into(),
            seats: vec!["A1".parse().unwrap(), "F1".parse().unwrap()],
            customer: CustomerInfo::new("Asha", "asha@example.com", "9876543210"),
            amounts: PriceBreakdown { subtotal_inr: 500, convenience_fee_inr: 25, taxes_inr: 95, total_inr: 620 },
        }
    }

    fn submitter(events: EventProducer) -> SimulatedBookingSubmitter {
        SimulatedBookingSubmitter::new(seed_history(), Duration::ZERO, Duration::ZERO, events)
    }

    #[tokio::test]
    async fn test_accepted_booking_joins_history() {
        let events = EventProducer::default();
        let mut rx = events.subscribe();
        let store = submitter(events);

        let confirmation = store.submit(request("BK1")).await.unwrap();
        assert!(confirmation.success);
        assert_eq!(confirmation.booking_id, "BK1");

        let history = store.history().await;
        assert_eq!(history.entries().len(), 5);
        let entry = history.find("BK1").unwrap();
        assert_eq!(entry.seats, 2);
        assert_eq!(entry.total_amount_inr, 620);
        assert_eq!(entry.status, BookingStatus::Confirmed);

        match rx.recv().await.unwrap() {
            DomainEvent::BookingConfirmed(e) => assert_eq!(e.seats, vec!["A1", "F1"]),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_outage_rejects_and_stores_nothing() {
        let store = submitter(EventProducer::default());
        store.set_failing(true);

        let err = store.submit(request("BK2")).await.unwrap_err();
        assert!(matches!(err, BookingError::Unavailable(_)));
        assert!(store.history().await.find("BK2").is_none());

        store.set_failing(false);
        assert!(store.submit(request("BK2")).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = submitter(EventProducer::default());
        let err = store.submit(request("BK123456789")).await.unwrap_err();
        assert!(matches!(err, BookingError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_quick_event_booking_recorded_as_event() {
        let events = EventProducer::default();
        let mut rx = events.subscribe();
        let store = submitter(events);

        let request = QuickBookingRequest {
            booking_id: "BK77".into(),
            kind: BookingKind::Event,
            listing_id: 3,
            title: "Stand-up Comedy Night".into(),
            venue: "Phoenix Arena".into(),
            date: day(2024, 3, 18),
            time: "10:00 PM".into(),
            seats: 2,
            customer: CustomerInfo::new("Asha", "asha@example.com", "9876543210"),
            special_requests: None,
            total_inr: 600,
        };
        store.submit_quick(request.clone()).await.unwrap();

        let entry = store.history().await.find("BK77").cloned().unwrap();
        assert_eq!(entry.kind, BookingKind::Event);
        assert_eq!(entry.seats, 2);
        assert_eq!(entry.total_amount_inr, 600);
        assert_eq!(entry.venue, "Phoenix Arena");

        match rx.recv().await.unwrap() {
            DomainEvent::QuickBookingConfirmed(e) => assert_eq!(e.kind, "event"),
            other => panic!("unexpected event {:?}", other),
        }

        let err = store.submit_quick(request).await.unwrap_err();
        assert!(matches!(err, BookingError::Rejected(_)));
    }

    #[test]
    fn test_seed_history_split() {
        let history = BookingHistory::new(seed_history());
        let today = day(2024, 3, 25);
        let upcoming: Vec<&str> = history.upcoming(today).into_iter().map(|e| e.booking_id.as_str()).collect();
        let past: Vec<&str> = history.past(today).into_iter().map(|e| e.booking_id.as_str()).collect();
        assert_eq!(upcoming, vec!["BK987654321", "BK456789123"]);
        assert_eq!(past, vec!["BK123456789", "BK789123456"]);
    }
}

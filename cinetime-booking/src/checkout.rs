use chrono::{NaiveDate, Utc};
use cinetime_catalog::PricingEngine;
use cinetime_core::{
    BookingConfirmation, BookingError, BookingSubmitter, CoreError, CustomerInfo, QuickBookingRequest,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::Booking;
use crate::quick::{QuickBooking, QuickBookingError};
use crate::session::{BookingSession, StepError};

/// Payment step: validates the customer, prices the seats and hands the
/// booking to the submitter.
pub struct Checkout {
    submitter: Arc<dyn BookingSubmitter>,
    pricing: Arc<PricingEngine>,
    in_progress: AtomicBool,
}

/// Clears the in-progress flag however `pay` returns.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Checkout {
    pub fn new(submitter: Arc<dyn BookingSubmitter>, pricing: Arc<PricingEngine>) -> Self {
        Self {
            submitter,
            pricing,
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Pay for the session's seats.
    ///
    /// Submission is attempted once. On failure the session is left as it
    /// was so the customer can try again.
    pub async fn pay(
        &self,
        session: &BookingSession,
        customer: CustomerInfo,
    ) -> Result<Booking, CheckoutError> {
        customer.validate()?;
        let mut booking = session.to_booking(customer, &self.pricing, Utc::now())?;

        let _guard = self.begin()?;

        let outcome = self.submitter.submit(booking.to_request()).await;
        booking.booking_id = confirmed_id(&booking.booking_id, outcome)?;
        info!(
            booking_id = %booking.booking_id,
            movie = %booking.movie.title,
            seats = booking.seats.len(),
            total_inr = booking.amounts.total_inr,
            "Booking confirmed"
        );
        Ok(booking)
    }

    /// Books a seat count from the quick form. Same single-attempt and
    /// in-progress rules as `pay`.
    pub async fn book_quick(
        &self,
        booking: &QuickBooking,
        customer: CustomerInfo,
        today: NaiveDate,
    ) -> Result<QuickBookingRequest, CheckoutError> {
        customer.validate()?;
        booking.validate(today)?;
        let mut request = booking.to_request(customer, Utc::now());

        let _guard = self.begin()?;

        let outcome = self.submitter.submit_quick(request.clone()).await;
        request.booking_id = confirmed_id(&request.booking_id, outcome)?;
        info!(
            booking_id = %request.booking_id,
            kind = ?request.kind,
            title = %request.title,
            seats = request.seats,
            total_inr = request.total_inr,
            "Quick booking confirmed"
        );
        Ok(request)
    }

    fn begin(&self) -> Result<ProcessingGuard<'_>, CheckoutError> {
        if self.in_progress.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::AlreadyProcessing);
        }
        Ok(ProcessingGuard(&self.in_progress))
    }
}

/// The id the backend confirmed, or `PaymentFailed` for any other outcome.
fn confirmed_id(
    booking_id: &str,
    outcome: Result<BookingConfirmation, BookingError>,
) -> Result<String, CheckoutError> {
    match outcome {
        Ok(confirmation) if confirmation.success => Ok(confirmation.booking_id),
        Ok(_) => {
            error!(booking_id, "Booking submission was not accepted");
            Err(CheckoutError::PaymentFailed)
        }
        Err(e) => {
            error!(booking_id, error = %e, "Booking submission failed");
            Err(CheckoutError::PaymentFailed)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    NotReady(#[from] StepError),

    #[error(transparent)]
    QuickBooking(#[from] QuickBookingError),

    #[error("A payment is already being processed")]
    AlreadyProcessing,

    #[error("Payment failed. Something went wrong. Please try again.")]
    PaymentFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use cinetime_catalog::{fixtures, SeatMap};
    use crate::quick::Listing;
    use cinetime_core::{BookingKind, BookingRequest};
    use tokio::sync::{Mutex, Notify};

    #[derive(Default)]
    struct RecordingSubmitter {
        requests: Mutex<Vec<BookingRequest>>,
        quick: Mutex<Vec<QuickBookingRequest>>,
    }

    #[async_trait]
    impl BookingSubmitter for RecordingSubmitter {
        async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
            let booking_id = request.booking_id.clone();
            self.requests.lock().await.push(request);
            Ok(BookingConfirmation { success: true, booking_id })
        }

        async fn submit_quick(&self, request: QuickBookingRequest) -> Result<BookingConfirmation, BookingError> {
            let booking_id = request.booking_id.clone();
            self.quick.lock().await.push(request);
            Ok(BookingConfirmation { success: true, booking_id })
        }
    }

    struct FailingSubmitter;

    #[async_trait]
    impl BookingSubmitter for FailingSubmitter {
        async fn submit(&self, _request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
            Err(BookingError::Unavailable("gateway timeout".to_string()))
        }

        async fn submit_quick(&self, _request: QuickBookingRequest) -> Result<BookingConfirmation, BookingError> {
            Err(BookingError::Unavailable("gateway timeout".to_string()))
        }
    }

    /// Holds every submission until released.
    #[derive(Default)]
    struct GatedSubmitter {
        release: Notify,
    }

    #[async_trait]
    impl BookingSubmitter for GatedSubmitter {
        async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
            self.release.notified().await;
            Ok(BookingConfirmation { success: true, booking_id: request.booking_id })
        }

        async fn submit_quick(&self, request: QuickBookingRequest) -> Result<BookingConfirmation, BookingError> {
            self.release.notified().await;
            Ok(BookingConfirmation { success: true, booking_id: request.booking_id })
        }
    }

    fn summary_session() -> BookingSession {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut session = BookingSession::new(today, Arc::new(SeatMap::default()), 10);
        session.choose_movie(fixtures::movies().remove(0)).unwrap();
        session.choose_showtime(fixtures::showtimes().remove(0)).unwrap();
        for id in ["A1", "A2", "F1"] {
            session.toggle_seat(id.parse().unwrap()).unwrap();
        }
        session.proceed_to_summary().unwrap();
        session
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new("Priya", "priya@example.com", "9876543210")
    }

    #[tokio::test]
    async fn test_successful_payment() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let checkout = Checkout::new(submitter.clone(), Arc::new(PricingEngine::default()));

        let booking = checkout.pay(&summary_session(), customer()).await.unwrap();

        assert_eq!(booking.amounts.total_inr, 867);
        assert!(!checkout.is_processing());

        let requests = submitter.requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].booking_id, booking.booking_id);
        assert_eq!(requests[0].theater, "PVR Cinemas, Hyderabad");
        assert_eq!(requests[0].amounts.convenience_fee_inr, 35);
    }

    #[tokio::test]
    async fn test_missing_customer_fields_block_submission() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let checkout = Checkout::new(submitter.clone(), Arc::new(PricingEngine::default()));

        let err = checkout
            .pay(&summary_session(), CustomerInfo::new("Priya", "", "9876543210"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Validation(_)));
        assert!(submitter.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_surfaces_payment_failed_and_resets_flag() {
        let checkout = Checkout::new(Arc::new(FailingSubmitter), Arc::new(PricingEngine::default()));
        let session = summary_session();

        let err = checkout.pay(&session, customer()).await.unwrap_err();

        assert_eq!(err, CheckoutError::PaymentFailed);
        assert!(!checkout.is_processing());
        assert_eq!(session.seats().len(), 3);
    }

    #[tokio::test]
    async fn test_session_must_be_on_summary() {
        let checkout = Checkout::new(
            Arc::new(RecordingSubmitter::default()),
            Arc::new(PricingEngine::default()),
        );
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let session = BookingSession::new(today, Arc::new(SeatMap::default()), 10);

        let err = checkout.pay(&session, customer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::NotReady(StepError::Incomplete(_))));
    }

    #[tokio::test]
    async fn test_second_payment_rejected_while_processing() {
        let submitter = Arc::new(GatedSubmitter::default());
        let checkout = Arc::new(Checkout::new(submitter.clone(), Arc::new(PricingEngine::default())));
        let session = summary_session();

        let first = {
            let checkout = checkout.clone();
            let session = session.clone();
            tokio::spawn(async move { checkout.pay(&session, customer()).await })
        };

        while !checkout.is_processing() {
            tokio::task::yield_now().await;
        }

        let err = checkout.pay(&session, customer()).await.unwrap_err();
        assert_eq!(err, CheckoutError::AlreadyProcessing);

        submitter.release.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert!(!checkout.is_processing());
    }

    fn quick_event(seats: u32) -> QuickBooking {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        QuickBooking::new(Listing::Event(fixtures::live_events().remove(1)), today, "07:00 PM", seats)
    }

    #[tokio::test]
    async fn test_quick_event_booking() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let checkout = Checkout::new(submitter.clone(), Arc::new(PricingEngine::default()));
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let request = checkout.book_quick(&quick_event(4), customer(), today).await.unwrap();

        assert_eq!(request.kind, BookingKind::Event);
        assert_eq!(request.total_inr, 1200);
        assert_eq!(request.venue, "Gachibowli Stadium");
        assert_eq!(submitter.quick.lock().await.len(), 1);
        assert!(submitter.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_quick_booking_rules_checked_before_submission() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let checkout = Checkout::new(submitter.clone(), Arc::new(PricingEngine::default()));
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let err = checkout.book_quick(&quick_event(11), customer(), today).await.unwrap_err();
        assert!(matches!(err, CheckoutError::QuickBooking(QuickBookingError::SeatCount { .. })));
        assert!(submitter.quick.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_quick_booking_failure_is_payment_failed() {
        let checkout = Checkout::new(Arc::new(FailingSubmitter), Arc::new(PricingEngine::default()));
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let err = checkout.book_quick(&quick_event(2), customer(), today).await.unwrap_err();
        assert_eq!(err, CheckoutError::PaymentFailed);
        assert!(!checkout.is_processing());
    }
}

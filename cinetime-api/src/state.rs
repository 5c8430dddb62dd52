use cinetime_assistant::ScriptedResponder;
use cinetime_catalog::{PricingEngine, SeatError, SeatMap};
use cinetime_core::{BookingSubmitter, CatalogSource};
use cinetime_store::{Config, ContactInbox, EventProducer, InMemoryCatalog, SimulatedBookingSubmitter};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub bookings: Arc<SimulatedBookingSubmitter>,
    pub contact: Arc<ContactInbox>,
    pub pricing: Arc<PricingEngine>,
    pub seat_map: Arc<SeatMap>,
    pub max_seats: usize,
    pub assistant: Arc<ScriptedResponder>,
    pub assistant_delay: Duration,
    pub events: EventProducer,
}

impl AppState {
    /// Wires the in-memory backends from configuration.
    pub fn from_config(config: &Config) -> Result<Self, SeatError> {
        let events = EventProducer::default();
        let simulation = &config.simulation;

        let bookings = SimulatedBookingSubmitter::new(
            cinetime_store::booking_repo::seed_history(),
            simulation.payment_latency(),
            simulation.history_latency(),
            events.clone(),
        );
        bookings.set_failing(simulation.fail_payments);

        Ok(Self {
            catalog: Arc::new(InMemoryCatalog::with_fixtures(simulation.catalog_latency())),
            bookings: Arc::new(bookings),
            contact: Arc::new(ContactInbox::new(simulation.contact_latency(), events.clone())),
            pricing: Arc::new(PricingEngine::new(config.pricing.to_pricing_config())),
            seat_map: Arc::new(config.seats.seat_map()?),
            max_seats: config.seats.max_seats,
            assistant: Arc::new(ScriptedResponder::help_desk()),
            assistant_delay: Duration::from_millis(config.assistant.help_desk_reply_delay_ms),
            events,
        })
    }

    pub fn submitter(&self) -> Arc<dyn BookingSubmitter> {
        self.bookings.clone()
    }
}

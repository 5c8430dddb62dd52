pub mod app_config;
pub mod catalog_repo;
pub mod booking_repo;
pub mod contact_repo;
pub mod events;

pub use app_config::Config;
pub use catalog_repo::InMemoryCatalog;
pub use booking_repo::SimulatedBookingSubmitter;
pub use contact_repo::ContactInbox;
pub use events::{spawn_event_log, EventProducer};

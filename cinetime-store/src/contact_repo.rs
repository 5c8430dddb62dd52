use chrono::Utc;
use cinetime_core::{ContactReceipt, ContactRequest, CoreResult};
use cinetime_shared::{ContactReceivedEvent, DomainEvent};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

use crate::events::EventProducer;

/// Contact-form messages, kept in memory with their receipts.
pub struct ContactInbox {
    messages: RwLock<Vec<(ContactReceipt, ContactRequest)>>,
    latency: Duration,
    events: EventProducer,
}

impl ContactInbox {
    pub fn new(latency: Duration, events: EventProducer) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            latency,
            events,
        }
    }

    /// Invalid messages are rejected before anything is stored.
    pub async fn submit(&self, request: ContactRequest) -> CoreResult<ContactReceipt> {
        request.validate()?;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let receipt = ContactReceipt::acknowledge(request.category, Utc::now());
        info!(
            reference = %receipt.reference,
            category = request.category.label(),
            from = %request.email,
            "Contact message received"
        );

        self.events.publish(DomainEvent::ContactReceived(ContactReceivedEvent {
            reference: receipt.reference,
            category: request.category.label().to_string(),
            subject: request.subject.clone(),
            timestamp: receipt.received_at.timestamp(),
        }));
        self.messages.write().await.push((receipt.clone(), request));
        Ok(receipt)
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn find(&self, reference: uuid::Uuid) -> Option<ContactRequest> {
        self.messages
            .read()
            .await
            .iter()
            .find(|(receipt, _)| receipt.reference == reference)
            .map(|(_, request)| request.clone())
    }
}

use cinetime_shared::DomainEvent;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// In-process event bus. Listeners subscribe; publishing never blocks and
/// never fails when nobody is listening.
#[derive(Clone)]
pub struct EventProducer {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventProducer {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of listeners that received the event.
    pub fn publish(&self, event: DomainEvent) -> usize {
        let topic = event.topic();
        let key = event.key();
        match self.sender.send(event) {
            Ok(receivers) => {
                info!("Published message to {}/{}: {} receivers", topic, key, receivers);
                receivers
            }
            Err(_) => {
                debug!("No listeners for {}/{}", topic, key);
                0
            }
        }
    }
}

/// Logs every event published on `producer` until all senders are gone.
/// The task resolves to the number of events it logged.
pub fn spawn_event_log(producer: &EventProducer) -> JoinHandle<usize> {
    let mut rx = producer.subscribe();
    tokio::spawn(async move {
        let mut logged = 0;
        loop {
            match rx.recv().await {
                Ok(event) => {
                    info!(topic = event.topic(), key = %event.key(), event = ?event, "Domain event");
                    logged += 1;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event log fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        logged
    })
}

impl Default for EventProducer {
    fn default() -> Self {
        Self::new(64)
    }
}

use crate::rules::ScriptedResponder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    Closed,
    Open,
    Minimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self { sender: Sender::User, content: content.to_string(), sent_at: Utc::now() }
    }

    pub fn assistant(content: &str) -> Self {
        Self { sender: Sender::Assistant, content: content.to_string(), sent_at: Utc::now() }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
    #[error("chat widget is {0:?}, messages can only be sent while open")]
    NotOpen(WidgetState),
    #[error("chat widget is closed")]
    Closed,
}

/// Chat panel with a delayed, cancellable assistant reply per message.
///
/// Replies are scheduled on the runtime and land in the shared history
/// after `reply_delay`. Closing the widget aborts every pending reply and
/// bumps the epoch so a reply that already woke up is discarded instead of
/// being appended to a widget that is no longer listening.
pub struct ChatWidget {
    state: WidgetState,
    responder: Arc<ScriptedResponder>,
    reply_delay: Duration,
    history: Arc<Mutex<Vec<ChatMessage>>>,
    epoch: Arc<AtomicU64>,
    pending: Vec<JoinHandle<()>>,
}

impl ChatWidget {
    pub fn new(responder: Arc<ScriptedResponder>, reply_delay: Duration) -> Self {
        let greeting = ChatMessage::assistant(responder.greeting());
        Self {
            state: WidgetState::Closed,
            responder,
            reply_delay,
            history: Arc::new(Mutex::new(vec![greeting])),
            epoch: Arc::new(AtomicU64::new(0)),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn suggestions(&self) -> &[String] {
        self.responder.suggestions()
    }

    pub fn open(&mut self) -> WidgetState {
        if self.state == WidgetState::Closed {
            self.state = WidgetState::Open;
        }
        self.state
    }

    pub fn toggle_minimize(&mut self) -> Result<WidgetState, WidgetError> {
        self.state = match self.state {
            WidgetState::Open => WidgetState::Minimized,
            WidgetState::Minimized => WidgetState::Open,
            WidgetState::Closed => return Err(WidgetError::Closed),
        };
        Ok(self.state)
    }

    pub fn close(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let cancelled = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        self.state = WidgetState::Closed;
        debug!(cancelled, "chat widget closed");
    }

    /// Appends the user's message and schedules the reply.
    /// Returns `Ok(false)` for blank input, which is ignored.
    pub async fn send(&mut self, text: &str) -> Result<bool, WidgetError> {
        if self.state != WidgetState::Open {
            return Err(WidgetError::NotOpen(self.state));
        }
        if text.trim().is_empty() {
            return Ok(false);
        }

        self.history.lock().await.push(ChatMessage::user(text));

        let reply = self.responder.respond(text);
        let history = Arc::clone(&self.history);
        let epoch = Arc::clone(&self.epoch);
        let ticket = epoch.load(Ordering::SeqCst);
        let delay = self.reply_delay;

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut history = history.lock().await;
            if epoch.load(Ordering::SeqCst) == ticket {
                history.push(ChatMessage::assistant(&reply));
            }
        }));
        Ok(true)
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }

    pub fn pending_replies(&mut self) -> usize {
        self.pending.retain(|h| !h.is_finished());
        self.pending.len()
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

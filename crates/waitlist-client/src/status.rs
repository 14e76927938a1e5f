//! Transient status messages.
//!
//! The outcome of a submission is displayed, then cleared automatically
//! after a fixed delay regardless of further activity. Every shown
//! message schedules its own expiry.

use std::time::Duration;
use tokio::sync::watch;

/// How long a shown message stays visible.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Visual category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The submission was accepted
    Success,
    /// The submission failed or was rejected
    Error,
}

/// One displayed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// The text to display
    pub text: String,
    /// Whether to style it as success or error
    pub kind: StatusKind,
}

/// Holder of the currently displayed message.
///
/// Cheap to clone (watch-channel internals); observers subscribe to see
/// messages appear and expire.
#[derive(Debug, Clone)]
pub struct TransientStatus {
    tx: watch::Sender<Option<StatusMessage>>,
    ttl: Duration,
}

impl TransientStatus {
    /// Creates a status holder with the default 5-second lifetime.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates a status holder with a custom message lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx, ttl }
    }

    /// Shows a message and schedules its expiry.
    pub fn show<S: Into<String>>(&self, text: S, kind: StatusKind) {
        let message = StatusMessage {
            text: text.into(),
            kind,
        };
        self.tx.send_replace(Some(message));

        let tx = self.tx.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            tx.send_replace(None);
        });
    }

    /// The currently displayed message, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.tx.borrow().clone()
    }

    /// Subscribe to message changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<StatusMessage>> {
        self.tx.subscribe()
    }
}

impl Default for TransientStatus {
    fn default() -> Self {
        Self::new()
    }
}

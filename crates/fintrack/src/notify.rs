//! Toast notification channel.
//!
//! Fans notifications out to any number of UI subscribers over a
//! `tokio::sync::broadcast` channel and mirrors each one to `tracing`.

use tokio::sync::broadcast;

use fintrack_core::notify::{Notification, NotificationKind, Notifier};

/// Default number of notifications buffered for slow subscribers.
pub const DEFAULT_CAPACITY: usize = 100;

/// Broadcast-backed [`Notifier`].
#[derive(Debug, Clone)]
pub struct ToastChannel {
    tx: broadcast::Sender<Notification>,
}

impl Default for ToastChannel {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ToastChannel {
    /// Creates a channel buffering up to `capacity` notifications per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribes to notifications sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Notifier for ToastChannel {
    fn notify(&self, notification: Notification) {
        let detail = notification.detail.as_deref().unwrap_or_default();
        match notification.kind {
            NotificationKind::Error => {
                tracing::error!(text = %notification.message, detail, "Notification")
            }
            NotificationKind::Warning => {
                tracing::warn!(text = %notification.message, detail, "Notification")
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(
                    kind = notification.kind.as_str(),
                    text = %notification.message,
                    detail,
                    "Notification"
                )
            }
        }

        // No subscribers is fine
        let _ = self.tx.send(notification);
    }
}

//! User-facing notifications.
//!
//! The core only describes what should be shown; delivery (toasts, logs,
//! test recorders) is an implementation of [`Notifier`].

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// A message for the user, with an optional secondary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Delivers notifications to the user.
///
/// Delivery is fire-and-forget: a notifier with nobody listening drops the
/// message.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_builders() {
        let n = Notification::success("Transaction added successfully!").with_detail("+Rp 25.000");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Transaction added successfully!");
        assert_eq!(n.detail.as_deref(), Some("+Rp 25.000"));

        assert_eq!(Notification::error("x").kind, NotificationKind::Error);
        assert_eq!(Notification::warning("x").kind, NotificationKind::Warning);
        assert_eq!(Notification::info("x").kind, NotificationKind::Info);
    }

    #[test]
    fn test_notification_serializes_without_empty_detail() {
        let json = serde_json::to_value(Notification::info("Signed out")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "info", "message": "Signed out" })
        );
    }
}

//! Confirmation dialog descriptions.
//!
//! An [`AlertConfig`] describes what a blocking dialog shows. Presenting it
//! and collecting the answer is the job of the shell's confirmation gate.

use serde::{Deserialize, Serialize};

/// Visual treatment of a dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
    Warning,
}

/// What a confirmation dialog displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfig {
    pub title: String,
    pub description: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub variant: AlertVariant,
    pub show_cancel: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
            variant: AlertVariant::Default,
            show_cancel: true,
        }
    }
}

impl AlertConfig {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// A plain yes/no question.
    pub fn confirm(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).with_confirm_text("Confirm")
    }

    /// Confirmation for a delete action.
    pub fn confirm_delete(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description)
            .with_confirm_text("Delete")
            .with_variant(AlertVariant::Destructive)
    }

    /// Confirmation before signing out.
    pub fn confirm_logout(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description)
            .with_confirm_text("Logout")
            .with_variant(AlertVariant::Destructive)
    }

    /// A warning the user can only acknowledge.
    pub fn warn(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description)
            .with_variant(AlertVariant::Warning)
            .without_cancel()
    }

    /// An informational message the user can only acknowledge.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).without_cancel()
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn with_variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn without_cancel(mut self) -> Self {
        self.show_cancel = false;
        self
    }
}

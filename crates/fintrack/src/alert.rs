//! Blocking confirmation dialogs.
//!
//! A caller awaits [`ConfirmationGate::alert`] while the UI reads the pending
//! [`AlertConfig`] from [`ConfirmationGate::state`] and answers through
//! `handle_confirm`, `handle_cancel` or `close`.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

use fintrack_core::alert::AlertConfig;

/// What the dialog is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    AwaitingResponse(AlertConfig),
}

#[derive(Debug, Default)]
struct Inner {
    state: GateState,
    /// Everyone waiting on the open dialog.
    responders: Vec<oneshot::Sender<bool>>,
}

/// Single-slot confirmation dialog shared across the application.
///
/// Opening a second dialog while one is pending replaces the displayed
/// config; all waiters receive the same answer once it is resolved.
/// Dropping every clone of the gate answers pending waiters with `false`.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    inner: Arc<Mutex<Inner>>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens the dialog and returns a future resolving to the user's answer.
    ///
    /// The dialog is registered before this returns, so the state is
    /// observable even if the future is polled later.
    pub fn alert(&self, config: AlertConfig) -> impl Future<Output = bool> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        {
            let mut inner = self.lock();
            if matches!(inner.state, GateState::AwaitingResponse(_)) {
                tracing::debug!(
                    title = %config.title,
                    waiting = inner.responders.len(),
                    "Replacing open dialog"
                );
            }
            inner.state = GateState::AwaitingResponse(config);
            inner.responders.push(tx);
        }

        async move { rx.await.unwrap_or(false) }
    }

    pub fn confirm(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.alert(AlertConfig::confirm(title, description))
    }

    pub fn confirm_delete(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.alert(AlertConfig::confirm_delete(title, description))
    }

    pub fn confirm_logout(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.alert(AlertConfig::confirm_logout(title, description))
    }

    pub fn warn(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.alert(AlertConfig::warn(title, description))
    }

    pub fn info(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        self.alert(AlertConfig::info(title, description))
    }

    /// Answers the open dialog with `true`.
    pub fn handle_confirm(&self) -> bool {
        self.resolve(true)
    }

    /// Answers the open dialog with `false`.
    pub fn handle_cancel(&self) -> bool {
        self.resolve(false)
    }

    /// Dismisses the dialog without an explicit choice.
    pub fn close(&self) -> bool {
        self.resolve(false)
    }

    pub fn state(&self) -> GateState {
        self.lock().state.clone()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lock().state, GateState::AwaitingResponse(_))
    }

    /// Returns the gate to idle and answers every waiter.
    ///
    /// Returns false when no dialog was open.
    fn resolve(&self, answer: bool) -> bool {
        let responders = {
            let mut inner = self.lock();
            if inner.state == GateState::Idle {
                return false;
            }
            inner.state = GateState::Idle;
            std::mem::take(&mut inner.responders)
        };

        tracing::debug!(answer, waiting = responders.len(), "Dialog resolved");
        for responder in responders {
            // The waiter may have given up
            let _ = responder.send(answer);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::alert::AlertVariant;

    #[tokio::test]
    async fn test_confirm_resolves_true() {
        let gate = ConfirmationGate::new();
        let answer = gate.confirm_delete("Delete transaction", "This cannot be undone.");

        match gate.state() {
            GateState::AwaitingResponse(config) => {
                assert_eq!(config.confirm_text, "Delete");
                assert_eq!(config.variant, AlertVariant::Destructive);
            }
            GateState::Idle => panic!("dialog should be open"),
        }

        assert!(gate.handle_confirm());
        assert!(answer.await);
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[tokio::test]
    async fn test_cancel_and_close_resolve_false() {
        let gate = ConfirmationGate::new();

        let answer = gate.confirm("Save", "Save changes?");
        gate.handle_cancel();
        assert!(!answer.await);

        let answer = gate.info("Done", "Saved");
        gate.close();
        assert!(!answer.await);
        assert!(!gate.is_open());
    }

    #[tokio::test]
    async fn test_resolve_when_idle_is_noop() {
        let gate = ConfirmationGate::new();
        assert!(!gate.handle_confirm());
        assert!(!gate.close());
    }

    #[tokio::test]
    async fn test_second_alert_replaces_config_and_shares_answer() {
        let gate = ConfirmationGate::new();
        let first = gate.confirm("First", "one");
        let second = gate.warn("Second", "two");

        match gate.state() {
            GateState::AwaitingResponse(config) => assert_eq!(config.title, "Second"),
            GateState::Idle => panic!("dialog should be open"),
        }

        gate.handle_confirm();
        assert!(first.await);
        assert!(second.await);
    }

    #[tokio::test]
    async fn test_answer_from_another_task() {
        let gate = ConfirmationGate::new();
        let answer = gate.confirm_logout("Logout", "Are you sure?");

        let ui = gate.clone();
        tokio::spawn(async move {
            ui.handle_confirm();
        });

        assert!(answer.await);
    }

    #[tokio::test]
    async fn test_dropped_gate_resolves_false() {
        let gate = ConfirmationGate::new();
        let answer = gate.confirm("Save", "Save changes?");
        drop(gate);

        assert!(!answer.await);
    }
}

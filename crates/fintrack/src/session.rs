//! Observable sign-in state.

use tokio::sync::watch;

use fintrack_core::session::{OwnerProvider, User};

/// Holds the signed-in user and notifies watchers when it changes.
///
/// Clones share the same session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: watch::Sender<Option<User>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn sign_in(&self, user: User) {
        tracing::info!(user_id = %user.id, "Signed in");
        self.tx.send_replace(Some(user));
    }

    /// Signs out, returning the user that was signed in.
    pub fn sign_out(&self) -> Option<User> {
        let previous = self.tx.send_replace(None);
        if let Some(user) = &previous {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        previous
    }

    pub fn current_user(&self) -> Option<User> {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Watches sign-in changes; the receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.tx.subscribe()
    }
}

impl OwnerProvider for SessionHandle {
    fn current_owner(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|user| user.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let session = SessionHandle::new();
        assert!(session.current_owner().is_none());
        assert!(!session.is_authenticated());

        session.sign_in(User::new("u1", "budi@example.com"));
        assert_eq!(session.current_owner().as_deref(), Some("u1"));
        assert!(session.is_authenticated());

        let previous = session.sign_out();
        assert_eq!(previous.map(|u| u.id), Some("u1".to_string()));
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let session = SessionHandle::new();
        let mut rx = session.subscribe();

        session.sign_in(User::new("u1", "budi@example.com"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_clones_share_session() {
        let session = SessionHandle::new();
        let other = session.clone();
        session.sign_in(User::new("u1", "budi@example.com"));
        assert_eq!(other.current_owner().as_deref(), Some("u1"));
    }
}

//! Loads the signed-in user's data whenever the session changes.

use std::sync::Arc;

use tokio::task::JoinHandle;

use fintrack_core::notify::Notifier;

use crate::accessor::{CategoryAccessor, TransactionAccessor};
use crate::seed::CategorySeeder;
use crate::session::SessionHandle;

/// Reacts to sign-in and sign-out.
///
/// On sign-in both accessors are listed (cache first). With onboarding
/// enabled, new owners get the default categories before the lists load.
/// On sign-out the local items are dropped.
pub struct OwnerWatcher {
    transactions: TransactionAccessor,
    categories: CategoryAccessor,
    onboarding: Option<(CategorySeeder, Arc<dyn Notifier>)>,
}

impl OwnerWatcher {
    pub fn new(transactions: TransactionAccessor, categories: CategoryAccessor) -> Self {
        Self {
            transactions,
            categories,
            onboarding: None,
        }
    }

    /// Seeds default categories for owners that have none on sign-in.
    pub fn with_onboarding(mut self, seeder: CategorySeeder, notifier: Arc<dyn Notifier>) -> Self {
        self.onboarding = Some((seeder, notifier));
        self
    }

    /// Spawns the watch loop. It handles the current session immediately and
    /// ends once every `SessionHandle` clone is dropped.
    pub fn spawn(self, session: &SessionHandle) -> JoinHandle<()> {
        let mut rx = session.subscribe();

        tokio::spawn(async move {
            // Outer `None` until the first session value has been handled.
            let mut handled: Option<Option<String>> = None;
            loop {
                let owner = rx.borrow_and_update().as_ref().map(|user| user.id.clone());
                if handled.as_ref() != Some(&owner) {
                    match &owner {
                        Some(owner_id) => self.signed_in(owner_id).await,
                        None => self.signed_out(),
                    }
                    handled = Some(owner);
                }

                if rx.changed().await.is_err() {
                    tracing::debug!("Session closed, owner watcher stopping");
                    break;
                }
            }
        })
    }

    async fn signed_in(&self, owner_id: &str) {
        tracing::debug!(owner_id, "Loading data for signed-in user");

        let mut seeded = false;
        if let Some((seeder, notifier)) = &self.onboarding {
            seeded = seeder.onboard(owner_id, notifier.as_ref()).await;
        }

        // Failures are already recorded on the accessors and notified.
        let (transactions, categories) = tokio::join!(
            self.transactions.list(false),
            self.categories.list(seeded)
        );
        if let Err(err) = transactions {
            tracing::warn!(owner_id, error = %err, "Initial transaction load failed");
        }
        if let Err(err) = categories {
            tracing::warn!(owner_id, error = %err, "Initial category load failed");
        }
    }

    fn signed_out(&self) {
        tracing::debug!("Clearing local data after sign-out");
        self.transactions.reset();
        self.categories.reset();
    }
}

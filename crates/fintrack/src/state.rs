//! Application state.
//!
//! Builds the cache, session, notification channel, confirmation gate and
//! both accessors once, and wires them together. Everything is injected;
//! there are no globals.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use uuid::Uuid;

use fintrack_core::access::Result;
use fintrack_core::cache::{Cache, CacheReport};
use fintrack_core::finance::{Category, CategoryTotal, SummaryStats, Transaction, TransactionType};
use fintrack_core::session::User;
use fintrack_core::storage::Repository;

use crate::accessor::{CategoryAccessor, TransactionAccessor};
use crate::alert::ConfirmationGate;
use crate::cache::MemoryCache;
use crate::config::Config;
use crate::notify::ToastChannel;
use crate::seed::CategorySeeder;
use crate::session::SessionHandle;
use crate::storage::InMemoryRepository;
use crate::watcher::OwnerWatcher;

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: SummaryStats,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub recent: Vec<Transaction>,
}

/// Shared application state.
///
/// Cheap to clone; clones share every component.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<MemoryCache>,
    pub session: SessionHandle,
    pub toasts: ToastChannel,
    pub alerts: ConfirmationGate,
    pub transactions: TransactionAccessor,
    pub categories: CategoryAccessor,
    pub seeder: CategorySeeder,
}

impl AppState {
    /// Creates the state on top of the given remote stores.
    pub fn new(
        config: Config,
        transaction_repo: Arc<dyn Repository<Transaction>>,
        category_repo: Arc<dyn Repository<Category>>,
    ) -> Self {
        let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
        let session = SessionHandle::new();
        let toasts = ToastChannel::new(config.notification_capacity);

        let transactions = TransactionAccessor::new(
            transaction_repo,
            cache.clone(),
            Arc::new(session.clone()),
            Arc::new(toasts.clone()),
        );
        let categories = CategoryAccessor::new(
            category_repo.clone(),
            cache.clone(),
            Arc::new(session.clone()),
            Arc::new(toasts.clone()),
        );

        Self {
            config,
            cache,
            session,
            toasts,
            alerts: ConfirmationGate::new(),
            transactions,
            categories,
            seeder: CategorySeeder::new(category_repo),
        }
    }

    /// Creates the state backed by in-memory stores.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryRepository::<Transaction>::new()),
            Arc::new(InMemoryRepository::<Category>::new()),
        )
    }

    /// Starts loading data (and seeding new owners) on every sign-in.
    pub fn watch_owner(&self) -> JoinHandle<()> {
        OwnerWatcher::new(self.transactions.clone(), self.categories.clone())
            .with_onboarding(self.seeder.clone(), Arc::new(self.toasts.clone()))
            .spawn(&self.session)
    }

    pub fn sign_in(&self, user: User) {
        self.session.sign_in(user);
    }

    /// Signs out and drops every cached payload and local list.
    pub async fn sign_out(&self) -> Option<User> {
        let user = self.session.sign_out();
        self.cache.invalidate(None).await;
        self.transactions.reset();
        self.categories.reset();
        user
    }

    /// Asks for confirmation, then signs out.
    ///
    /// Returns true when the user confirmed.
    pub async fn confirm_sign_out(&self) -> bool {
        let confirmed = self
            .alerts
            .confirm_logout("Logout", "Are you sure you want to logout?")
            .await;
        if confirmed {
            self.sign_out().await;
        }
        confirmed
    }

    /// Asks for confirmation, then deletes the transaction.
    ///
    /// Returns `Ok(false)` when the user cancelled.
    pub async fn delete_transaction_confirmed(&self, id: Uuid) -> Result<bool> {
        let confirmed = self
            .alerts
            .confirm_delete(
                "Delete transaction",
                "Are you sure you want to delete this transaction? This action cannot be undone.",
            )
            .await;
        if !confirmed {
            return Ok(false);
        }
        self.transactions.delete(id).await
    }

    /// Asks for confirmation, then deletes the category.
    pub async fn delete_category_confirmed(&self, id: Uuid) -> Result<bool> {
        let confirmed = self
            .alerts
            .confirm_delete(
                "Delete category",
                "Are you sure you want to delete this category? This action cannot be undone.",
            )
            .await;
        if !confirmed {
            return Ok(false);
        }
        self.categories.delete(id).await
    }

    /// Dashboard figures from the locally held records.
    pub fn dashboard(&self) -> Dashboard {
        let categories = self.categories.items();
        Dashboard {
            summary: self.transactions.summary(),
            expenses_by_category: self
                .transactions
                .by_category(&categories, TransactionType::Expense),
            income_by_category: self
                .transactions
                .by_category(&categories, TransactionType::Income),
            recent: self
                .transactions
                .recent(self.config.recent_transactions_limit),
        }
    }

    pub async fn cache_report(&self) -> CacheReport {
        self.cache.describe().await
    }
}

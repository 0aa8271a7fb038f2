//! Default category seeding for new users.

use std::sync::Arc;

use chrono::Utc;

use fintrack_core::finance::{
    default_category_drafts, missing_default_categories, Category, CategoryDraft, NewCategory,
};
use fintrack_core::notify::{Notification, Notifier};
use fintrack_core::storage::{ListFilter, Record, Repository, RepositoryError, Result};

/// Gives new users the default category set.
#[derive(Clone)]
pub struct CategorySeeder {
    repository: Arc<dyn Repository<Category>>,
}

impl CategorySeeder {
    pub fn new(repository: Arc<dyn Repository<Category>>) -> Self {
        Self { repository }
    }

    /// Whether the owner already has at least one category.
    ///
    /// A failed lookup counts as "no categories".
    pub async fn has_categories(&self, owner_id: &str) -> bool {
        match self
            .repository
            .list_by_owner(owner_id, &ListFilter::all().with_limit(1))
            .await
        {
            Ok(categories) => !categories.is_empty(),
            Err(err) => {
                tracing::warn!(owner_id, error = %err, "Could not check existing categories");
                false
            }
        }
    }

    /// Seeds every default category for an owner that has none.
    ///
    /// Returns `true` when at least one category was created.
    pub async fn initialize(&self, owner_id: &str) -> Result<bool> {
        ensure_owner(owner_id)?;

        if self.has_categories(owner_id).await {
            tracing::debug!(owner_id, "Owner already initialized");
            return Ok(false);
        }

        let created = self.insert(owner_id, default_category_drafts()).await;
        tracing::info!(owner_id, created = created.len(), "Seeded default categories");
        Ok(!created.is_empty())
    }

    /// Runs [`initialize`](Self::initialize) for a freshly signed-in owner and
    /// tells the user how it went.
    ///
    /// Returns `true` when default categories were created.
    pub async fn onboard(&self, owner_id: &str, notifier: &dyn Notifier) -> bool {
        match self.initialize(owner_id).await {
            Ok(true) => {
                notifier.notify(
                    Notification::success("Welcome! Your account has been set up successfully")
                        .with_detail("Default categories have been created for you"),
                );
                true
            }
            Ok(false) => false,
            Err(err) => {
                tracing::error!(owner_id, error = %err, "Error initializing new user");
                notifier.notify(
                    Notification::warning("Account setup incomplete").with_detail(
                        "Some features may not work properly. Please refresh the page.",
                    ),
                );
                false
            }
        }
    }

    /// Adds only the defaults the owner is missing (by case-insensitive name)
    /// and returns the owner's full category list.
    pub async fn create_missing(&self, owner_id: &str) -> Result<Vec<Category>> {
        ensure_owner(owner_id)?;

        let existing = self
            .repository
            .list_by_owner(owner_id, &ListFilter::all())
            .await?;
        let missing = missing_default_categories(&existing);
        if missing.is_empty() {
            return Ok(existing);
        }

        let created = self.insert(owner_id, missing).await;
        tracing::info!(owner_id, created = created.len(), "Added missing default categories");

        self.repository
            .list_by_owner(owner_id, &ListFilter::all())
            .await
    }

    /// Batch insert, falling back to one insert per category.
    ///
    /// Individual failures are logged and skipped.
    async fn insert(&self, owner_id: &str, drafts: Vec<CategoryDraft>) -> Vec<Category> {
        let now = Utc::now();
        let news: Vec<NewCategory> = drafts
            .into_iter()
            .map(|draft| Category::stamp(draft, owner_id, now))
            .collect();

        match self.repository.create_batch(&news).await {
            Ok(created) => created,
            Err(err) => {
                tracing::warn!(
                    owner_id,
                    error = %err,
                    "Batch insert failed, inserting one by one"
                );

                let mut created = Vec::with_capacity(news.len());
                let mut failed = Vec::new();
                for new in &news {
                    match self.repository.create(new).await {
                        Ok(category) => created.push(category),
                        Err(err) => {
                            tracing::error!(
                                owner_id,
                                name = %new.name,
                                error = %err,
                                "Error creating category"
                            );
                            failed.push(new.name.as_str());
                        }
                    }
                }

                if !failed.is_empty() {
                    tracing::warn!(
                        owner_id,
                        failed = %failed.join(", "),
                        "Some categories were not created"
                    );
                }
                created
            }
        }
    }
}

fn ensure_owner(owner_id: &str) -> Result<()> {
    if owner_id.trim().is_empty() {
        return Err(RepositoryError::InvalidData("owner id is required".to_string()));
    }
    Ok(())
}

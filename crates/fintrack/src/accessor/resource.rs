//! Cached, observable access to one kind of remote record.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use fintrack_core::access::{AccessError, Result};
use fintrack_core::cache::{deserialize_records, serialize_records, Cache};
use fintrack_core::notify::{Notification, Notifier};
use fintrack_core::session::OwnerProvider;
use fintrack_core::storage::{ListFilter, Placement, Record, Repository};

/// Observable state of an accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorState<R> {
    /// Local copy of the owner's records.
    pub items: Vec<R>,
    /// True while a remote call is in flight.
    pub is_loading: bool,
    /// Error from the most recent failed operation.
    pub last_error: Option<AccessError>,
}

impl<R> Default for AccessorState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }
}

/// Read-through, write-through access to a record kind.
///
/// - **Reads**: serve the cached payload while it is fresh for the current
///   owner, otherwise fetch from the repository and populate the cache.
/// - **Writes**: persist remotely first, then mirror the change into the
///   local list and write the whole list back to the cache.
///
/// State lives in a `watch` channel so views can [`subscribe`](Self::subscribe)
/// to every change. Clones share state.
pub struct ResourceAccessor<R: Record> {
    repository: Arc<dyn Repository<R>>,
    cache: Arc<dyn Cache>,
    owner: Arc<dyn OwnerProvider>,
    notifier: Arc<dyn Notifier>,
    state: Arc<watch::Sender<AccessorState<R>>>,
}

impl<R: Record> Clone for ResourceAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            cache: Arc::clone(&self.cache),
            owner: Arc::clone(&self.owner),
            notifier: Arc::clone(&self.notifier),
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Record> ResourceAccessor<R> {
    pub fn new(
        repository: Arc<dyn Repository<R>>,
        cache: Arc<dyn Cache>,
        owner: Arc<dyn OwnerProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (state, _) = watch::channel(AccessorState::default());
        Self {
            repository,
            cache,
            owner,
            notifier,
            state: Arc::new(state),
        }
    }

    /// Watches state changes; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<AccessorState<R>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AccessorState<R> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.state.borrow().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn last_error(&self) -> Option<AccessError> {
        self.state.borrow().last_error.clone()
    }

    /// Lists the current owner's records.
    ///
    /// Serves a fresh cached payload unless `force_refresh` is set. Returns an
    /// empty list when nobody is signed in. On failure the previous items are
    /// kept.
    pub async fn list(&self, force_refresh: bool) -> Result<Vec<R>> {
        let Some(owner_id) = self.owner.current_owner() else {
            tracing::warn!(kind = %R::KIND, "No user available for fetching");
            return Ok(Vec::new());
        };

        if !force_refresh {
            if let Some(items) = self.read_cache(&owner_id).await {
                tracing::debug!(kind = %R::KIND, count = items.len(), "Serving from cache");
                self.state.send_modify(|state| state.items = items.clone());
                return Ok(items);
            }
        }

        self.begin();
        match self
            .repository
            .list_by_owner(&owner_id, &ListFilter::all())
            .await
        {
            Ok(items) => {
                tracing::debug!(kind = %R::KIND, count = items.len(), force_refresh, "Fetched");
                self.settle(|local| *local = items.clone());
                self.write_cache(&owner_id, &items).await;
                Ok(items)
            }
            Err(err) => Err(self.fail(err.into(), format!("Failed to fetch {}", R::KIND))),
        }
    }

    /// Bypasses the cache and re-fetches.
    pub async fn refresh(&self) -> Result<Vec<R>> {
        self.list(true).await
    }

    /// Creates a record for the current owner.
    pub async fn create(&self, draft: R::Draft) -> Result<R> {
        let failure = format!("Failed to {} {}", R::CREATE_VERB, R::NOUN);

        let Some(owner_id) = self.owner.current_owner() else {
            return Err(self.fail(AccessError::Unauthenticated, failure));
        };
        if let Err(err) = R::validate(&draft) {
            return Err(self.fail(err.into(), failure));
        }

        self.begin();
        let new = R::stamp(draft, &owner_id, Utc::now());
        let created = match self.repository.create(&new).await {
            Ok(created) => created,
            Err(err) => return Err(self.fail(err.into(), failure)),
        };

        let items = self.settle(|items| match R::PLACEMENT {
            Placement::Prepend => items.insert(0, created.clone()),
            Placement::Append => items.push(created.clone()),
        });
        // The cached list is only as complete as the local items
        self.write_cache(&owner_id, &items).await;

        tracing::debug!(kind = %R::KIND, id = %created.id(), "Created");
        let (message, detail) = created.created_notice();
        let notification = Notification::success(message);
        self.notifier.notify(match detail {
            Some(detail) => notification.with_detail(detail),
            None => notification,
        });

        Ok(created)
    }

    /// Applies a partial update and mirrors the stored record locally.
    pub async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R> {
        if let Err(err) = R::validate_patch(&patch) {
            return Err(self.fail(err.into(), format!("Failed to update {}", R::NOUN)));
        }

        self.begin();
        let patch = R::touch(patch, Utc::now());
        let updated = match self.repository.update(id, &patch).await {
            Ok(updated) => updated,
            Err(err) => return Err(self.fail(err.into(), format!("Failed to update {}", R::NOUN))),
        };

        let items = self.settle(|items| {
            if let Some(slot) = items.iter_mut().find(|item| item.id() == id) {
                *slot = updated.clone();
            }
        });
        if let Some(owner_id) = self.owner.current_owner() {
            self.write_cache(&owner_id, &items).await;
        }

        tracing::debug!(kind = %R::KIND, %id, "Updated");
        if R::NOTIFY_ON_UPDATE {
            self.notifier.notify(Notification::success(format!(
                "{} updated successfully!",
                R::ENTITY
            )));
        }

        Ok(updated)
    }

    /// Deletes a record, returning the store's success flag.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        self.begin();
        let deleted = match self.repository.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => return Err(self.fail(err.into(), format!("Failed to delete {}", R::NOUN))),
        };

        let items = self.settle(|items| items.retain(|item| item.id() != id));
        if let Some(owner_id) = self.owner.current_owner() {
            self.write_cache(&owner_id, &items).await;
        }

        tracing::debug!(kind = %R::KIND, %id, deleted, "Deleted");
        self.notifier.notify(Notification::success(format!(
            "{} deleted successfully!",
            R::ENTITY
        )));

        Ok(deleted)
    }

    /// Finds a record locally, falling back to an uncached remote fetch.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<R>> {
        let local = self
            .state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned();
        if local.is_some() {
            return Ok(local);
        }

        self.begin();
        match self.repository.get_by_id(id).await {
            Ok(found) => {
                self.state.send_modify(|state| state.is_loading = false);
                Ok(found)
            }
            Err(err) => Err(self.fail(err.into(), format!("Failed to fetch {}", R::NOUN))),
        }
    }

    /// Uncached, filtered listing for the current owner.
    ///
    /// Leaves the local items untouched.
    pub async fn query(&self, filter: ListFilter) -> Result<Vec<R>> {
        let Some(owner_id) = self.owner.current_owner() else {
            return Ok(Vec::new());
        };

        self.begin();
        match self.repository.list_by_owner(&owner_id, &filter).await {
            Ok(items) => {
                self.state.send_modify(|state| state.is_loading = false);
                Ok(items)
            }
            Err(err) => Err(self.fail(err.into(), format!("Failed to fetch {}", R::KIND))),
        }
    }

    /// Drops this kind's cached payload.
    pub async fn clear_cache(&self) {
        self.cache.invalidate(Some(R::KIND)).await;
    }

    /// Forgets the local items, e.g. after sign-out.
    pub fn reset(&self) {
        self.state.send_replace(AccessorState::default());
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.last_error = None;
        });
    }

    /// Mutates the items, ends loading and returns the new items.
    fn settle(&self, mutate: impl FnOnce(&mut Vec<R>)) -> Vec<R> {
        let mut items = Vec::new();
        self.state.send_modify(|state| {
            mutate(&mut state.items);
            state.is_loading = false;
            items = state.items.clone();
        });
        items
    }

    /// Records a failure, tells the user, and hands the error back.
    fn fail(&self, err: AccessError, message: String) -> AccessError {
        tracing::warn!(kind = %R::KIND, error = %err, "{}", message);
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.last_error = Some(err.clone());
        });
        self.notifier
            .notify(Notification::error(message).with_detail(err.to_string()));
        err
    }

    async fn read_cache(&self, owner_id: &str) -> Option<Vec<R>> {
        let bytes = self.cache.get(R::KIND, owner_id).await?;
        match deserialize_records(&bytes) {
            Ok(items) => Some(items),
            Err(err) => {
                // Treat as a miss
                tracing::warn!(
                    kind = %R::KIND,
                    error = %err,
                    "Cached payload deserialization failed"
                );
                None
            }
        }
    }

    async fn write_cache(&self, owner_id: &str, items: &[R]) {
        match serialize_records(items) {
            Ok(bytes) => self.cache.set(R::KIND, &bytes, Some(owner_id)).await,
            Err(err) => {
                tracing::warn!(kind = %R::KIND, error = %err, "Failed to cache records")
            }
        }
    }
}

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::cache::ResourceKind;
use crate::finance::RecordError;

use super::{ListFilter, Result};

/// Where a freshly created record goes in the local list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Newest first.
    Prepend,
    /// In creation order.
    Append,
}

/// A server-owned record kind that can be listed, cached and edited.
///
/// Everything kind-specific the accessor and the stores need lives here, so
/// both resource kinds share one generic implementation.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Cache slot used for this kind.
    const KIND: ResourceKind;
    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;
    /// Lowercase singular used in user-facing messages.
    const NOUN: &'static str;
    /// Verb used in the "failed to ..." message for creation.
    const CREATE_VERB: &'static str;
    /// Where `create` inserts into the local list.
    const PLACEMENT: Placement;
    /// Whether a successful update is announced to the user.
    const NOTIFY_ON_UPDATE: bool;

    /// What the user fills in.
    type Draft: Send + Sync + 'static;
    /// The row the store inserts (draft plus owner and timestamps).
    type New: Clone + Send + Sync + 'static;
    /// Partial update.
    type Patch: Clone + Send + Sync + 'static;

    fn id(&self) -> Uuid;

    fn owner_id(&self) -> &str;

    /// Rejects drafts the store would refuse.
    fn validate(draft: &Self::Draft) -> std::result::Result<(), RecordError>;

    /// Rejects patches that would set invalid values.
    fn validate_patch(patch: &Self::Patch) -> std::result::Result<(), RecordError>;

    /// Attaches owner and creation timestamps to a draft.
    fn stamp(draft: Self::Draft, owner_id: &str, now: DateTime<Utc>) -> Self::New;

    /// Sets `updated_at` on a patch.
    fn touch(patch: Self::Patch, now: DateTime<Utc>) -> Self::Patch;

    /// Builds the stored record from an inserted row.
    fn materialize(new: Self::New, id: Uuid) -> Self;

    /// Applies a patch in place.
    fn apply(&mut self, patch: Self::Patch);

    /// Whether the record passes a list filter.
    fn matches(&self, filter: &ListFilter) -> bool;

    /// Ordering used by `list_by_owner`.
    fn list_order(a: &Self, b: &Self) -> Ordering;

    /// Success message (and optional detail) shown after creation.
    fn created_notice(&self) -> (String, Option<String>);
}

/// Remote CRUD over one record kind.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Lists an owner's records, narrowed by `filter`.
    async fn list_by_owner(&self, owner_id: &str, filter: &ListFilter) -> Result<Vec<R>>;

    /// Gets a record by its ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>>;

    /// Inserts a record; the store assigns the id.
    async fn create(&self, new: &R::New) -> Result<R>;

    /// Inserts several records at once.
    async fn create_batch(&self, news: &[R::New]) -> Result<Vec<R>>;

    /// Applies a partial update and returns the stored record.
    async fn update(&self, id: Uuid, patch: &R::Patch) -> Result<R>;

    /// Deletes a record by its ID.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

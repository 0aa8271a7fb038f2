use async_trait::async_trait;

use super::{CacheReport, ResourceKind};

/// Time-boxed read-through cache holding one serialized payload per kind.
///
/// Cache operations never fail: a missing or stale entry is simply `None`.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets the payload for `kind` if it is fresh for `owner_id`.
    async fn get(&self, kind: ResourceKind, owner_id: &str) -> Option<Vec<u8>>;

    /// Stores the payload for `kind`, stamping the kind and (if given) the owner.
    async fn set(&self, kind: ResourceKind, payload: &[u8], owner_id: Option<&str>);

    /// Drops one kind, or everything (including owner stamps) when `kind` is `None`.
    async fn invalidate(&self, kind: Option<ResourceKind>);

    /// Returns a diagnostic snapshot of every kind.
    async fn describe(&self) -> CacheReport;
}

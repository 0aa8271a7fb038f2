//! In-memory read-through cache with per-owner freshness.
//!
//! Holds one serialized payload per resource kind. Freshness is tracked twice:
//! a kind-level stamp written on every `set`, and a per-owner stamp keyed by
//! `owner_stamp_key(owner, kind)`. Staleness is checked lazily on read.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::time::Instant;

use fintrack_core::cache::{owner_stamp_key, Cache, CacheReport, KindStatus, ResourceKind};

/// A cached payload for one kind.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<u8>,
    /// Owner the payload was stored for.
    owner_id: Option<String>,
    fetched_at: Instant,
    fetched_at_wall: DateTime<Utc>,
}

impl CacheEntry {
    fn new(payload: Vec<u8>, owner_id: Option<&str>) -> Self {
        Self {
            payload,
            owner_id: owner_id.map(str::to_string),
            fetched_at: Instant::now(),
            fetched_at_wall: Utc::now(),
        }
    }

    /// A payload stored for another owner is never served.
    fn belongs_to(&self, owner_id: &str) -> bool {
        self.owner_id.as_deref().is_none_or(|stored| stored == owner_id)
    }
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<ResourceKind, CacheEntry>,
    /// Keyed by `owner_stamp_key`.
    owner_stamps: HashMap<String, Instant>,
}

/// In-memory cache implementation.
///
/// Thread-safe through `Arc<RwLock<_>>`; clones share the same store. Build
/// one per application and inject it into every accessor.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    state: Arc<RwLock<CacheState>>,
    ttl: Duration,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(fintrack_core::cache::DEFAULT_TTL)
    }
}

impl MemoryCache {
    /// Creates an empty cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState::default())),
            ttl,
        }
    }

    fn is_fresh(&self, stamp: Instant) -> bool {
        stamp.elapsed() < self.ttl
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, kind: ResourceKind, owner_id: &str) -> Option<Vec<u8>> {
        let state = self.state.read().await;

        let Some(entry) = state.entries.get(&kind) else {
            tracing::trace!(%kind, owner_id, "Cache miss (empty)");
            return None;
        };

        if !entry.belongs_to(owner_id) {
            tracing::trace!(%kind, owner_id, "Cache miss (stored for another owner)");
            return None;
        }

        let stamp = state
            .owner_stamps
            .get(&owner_stamp_key(owner_id, kind))
            .copied()
            .unwrap_or(entry.fetched_at);

        if !self.is_fresh(stamp) {
            tracing::trace!(%kind, owner_id, "Cache miss (stale)");
            return None;
        }

        tracing::trace!(%kind, owner_id, bytes = entry.payload.len(), "Cache hit");
        Some(entry.payload.clone())
    }

    async fn set(&self, kind: ResourceKind, payload: &[u8], owner_id: Option<&str>) {
        let mut state = self.state.write().await;
        let entry = CacheEntry::new(payload.to_vec(), owner_id);

        if let Some(owner_id) = owner_id {
            state
                .owner_stamps
                .insert(owner_stamp_key(owner_id, kind), entry.fetched_at);
        }
        state.entries.insert(kind, entry);

        tracing::trace!(%kind, ?owner_id, bytes = payload.len(), "Cache set");
    }

    async fn invalidate(&self, kind: Option<ResourceKind>) {
        let mut state = self.state.write().await;
        match kind {
            Some(kind) => {
                state.entries.remove(&kind);
                tracing::debug!(%kind, "Cache invalidated");
            }
            None => {
                state.entries.clear();
                state.owner_stamps.clear();
                tracing::debug!("Cache cleared");
            }
        }
    }

    async fn describe(&self) -> CacheReport {
        let state = self.state.read().await;
        let kinds = ResourceKind::ALL
            .into_iter()
            .map(|kind| {
                let status = state
                    .entries
                    .get(&kind)
                    .map_or_else(KindStatus::empty, |entry| KindStatus {
                        has_data: true,
                        last_fetch_time: Some(entry.fetched_at_wall),
                        is_fresh: self.is_fresh(entry.fetched_at),
                    });
                (kind, status)
            })
            .collect();

        CacheReport { kinds }
    }
}

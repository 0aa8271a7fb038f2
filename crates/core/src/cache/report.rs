use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ResourceKind;

/// Diagnostic state of one cached kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStatus {
    pub has_data: bool,
    pub last_fetch_time: Option<DateTime<Utc>>,
    pub is_fresh: bool,
}

impl KindStatus {
    /// Status of a kind that has never been populated.
    pub fn empty() -> Self {
        Self {
            has_data: false,
            last_fetch_time: None,
            is_fresh: false,
        }
    }
}

/// Snapshot returned by [`Cache::describe`](super::Cache::describe).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheReport {
    pub kinds: BTreeMap<ResourceKind, KindStatus>,
}

impl CacheReport {
    /// Status for one kind; kinds missing from the report are empty.
    pub fn status(&self, kind: ResourceKind) -> KindStatus {
        self.kinds.get(&kind).cloned().unwrap_or_else(KindStatus::empty)
    }
}

use serde::{Deserialize, Serialize};

/// The record collections the cache holds one payload for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Transactions,
    Categories,
}

impl ResourceKind {
    /// Every kind, in a stable order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Transactions, ResourceKind::Categories];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Transactions => "transactions",
            ResourceKind::Categories => "categories",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the key of the per-owner freshness stamp for a kind.
///
/// # Examples
///
/// ```
/// use fintrack_core::cache::{owner_stamp_key, ResourceKind};
///
/// assert_eq!(
///     owner_stamp_key("user-1", ResourceKind::Categories),
///     "user-1_categories"
/// );
/// ```
pub fn owner_stamp_key(owner_id: &str, kind: ResourceKind) -> String {
    format!("{}_{}", owner_id, kind.as_str())
}

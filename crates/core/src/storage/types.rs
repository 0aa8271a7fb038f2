use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::finance::TransactionType;

/// Optional narrowing applied to a `list_by_owner` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ListFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only records of the given type.
    pub fn of_kind(kind: TransactionType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when no narrowing is requested.
    pub fn is_unfiltered(&self) -> bool {
        self.kind.is_none() && self.category_id.is_none() && self.limit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_unfiltered() {
        assert!(ListFilter::all().is_unfiltered());
        assert!(!ListFilter::of_kind(TransactionType::Income).is_unfiltered());
        assert!(!ListFilter::all().with_limit(5).is_unfiltered());
    }

    #[test]
    fn test_filter_builder() {
        let category_id = Uuid::new_v4();
        let filter = ListFilter::of_kind(TransactionType::Expense)
            .with_category(category_id)
            .with_limit(10);

        assert_eq!(filter.kind, Some(TransactionType::Expense));
        assert_eq!(filter.category_id, Some(category_id));
        assert_eq!(filter.limit, Some(10));
    }
}

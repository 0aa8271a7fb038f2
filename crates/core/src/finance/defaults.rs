//! Default categories every new account starts with.

use super::requests::CategoryDraft;
use super::types::{Category, TransactionType};

/// Name, type and color of one default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub kind: TransactionType,
    pub color: &'static str,
}

impl DefaultCategory {
    /// Converts the template into a draft ready to be stamped.
    pub fn to_draft(&self) -> CategoryDraft {
        CategoryDraft::new(self.name, self.kind, self.color)
    }
}

const fn expense(name: &'static str, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        kind: TransactionType::Expense,
        color,
    }
}

const fn income(name: &'static str, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        kind: TransactionType::Income,
        color,
    }
}

pub const DEFAULT_CATEGORIES: [DefaultCategory; 15] = [
    expense("Food & Dining", "#ef4444"),
    expense("Transportation", "#f97316"),
    expense("Shopping", "#8b5cf6"),
    expense("Entertainment", "#f59e0b"),
    expense("Bills & Utilities", "#06b6d4"),
    expense("Healthcare", "#84cc16"),
    expense("Education", "#3b82f6"),
    expense("Travel", "#ec4899"),
    expense("Other", "#6b7280"),
    income("Salary", "#10b981"),
    income("Freelancing", "#22c55e"),
    income("Investment", "#6366f1"),
    income("Business", "#14b8a6"),
    income("Other Income", "#059669"),
    income("Gift", "#22c55e"),
];

/// Returns drafts for every default category.
pub fn default_category_drafts() -> Vec<CategoryDraft> {
    DEFAULT_CATEGORIES.iter().map(DefaultCategory::to_draft).collect()
}

/// Returns drafts for the defaults whose names (compared case-insensitively)
/// are not present in `existing`.
pub fn missing_default_categories(existing: &[Category]) -> Vec<CategoryDraft> {
    DEFAULT_CATEGORIES
        .iter()
        .filter(|default| !existing.iter().any(|c| c.has_name(default.name)))
        .map(DefaultCategory::to_draft)
        .collect()
}

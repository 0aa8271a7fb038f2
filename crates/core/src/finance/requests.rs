//! Payloads for creating and updating finance records.
//!
//! Drafts hold what a user fills in; the accessor stamps owner and
//! timestamps to turn them into the `New*` rows the remote store inserts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Category, Transaction, TransactionType};

/// User-supplied fields for a new transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: i64,
    pub category_id: Uuid,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Create an income draft.
    pub fn income(amount: i64, category_id: Uuid, date: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Income,
            amount,
            category_id,
            description: String::new(),
            date,
        }
    }

    /// Create an expense draft.
    pub fn expense(amount: i64, category_id: Uuid, date: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            amount,
            category_id,
            description: String::new(),
            date,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach owner and timestamps for insertion.
    pub fn stamp(self, owner_id: &str, now: DateTime<Utc>) -> NewTransaction {
        NewTransaction {
            owner_id: owner_id.to_string(),
            kind: self.kind,
            amount: self.amount,
            category_id: self.category_id,
            description: self.description,
            date: self.date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A transaction row ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub owner_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: i64,
    pub category_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewTransaction {
    /// Materialize the row under a store-assigned id.
    pub fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            owner_id: self.owner_id,
            kind: self.kind,
            amount: self.amount,
            category_id: self.category_id,
            description: self.description,
            date: self.date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Apply the patch to an existing transaction.
    pub fn apply_to(self, transaction: &mut Transaction) {
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(category_id) = self.category_id {
            transaction.category_id = category_id;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(updated_at) = self.updated_at {
            transaction.updated_at = updated_at;
        }
    }
}

/// User-supplied fields for a new category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub color: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, kind: TransactionType, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            color: color.into(),
        }
    }

    /// Attach owner and timestamps for insertion.
    pub fn stamp(self, owner_id: &str, now: DateTime<Utc>) -> NewCategory {
        NewCategory {
            owner_id: owner_id.to_string(),
            name: self.name,
            kind: self.kind,
            color: self.color,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A category row ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCategory {
    /// Materialize the row under a store-assigned id.
    pub fn into_category(self, id: Uuid) -> Category {
        Category {
            id,
            owner_id: self.owner_id,
            name: self.name,
            kind: self.kind,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update for a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CategoryPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Apply the patch to an existing category.
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(kind) = self.kind {
            category.kind = kind;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
        if let Some(updated_at) = self.updated_at {
            category.updated_at = updated_at;
        }
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Returns the lowercase name used by the remote store.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Returns the sign shown in front of formatted amounts.
    pub fn sign(&self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense record owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub owner_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Amount in minor currency units. Never negative.
    pub amount: i64,
    pub category_id: Uuid,
    pub description: String,
    /// The day the money moved.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the amount with the sign implied by its type.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A user-defined bucket that transactions are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Display color (CSS hex value).
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Case-insensitive name comparison, matching how names are deduplicated.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Total amount booked against one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub amount: i64,
}

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_income: i64,
    pub total_expenses: i64,
    pub balance: i64,
    /// Percentage of income kept, rounded to one decimal.
    pub savings_rate: f64,
    pub transaction_count: usize,
}

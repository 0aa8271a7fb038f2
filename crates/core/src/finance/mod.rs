mod defaults;
mod error;
mod format;
mod operations;
mod requests;
mod types;

pub use defaults::{
    default_category_drafts, missing_default_categories, DefaultCategory, DEFAULT_CATEGORIES,
};
pub use error::RecordError;
pub use format::{format_currency, format_signed};
pub use operations::{
    balance, categories_of_kind, category_name, group_by_category, recent, savings_rate,
    summary_stats, total_by_type, validate_category, validate_category_patch, validate_transaction,
    validate_transaction_patch, DEFAULT_RECENT_LIMIT, UNKNOWN_CATEGORY,
};
pub use requests::{
    CategoryDraft, CategoryPatch, NewCategory, NewTransaction, TransactionDraft, TransactionPatch,
};
pub use types::{Category, CategoryTotal, SummaryStats, Transaction, TransactionType};

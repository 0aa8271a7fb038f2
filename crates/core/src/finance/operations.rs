use std::collections::HashMap;

use uuid::Uuid;

use super::error::RecordError;
use super::requests::{CategoryDraft, CategoryPatch, TransactionDraft, TransactionPatch};
use super::types::{Category, CategoryTotal, SummaryStats, Transaction, TransactionType};

/// Label used when a transaction points at a category we do not have locally.
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Number of transactions shown in the "recent" list by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Sums the amounts of all transactions of the given type.
pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> i64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income total minus expense total.
pub fn balance(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Share of income that was not spent, as a percentage rounded to one decimal.
///
/// Defined as 0 when there is no income.
pub fn savings_rate(total_income: i64, balance: i64) -> f64 {
    if total_income == 0 {
        return 0.0;
    }
    let rate = balance as f64 / total_income as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Computes the dashboard figures for a set of transactions.
pub fn summary_stats(transactions: &[Transaction]) -> SummaryStats {
    let total_income = total_by_type(transactions, TransactionType::Income);
    let total_expenses = total_by_type(transactions, TransactionType::Expense);
    let balance = total_income - total_expenses;

    SummaryStats {
        total_income,
        total_expenses,
        balance,
        savings_rate: savings_rate(total_income, balance),
        transaction_count: transactions.len(),
    }
}

/// Groups transactions of one type by category, largest total first.
///
/// Category names and colors are resolved from `categories`; ids that are
/// not found are labelled [`UNKNOWN_CATEGORY`]. Equal totals are ordered by
/// name so the output is stable.
pub fn group_by_category(
    transactions: &[Transaction],
    categories: &[Category],
    kind: TransactionType,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<Uuid, i64> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(transaction.category_id).or_default() += transaction.amount;
    }

    let mut grouped: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category_id, amount)| {
            let category = categories.iter().find(|c| c.id == category_id);
            CategoryTotal {
                category_id,
                name: category.map_or_else(|| UNKNOWN_CATEGORY.to_string(), |c| c.name.clone()),
                color: category.map(|c| c.color.clone()),
                amount,
            }
        })
        .collect();

    grouped.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
    grouped
}

/// Returns the `limit` most recently created transactions, newest first.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Returns the categories of one type.
pub fn categories_of_kind(categories: &[Category], kind: TransactionType) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.kind == kind)
        .cloned()
        .collect()
}

/// Resolves a category name by id, falling back to [`UNKNOWN_CATEGORY`].
pub fn category_name(categories: &[Category], category_id: Uuid) -> &str {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map_or(UNKNOWN_CATEGORY, |c| c.name.as_str())
}

/// Validates a transaction draft before it is sent to the store.
pub fn validate_transaction(draft: &TransactionDraft) -> Result<(), RecordError> {
    check_amount(draft.amount)
}

/// Validates the fields a transaction patch sets.
pub fn validate_transaction_patch(patch: &TransactionPatch) -> Result<(), RecordError> {
    patch.amount.map_or(Ok(()), check_amount)
}

/// Validates a category draft before it is sent to the store.
pub fn validate_category(draft: &CategoryDraft) -> Result<(), RecordError> {
    check_name(&draft.name)?;
    check_color(&draft.color)
}

/// Validates the fields a category patch sets.
pub fn validate_category_patch(patch: &CategoryPatch) -> Result<(), RecordError> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(color) = &patch.color {
        check_color(color)?;
    }
    Ok(())
}

fn check_amount(amount: i64) -> Result<(), RecordError> {
    if amount < 0 {
        return Err(RecordError::NegativeAmount(amount));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), RecordError> {
    if name.trim().is_empty() {
        return Err(RecordError::EmptyName);
    }
    if name.chars().count() > 50 {
        return Err(RecordError::NameTooLong);
    }
    Ok(())
}

fn check_color(color: &str) -> Result<(), RecordError> {
    if !is_valid_color(color) {
        return Err(RecordError::InvalidColor(color.to_string()));
    }
    Ok(())
}

/// Checks for a `#RGB`, `#RRGGBB` or `#RRGGBBAA` hex color.
fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    [3, 6, 8].contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn transaction(
        kind: TransactionType,
        amount: i64,
        category_id: Uuid,
        minute: i64,
    ) -> Transaction {
        let created =
            Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap() + Duration::minutes(minute);
        Transaction {
            id: Uuid::new_v4(),
            owner_id: "user-1".to_string(),
            kind,
            amount,
            category_id,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            created_at: created,
            updated_at: created,
        }
    }

    fn category(name: &str, kind: TransactionType) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::new_v4(),
            owner_id: "user-1".to_string(),
            name: name.to_string(),
            kind,
            color: "#10b981".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_totals_and_balance() {
        let salary = Uuid::new_v4();
        let food = Uuid::new_v4();
        let transactions = vec![
            transaction(TransactionType::Income, 5_500_000, salary, 0),
            transaction(TransactionType::Expense, 450_000, food, 1),
            transaction(TransactionType::Expense, 25_000, food, 2),
        ];

        assert_eq!(total_by_type(&transactions, TransactionType::Income), 5_500_000);
        assert_eq!(total_by_type(&transactions, TransactionType::Expense), 475_000);
        assert_eq!(balance(&transactions), 5_025_000);
    }

    #[test]
    fn test_savings_rate_zero_without_income() {
        assert_eq!(savings_rate(0, -100), 0.0);

        let food = Uuid::new_v4();
        let stats = summary_stats(&[transaction(TransactionType::Expense, 100, food, 0)]);
        assert_eq!(stats.savings_rate, 0.0);
        assert_eq!(stats.balance, -100);
    }

    #[test]
    fn test_savings_rate_rounds_to_one_decimal() {
        // 2 / 3 kept = 66.666..%
        assert_eq!(savings_rate(300, 200), 66.7);
        assert_eq!(savings_rate(1000, -500), -50.0);
    }

    #[test]
    fn test_summary_balance_invariant() {
        let a = Uuid::new_v4();
        let transactions = vec![
            transaction(TransactionType::Income, 1_200_000, a, 0),
            transaction(TransactionType::Income, 350_000, a, 1),
            transaction(TransactionType::Expense, 850_000, a, 2),
        ];
        let stats = summary_stats(&transactions);

        assert_eq!(stats.balance, stats.total_income - stats.total_expenses);
        assert_eq!(stats.transaction_count, 3);
    }

    #[test]
    fn test_group_by_category_sorted_descending() {
        let food = category("Food & Dining", TransactionType::Expense);
        let bills = category("Bills & Utilities", TransactionType::Expense);
        let orphan = Uuid::new_v4();
        let transactions = vec![
            transaction(TransactionType::Expense, 45_000, food.id, 0),
            transaction(TransactionType::Expense, 850_000, bills.id, 1),
            transaction(TransactionType::Expense, 25_000, food.id, 2),
            transaction(TransactionType::Expense, 10_000, orphan, 3),
            transaction(TransactionType::Income, 999_999, food.id, 4),
        ];

        let grouped = group_by_category(
            &transactions,
            &[food.clone(), bills.clone()],
            TransactionType::Expense,
        );

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].name, "Bills & Utilities");
        assert_eq!(grouped[0].amount, 850_000);
        assert_eq!(grouped[1].name, "Food & Dining");
        assert_eq!(grouped[1].amount, 70_000);
        assert_eq!(grouped[2].name, UNKNOWN_CATEGORY);
        assert_eq!(grouped[2].color, None);
    }

    #[test]
    fn test_recent_returns_newest_first() {
        let a = Uuid::new_v4();
        let transactions: Vec<_> = (0..8)
            .map(|minute| transaction(TransactionType::Expense, 1, a, minute))
            .collect();

        let latest = recent(&transactions, DEFAULT_RECENT_LIMIT);

        assert_eq!(latest.len(), 5);
        assert_eq!(latest[0].id, transactions[7].id);
        assert_eq!(latest[4].id, transactions[3].id);
    }

    #[test]
    fn test_categories_of_kind_and_name_lookup() {
        let salary = category("Salary", TransactionType::Income);
        let food = category("Food & Dining", TransactionType::Expense);
        let categories = vec![salary.clone(), food.clone()];

        let income = categories_of_kind(&categories, TransactionType::Income);
        assert_eq!(income, vec![salary.clone()]);
        assert_eq!(category_name(&categories, food.id), "Food & Dining");
        assert_eq!(category_name(&categories, Uuid::new_v4()), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_validate_transaction_rejects_negative_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let draft = TransactionDraft::expense(-1, Uuid::new_v4(), date);
        assert_eq!(
            validate_transaction(&draft),
            Err(RecordError::NegativeAmount(-1))
        );

        let draft = TransactionDraft::expense(0, Uuid::new_v4(), date);
        assert!(validate_transaction(&draft).is_ok());
    }

    #[test]
    fn test_validate_category() {
        let ok = CategoryDraft::new("Gift", TransactionType::Income, "#22c55e");
        assert!(validate_category(&ok).is_ok());

        let empty = CategoryDraft::new("  ", TransactionType::Income, "#22c55e");
        assert_eq!(validate_category(&empty), Err(RecordError::EmptyName));

        let bad_color = CategoryDraft::new("Gift", TransactionType::Income, "green");
        assert_eq!(
            validate_category(&bad_color),
            Err(RecordError::InvalidColor("green".to_string()))
        );
    }

    #[test]
    fn test_validate_patches_check_only_set_fields() {
        assert!(validate_transaction_patch(&TransactionPatch::new()).is_ok());
        assert_eq!(
            validate_transaction_patch(&TransactionPatch::new().with_amount(-500)),
            Err(RecordError::NegativeAmount(-500))
        );

        assert!(validate_category_patch(&CategoryPatch::new().with_color("#fff")).is_ok());
        assert_eq!(
            validate_category_patch(&CategoryPatch::new().with_name("")),
            Err(RecordError::EmptyName)
        );
        assert_eq!(
            validate_category_patch(&CategoryPatch::new().with_color("blue")),
            Err(RecordError::InvalidColor("blue".to_string()))
        );
    }
}

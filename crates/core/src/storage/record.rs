use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cache::ResourceKind;
use crate::finance::{
    format_signed, validate_category, validate_category_patch, validate_transaction,
    validate_transaction_patch, Category, CategoryDraft, CategoryPatch, NewCategory,
    NewTransaction, RecordError, Transaction, TransactionDraft, TransactionPatch,
};

use super::{ListFilter, Placement, Record};

impl Record for Transaction {
    const KIND: ResourceKind = ResourceKind::Transactions;
    const ENTITY: &'static str = "Transaction";
    const NOUN: &'static str = "transaction";
    const CREATE_VERB: &'static str = "add";
    const PLACEMENT: Placement = Placement::Prepend;
    // Edit forms show their own confirmation.
    const NOTIFY_ON_UPDATE: bool = false;

    type Draft = TransactionDraft;
    type New = NewTransaction;
    type Patch = TransactionPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn validate(draft: &TransactionDraft) -> Result<(), RecordError> {
        validate_transaction(draft)
    }

    fn validate_patch(patch: &TransactionPatch) -> Result<(), RecordError> {
        validate_transaction_patch(patch)
    }

    fn stamp(draft: TransactionDraft, owner_id: &str, now: DateTime<Utc>) -> NewTransaction {
        draft.stamp(owner_id, now)
    }

    fn touch(patch: TransactionPatch, now: DateTime<Utc>) -> TransactionPatch {
        TransactionPatch {
            updated_at: Some(now),
            ..patch
        }
    }

    fn materialize(new: NewTransaction, id: Uuid) -> Self {
        new.into_transaction(id)
    }

    fn apply(&mut self, patch: TransactionPatch) {
        patch.apply_to(self);
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        filter.kind.is_none_or(|kind| self.kind == kind)
            && filter.category_id.is_none_or(|id| self.category_id == id)
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }

    fn created_notice(&self) -> (String, Option<String>) {
        (
            "Transaction added successfully!".to_string(),
            Some(format_signed(self.kind, self.amount)),
        )
    }
}

impl Record for Category {
    const KIND: ResourceKind = ResourceKind::Categories;
    const ENTITY: &'static str = "Category";
    const NOUN: &'static str = "category";
    const CREATE_VERB: &'static str = "create";
    const PLACEMENT: Placement = Placement::Append;
    const NOTIFY_ON_UPDATE: bool = true;

    type Draft = CategoryDraft;
    type New = NewCategory;
    type Patch = CategoryPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn validate(draft: &CategoryDraft) -> Result<(), RecordError> {
        validate_category(draft)
    }

    fn validate_patch(patch: &CategoryPatch) -> Result<(), RecordError> {
        validate_category_patch(patch)
    }

    fn stamp(draft: CategoryDraft, owner_id: &str, now: DateTime<Utc>) -> NewCategory {
        draft.stamp(owner_id, now)
    }

    fn touch(patch: CategoryPatch, now: DateTime<Utc>) -> CategoryPatch {
        CategoryPatch {
            updated_at: Some(now),
            ..patch
        }
    }

    fn materialize(new: NewCategory, id: Uuid) -> Self {
        new.into_category(id)
    }

    fn apply(&mut self, patch: CategoryPatch) {
        patch.apply_to(self);
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        filter.kind.is_none_or(|kind| self.kind == kind)
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }

    fn created_notice(&self) -> (String, Option<String>) {
        ("Category created successfully!".to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::TransactionType;
    use chrono::{Duration, NaiveDate};

    fn transaction(kind: TransactionType, category_id: Uuid) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        TransactionDraft {
            kind,
            amount: 5_500_000,
            category_id,
            description: "Salary".to_string(),
            date,
        }
        .stamp("user-1", Utc::now())
        .into_transaction(Uuid::new_v4())
    }

    #[test]
    fn test_transaction_matches_filter() {
        let salary = Uuid::new_v4();
        let t = transaction(TransactionType::Income, salary);

        assert!(t.matches(&ListFilter::all()));
        assert!(t.matches(&ListFilter::of_kind(TransactionType::Income)));
        assert!(!t.matches(&ListFilter::of_kind(TransactionType::Expense)));
        assert!(t.matches(&ListFilter::all().with_category(salary)));
        assert!(!t.matches(&ListFilter::all().with_category(Uuid::new_v4())));
    }

    #[test]
    fn test_transaction_list_order_newest_first() {
        let older = transaction(TransactionType::Income, Uuid::new_v4());
        let mut newer = transaction(TransactionType::Income, Uuid::new_v4());
        newer.created_at = older.created_at + Duration::minutes(1);

        assert_eq!(Transaction::list_order(&newer, &older), Ordering::Less);
    }

    #[test]
    fn test_touch_sets_updated_at() {
        let now = Utc::now();
        let patch = Transaction::touch(TransactionPatch::new().with_amount(1), now);
        assert_eq!(patch.updated_at, Some(now));
        assert_eq!(patch.amount, Some(1));

        let patch = Category::touch(CategoryPatch::new(), now);
        assert_eq!(patch.updated_at, Some(now));
    }

    #[test]
    fn test_created_notice_includes_signed_amount() {
        let t = transaction(TransactionType::Income, Uuid::new_v4());
        let (message, detail) = t.created_notice();

        assert_eq!(message, "Transaction added successfully!");
        assert_eq!(detail.as_deref(), Some("+Rp 5.500.000"));
    }

    #[test]
    fn test_category_order_by_name() {
        let now = Utc::now();
        let a = CategoryDraft::new("Bills", TransactionType::Expense, "#06b6d4")
            .stamp("user-1", now)
            .into_category(Uuid::new_v4());
        let b = CategoryDraft::new("Travel", TransactionType::Expense, "#ec4899")
            .stamp("user-1", now)
            .into_category(Uuid::new_v4());

        assert_eq!(Category::list_order(&a, &b), Ordering::Less);
        assert_eq!(Category::PLACEMENT, Placement::Append);
        assert_eq!(Transaction::PLACEMENT, Placement::Prepend);
    }
}

//! Derived views over the locally held categories.

use uuid::Uuid;

use fintrack_core::access::Result;
use fintrack_core::finance::{self, Category, TransactionType};
use fintrack_core::storage::ListFilter;

use super::CategoryAccessor;

impl CategoryAccessor {
    pub fn income_categories(&self) -> Vec<Category> {
        finance::categories_of_kind(&self.items(), TransactionType::Income)
    }

    pub fn expense_categories(&self) -> Vec<Category> {
        finance::categories_of_kind(&self.items(), TransactionType::Expense)
    }

    /// Display name for a category id, or "Unknown Category".
    pub fn name_of(&self, id: Uuid) -> String {
        finance::category_name(&self.items(), id).to_string()
    }

    /// Fetches the owner's categories of one type straight from the store.
    pub async fn by_type(&self, kind: TransactionType) -> Result<Vec<Category>> {
        self.query(ListFilter::of_kind(kind)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fintrack_core::finance::CategoryDraft;
    use fintrack_core::session::User;

    use super::*;
    use crate::accessor::testing::{FlakyRepository, RecordingNotifier};
    use crate::cache::MemoryCache;
    use crate::session::SessionHandle;

    #[tokio::test]
    async fn test_category_views() {
        let session = SessionHandle::new();
        session.sign_in(User::new("u1", "u1@example.com"));
        let accessor = CategoryAccessor::new(
            Arc::new(FlakyRepository::<Category>::new()),
            Arc::new(MemoryCache::default()),
            Arc::new(session),
            Arc::new(RecordingNotifier::default()),
        );

        let salary = accessor
            .create(CategoryDraft::new("Salary", TransactionType::Income, "#10b981"))
            .await
            .unwrap();
        accessor
            .create(CategoryDraft::new("Food & Dining", TransactionType::Expense, "#ef4444"))
            .await
            .unwrap();
        accessor
            .create(CategoryDraft::new("Bills", TransactionType::Expense, "#06b6d4"))
            .await
            .unwrap();

        assert_eq!(accessor.income_categories().len(), 1);
        assert_eq!(accessor.expense_categories().len(), 2);
        assert_eq!(accessor.name_of(salary.id), "Salary");
        assert_eq!(accessor.name_of(Uuid::new_v4()), "Unknown Category");

        let expenses = accessor.by_type(TransactionType::Expense).await.unwrap();
        let names: Vec<&str> = expenses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bills", "Food & Dining"]);
    }
}

//! Derived views over the locally held transactions.

use fintrack_core::finance::{
    self, Category, CategoryTotal, SummaryStats, Transaction, TransactionType,
};

use super::TransactionAccessor;

impl TransactionAccessor {
    pub fn total_income(&self) -> i64 {
        finance::total_by_type(&self.items(), TransactionType::Income)
    }

    pub fn total_expenses(&self) -> i64 {
        finance::total_by_type(&self.items(), TransactionType::Expense)
    }

    /// Income minus expenses.
    pub fn balance(&self) -> i64 {
        finance::balance(&self.items())
    }

    /// Balance as a percentage of income, one decimal place.
    pub fn savings_rate(&self) -> f64 {
        self.summary().savings_rate
    }

    pub fn summary(&self) -> SummaryStats {
        finance::summary_stats(&self.items())
    }

    /// The `limit` most recently created transactions.
    pub fn recent(&self, limit: usize) -> Vec<Transaction> {
        finance::recent(&self.items(), limit)
    }

    /// Totals of one type per category, largest first.
    pub fn by_category(
        &self,
        categories: &[Category],
        kind: TransactionType,
    ) -> Vec<CategoryTotal> {
        finance::group_by_category(&self.items(), categories, kind)
    }
}

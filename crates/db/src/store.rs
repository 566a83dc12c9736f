//! Shared in-memory record store.

use std::sync::Arc;

use dashmap::DashMap;
use spendwise_core::budget::Budget;
use spendwise_core::category::Category;
use spendwise_core::period::BudgetPeriod;
use spendwise_core::transaction::Transaction;
use spendwise_shared::types::{BudgetId, CategoryId, TransactionId, UserId};

/// Uniqueness key for budgets: one per `(user, category, period)`.
pub(crate) type BudgetKey = (UserId, String, BudgetPeriod);

/// Uniqueness key for categories: one per `(user, name)`.
pub(crate) type CategoryKey = (UserId, String);

/// Handle to all records. Cloning is cheap and clones share data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) transactions: Arc<DashMap<TransactionId, Transaction>>,
    pub(crate) categories: Arc<DashMap<CategoryId, Category>>,
    pub(crate) category_names: Arc<DashMap<CategoryKey, CategoryId>>,
    pub(crate) budgets: Arc<DashMap<BudgetId, Budget>>,
    pub(crate) budget_keys: Arc<DashMap<BudgetKey, BudgetId>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one user's transactions, in no particular order.
    #[must_use]
    pub fn transactions_of(&self, user_id: UserId) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Snapshot of one user's budgets, in no particular order.
    #[must_use]
    pub fn budgets_of(&self, user_id: UserId) -> Vec<Budget> {
        self.budgets
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Snapshot of one user's categories, in no particular order.
    #[must_use]
    pub fn categories_of(&self, user_id: UserId) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }
}

pub(crate) fn budget_key(budget: &Budget) -> BudgetKey {
    (budget.user_id, budget.category.clone(), budget.period)
}

pub(crate) fn category_key(category: &Category) -> CategoryKey {
    (category.user_id, category.name.clone())
}

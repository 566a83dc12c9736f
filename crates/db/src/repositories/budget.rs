//! Budget repository.
//!
//! Budgets are unique per `(user, category, period)`.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use spendwise_core::budget::{
    Budget, BudgetError, BudgetService, CreateBudgetInput, UpdateBudgetInput,
};
use spendwise_core::period::BudgetPeriod;
use spendwise_shared::AppError;
use spendwise_shared::types::{BudgetId, UserId};
use tracing::debug;

use crate::store::{Store, budget_key};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetRepositoryError {
    /// Budget not found for this user.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// A budget already exists for this category and period.
    #[error("Budget already exists for category {category} and period {period}")]
    Duplicate {
        /// Category name.
        category: String,
        /// Budget period.
        period: BudgetPeriod,
    },

    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] BudgetError),
}

impl From<BudgetRepositoryError> for AppError {
    fn from(err: BudgetRepositoryError) -> Self {
        let message = err.to_string();
        match err {
            BudgetRepositoryError::NotFound(_) => Self::NotFound(message),
            BudgetRepositoryError::Duplicate { .. } => Self::Conflict(message),
            BudgetRepositoryError::Invalid(_) => Self::Validation(message),
        }
    }
}

/// Budget repository.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    store: Store,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Lists a user's budgets for one period, sorted by category.
    #[must_use]
    pub fn list(&self, user_id: UserId, period: BudgetPeriod) -> Vec<Budget> {
        let mut budgets: Vec<Budget> = self
            .store
            .budgets_of(user_id)
            .into_iter()
            .filter(|budget| budget.period == period)
            .collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category));
        budgets
    }

    /// Returns every budget of a user.
    #[must_use]
    pub fn all_for_user(&self, user_id: UserId) -> Vec<Budget> {
        self.store.budgets_of(user_id)
    }

    /// Gets one budget.
    pub fn get(&self, user_id: UserId, id: BudgetId) -> Result<Budget, BudgetRepositoryError> {
        self.store
            .budgets
            .get(&id)
            .filter(|budget| budget.user_id == user_id)
            .map(|budget| budget.value().clone())
            .ok_or(BudgetRepositoryError::NotFound(id))
    }

    /// Validates and stores a new budget.
    pub fn create(
        &self,
        user_id: UserId,
        input: CreateBudgetInput,
        now: DateTime<Utc>,
    ) -> Result<Budget, BudgetRepositoryError> {
        let budget = BudgetService::create_budget(user_id, input, now)?;

        match self.store.budget_keys.entry(budget_key(&budget)) {
            Entry::Occupied(_) => Err(BudgetRepositoryError::Duplicate {
                category: budget.category,
                period: budget.period,
            }),
            Entry::Vacant(slot) => {
                slot.insert(budget.id);
                self.store.budgets.insert(budget.id, budget.clone());
                debug!(id = %budget.id, user_id = %user_id, "Budget created");
                Ok(budget)
            }
        }
    }

    /// Applies a partial update, re-checking uniqueness when the category
    /// or period changes.
    pub fn update(
        &self,
        user_id: UserId,
        id: BudgetId,
        input: UpdateBudgetInput,
        now: DateTime<Utc>,
    ) -> Result<Budget, BudgetRepositoryError> {
        let mut entry = self
            .store
            .budgets
            .get_mut(&id)
            .filter(|budget| budget.user_id == user_id)
            .ok_or(BudgetRepositoryError::NotFound(id))?;

        let mut updated = entry.value().clone();
        BudgetService::update_budget(&mut updated, input, now)?;

        let old_key = budget_key(&entry);
        let new_key = budget_key(&updated);
        if old_key != new_key {
            match self.store.budget_keys.entry(new_key) {
                Entry::Occupied(_) => {
                    return Err(BudgetRepositoryError::Duplicate {
                        category: updated.category,
                        period: updated.period,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.store.budget_keys.remove(&old_key);
        }

        *entry = updated;
        Ok(entry.value().clone())
    }

    /// Deletes a budget, returning the removed record.
    pub fn delete(&self, user_id: UserId, id: BudgetId) -> Result<Budget, BudgetRepositoryError> {
        let (_, budget) = self
            .store
            .budgets
            .remove_if(&id, |_, budget| budget.user_id == user_id)
            .ok_or(BudgetRepositoryError::NotFound(id))?;
        self.store.budget_keys.remove(&budget_key(&budget));

        debug!(id = %id, user_id = %user_id, "Budget deleted");
        Ok(budget)
    }
}

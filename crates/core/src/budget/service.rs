//! Budget comparison, totals and validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use spendwise_shared::types::{BudgetId, UserId};

use super::aggregation::{SpendingByCategory, spending_by_category};
use super::error::BudgetError;
use super::types::{
    Budget, BudgetStatus, BudgetSummary, BudgetSummaryReport, BudgetTotals, CreateBudgetInput,
    UpdateBudgetInput,
};
use crate::period::BudgetPeriod;
use crate::transaction::{MAX_AMOUNT, Transaction};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Utilization percentage: `spent / budgeted * 100` clamped to `[0, 100]`.
    ///
    /// The value keeps full precision; rounding for display is left to callers.
    ///
    /// A non-positive `budgeted` yields zero. A ratio too large to represent
    /// saturates at 100.
    #[must_use]
    pub fn utilization_percent(spent: Decimal, budgeted: Decimal) -> Decimal {
        if budgeted <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        spent
            .checked_div(budgeted)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ONE_HUNDRED)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Compares one budget against aggregated spending.
    ///
    /// Spending for a category absent from `spending` counts as zero.
    /// Status is classified on the clamped percentage, so any overspend
    /// reports as `Exceeded` regardless of its size.
    #[must_use]
    pub fn compare(budget: &Budget, spending: &SpendingByCategory) -> BudgetSummary {
        let spent = spending
            .get(&budget.category)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let percentage = Self::utilization_percent(spent, budget.amount);

        BudgetSummary {
            id: budget.id,
            category: budget.category.clone(),
            budgeted: budget.amount,
            spent,
            remaining: budget.amount - spent,
            percentage,
            status: BudgetStatus::from_percentage(percentage),
        }
    }

    /// Reduces per-budget summaries to overall totals.
    ///
    /// Only spending attributed to a budget is counted.
    #[must_use]
    pub fn totals(summaries: &[BudgetSummary]) -> BudgetTotals {
        let (budgeted, spent) = summaries
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(budgeted, spent), s| {
                (
                    budgeted.saturating_add(s.budgeted),
                    spent.saturating_add(s.spent),
                )
            });
        let percentage = Self::utilization_percent(spent, budgeted);

        BudgetTotals {
            budgeted,
            spent,
            remaining: budgeted - spent,
            percentage,
            status: BudgetStatus::from_percentage(percentage),
        }
    }

    /// Builds the budget summary for the `period` containing `now`.
    ///
    /// Only budgets configured for `period` participate. `budgets` and
    /// `transactions` must belong to a single user.
    #[must_use]
    pub fn summarize(
        period: BudgetPeriod,
        now: DateTime<Utc>,
        budgets: &[Budget],
        transactions: &[Transaction],
    ) -> BudgetSummaryReport {
        let range = period.resolve(now);
        let spending = spending_by_category(transactions, &range);

        let mut summaries: Vec<BudgetSummary> = budgets
            .iter()
            .filter(|budget| budget.period == period)
            .map(|budget| Self::compare(budget, &spending))
            .collect();
        summaries.sort_by(|a, b| a.category.cmp(&b.category));

        let totals = Self::totals(&summaries);

        BudgetSummaryReport {
            period,
            start_date: range.start,
            end_date: range.end,
            budgets: summaries,
            totals,
        }
    }

    /// Validates and builds a new budget. A missing start date defaults to `now`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if the category is blank, the amount is not
    /// positive, or the end date precedes the start date.
    pub fn create_budget(
        user_id: UserId,
        input: CreateBudgetInput,
        now: DateTime<Utc>,
    ) -> Result<Budget, BudgetError> {
        let start_date = input.start_date.unwrap_or(now);
        Self::validate(&input.category, input.amount, start_date, input.end_date)?;

        Ok(Budget {
            id: BudgetId::new(),
            user_id,
            category: input.category,
            amount: input.amount,
            period: input.period,
            start_date,
            end_date: input.end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update after validating the merged result.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if the updated budget would be invalid; the
    /// budget is left unchanged in that case.
    pub fn update_budget(
        budget: &mut Budget,
        input: UpdateBudgetInput,
        now: DateTime<Utc>,
    ) -> Result<(), BudgetError> {
        let category = input.category.unwrap_or_else(|| budget.category.clone());
        let amount = input.amount.unwrap_or(budget.amount);
        let start_date = input.start_date.unwrap_or(budget.start_date);
        let end_date = input.end_date.or(budget.end_date);
        Self::validate(&category, amount, start_date, end_date)?;

        budget.category = category;
        budget.amount = amount;
        budget.start_date = start_date;
        budget.end_date = end_date;
        if let Some(period) = input.period {
            budget.period = period;
        }
        budget.updated_at = now;

        Ok(())
    }

    /// Checks the write-time invariants of a budget.
    ///
    /// # Errors
    ///
    /// See [`BudgetService::create_budget`].
    pub fn validate(
        category: &str,
        amount: Decimal,
        start_date: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<(), BudgetError> {
        if category.trim().is_empty() {
            return Err(BudgetError::EmptyCategory);
        }

        if amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount);
        }

        if amount > MAX_AMOUNT {
            return Err(BudgetError::AmountTooLarge);
        }

        if end_date.is_some_and(|end| end < start_date) {
            return Err(BudgetError::EndBeforeStart);
        }

        Ok(())
    }
}

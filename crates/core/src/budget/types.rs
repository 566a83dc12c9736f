//! Budget data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{BudgetId, UserId};

use crate::period::BudgetPeriod;

/// Percentage at or above which a budget is in `Warning`.
pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Percentage at or above which a budget is `Exceeded`.
pub const EXCEEDED_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// A spending ceiling for one category within one period.
///
/// Unique per `(user, category, period)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owner.
    pub user_id: UserId,
    /// Category name this budget caps.
    pub category: String,
    /// Positive spending limit.
    pub amount: Decimal,
    /// Budgeting cycle.
    pub period: BudgetPeriod,
    /// When the budget takes effect.
    pub start_date: DateTime<Utc>,
    /// Optional end of the budget.
    pub end_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// Category name.
    pub category: String,
    /// Spending limit.
    pub amount: Decimal,
    /// Budgeting cycle.
    pub period: BudgetPeriod,
    /// Start date; defaults to creation time.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Partial budget update.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetInput {
    /// New category name.
    pub category: Option<String>,
    /// New limit.
    pub amount: Option<Decimal>,
    /// New period.
    pub period: Option<BudgetPeriod>,
    /// New start date.
    pub start_date: Option<DateTime<Utc>>,
    /// New end date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Qualitative spending-to-budget classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Below the warning threshold.
    Good,
    /// At or above 80%.
    Warning,
    /// At or above 100%.
    Exceeded,
}

impl BudgetStatus {
    /// Classifies a (clamped) utilization percentage.
    #[must_use]
    pub fn from_percentage(percentage: Decimal) -> Self {
        if percentage >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Spending progress for a single budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Budget ID.
    pub id: BudgetId,
    /// Category name.
    pub category: String,
    /// Budget limit.
    pub budgeted: Decimal,
    /// Expenses in the category within the period.
    pub spent: Decimal,
    /// `budgeted - spent`; negative when overspent.
    pub remaining: Decimal,
    /// Utilization in `[0, 100]`.
    pub percentage: Decimal,
    /// Status derived from `percentage`.
    pub status: BudgetStatus,
}

/// Totals across every budget in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Sum of budget limits.
    pub budgeted: Decimal,
    /// Sum of per-budget spending.
    pub spent: Decimal,
    /// `budgeted - spent`.
    pub remaining: Decimal,
    /// Overall utilization in `[0, 100]`.
    pub percentage: Decimal,
    /// Overall status.
    pub status: BudgetStatus,
}

/// Budget summary for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummaryReport {
    /// Effective period.
    pub period: BudgetPeriod,
    /// First instant of the period.
    pub start_date: DateTime<Utc>,
    /// Last instant of the period.
    pub end_date: DateTime<Utc>,
    /// One entry per budget, ordered by category.
    pub budgets: Vec<BudgetSummary>,
    /// Totals across `budgets`.
    pub totals: BudgetTotals,
}

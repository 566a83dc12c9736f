//! Dashboard data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::SpendingByCategory;
use crate::transaction::Transaction;

/// Dashboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// All-time income.
    pub total_income: Decimal,
    /// All-time expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
    /// Latest transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
    /// Income and expense per calendar month, oldest first.
    pub monthly_data: Vec<MonthlyTotals>,
    /// All-time expenses per category.
    pub category_summary: SpendingByCategory,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Abbreviated month name, e.g. "Jan".
    pub month: String,
    /// First instant of the month.
    pub start_date: DateTime<Utc>,
    /// Income in the month.
    pub income: Decimal,
    /// Expenses in the month.
    pub expense: Decimal,
}

//! Dashboard aggregation.
//!
//! This module provides the dashboard view over a user's transactions:
//! - Income/expense totals and balance
//! - Most recent transactions
//! - Month-by-month income and expense series
//! - Expense totals by category

pub mod service;
pub mod types;

pub use service::{DashboardService, MONTHLY_HISTORY_MONTHS, RECENT_TRANSACTION_LIMIT};
pub use types::{DashboardSummary, MonthlyTotals};

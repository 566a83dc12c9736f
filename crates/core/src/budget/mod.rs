//! Budget tracking: spending aggregation, budget comparison and totals.
//!
//! The pipeline is linear and pure:
//! resolve period → aggregate expenses by category → compare each budget →
//! reduce to totals. See [`BudgetService::summarize`].

pub mod aggregation;
pub mod error;
pub mod service;
pub mod types;


pub use aggregation::{SpendingByCategory, spending_by_category};
pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{
    Budget, BudgetStatus, BudgetSummary, BudgetSummaryReport, BudgetTotals, CreateBudgetInput,
    EXCEEDED_THRESHOLD, UpdateBudgetInput, WARNING_THRESHOLD,
};

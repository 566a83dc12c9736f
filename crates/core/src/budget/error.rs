//! Budget error types.

use thiserror::Error;

use crate::period::PeriodParseError;

/// Budget validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Category is blank.
    #[error("Category is required")]
    EmptyCategory,

    /// Budget limit must be strictly positive.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Budget limit is above `MAX_AMOUNT`.
    #[error("Amount must not exceed 1000000000000")]
    AmountTooLarge,

    /// End date precedes start date.
    #[error("End date must not be before start date")]
    EndBeforeStart,

    /// Period keyword is not recognised.
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodParseError),
}

//! Transaction error types.

use thiserror::Error;

/// Transaction validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Amount must be strictly positive.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Amount is above `MAX_AMOUNT`.
    #[error("Amount must not exceed 1000000000000")]
    AmountTooLarge,

    /// Category is blank.
    #[error("Category is required")]
    EmptyCategory,
}

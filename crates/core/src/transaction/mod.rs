//! Income and expense transactions.

pub mod error;
pub mod filter;
pub mod types;

pub use error::TransactionError;
pub use filter::TransactionFilter;
pub use types::{
    CreateTransactionInput, MAX_AMOUNT, Transaction, TransactionType, UpdateTransactionInput,
};

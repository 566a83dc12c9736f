//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface over the [`Store`](crate::Store),
//! scoping every operation to a single user.

pub mod budget;
pub mod category;
pub mod transaction;


pub use budget::{BudgetRepository, BudgetRepositoryError};
pub use category::{CategoryRepository, CategoryRepositoryError};
pub use transaction::{TransactionRepository, TransactionRepositoryError};

//! Storage layer with in-memory repositories.
//!
//! This crate provides:
//! - A process-local [`Store`] holding every user's records
//! - Repository abstractions scoped by user
//! - Uniqueness enforcement for categories and budgets
//!
//! Nothing is persisted: records live as long as the `Store`.

pub mod repositories;
pub mod store;

pub use repositories::{
    BudgetRepository, BudgetRepositoryError, CategoryRepository, CategoryRepositoryError,
    TransactionRepository, TransactionRepositoryError,
};
pub use store::Store;

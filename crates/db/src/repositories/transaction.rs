//! Transaction repository.

use chrono::{DateTime, Utc};
use spendwise_core::transaction::{
    CreateTransactionInput, Transaction, TransactionError, TransactionFilter,
    UpdateTransactionInput,
};
use spendwise_shared::AppError;
use spendwise_shared::types::{TransactionId, UserId};
use tracing::debug;

use crate::store::Store;

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionRepositoryError {
    /// Transaction not found for this user.
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] TransactionError),
}

impl From<TransactionRepositoryError> for AppError {
    fn from(err: TransactionRepositoryError) -> Self {
        match err {
            TransactionRepositoryError::NotFound(_) => Self::NotFound(err.to_string()),
            TransactionRepositoryError::Invalid(e) => Self::Validation(e.to_string()),
        }
    }
}

/// Transaction repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    store: Store,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Lists a user's transactions matching `filter`, newest first.
    #[must_use]
    pub fn list(&self, user_id: UserId, filter: &TransactionFilter) -> Vec<Transaction> {
        filter.apply(self.store.transactions_of(user_id))
    }

    /// Returns every transaction of a user.
    #[must_use]
    pub fn all_for_user(&self, user_id: UserId) -> Vec<Transaction> {
        self.store.transactions_of(user_id)
    }

    /// Gets one transaction.
    pub fn get(
        &self,
        user_id: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionRepositoryError> {
        self.store
            .transactions
            .get(&id)
            .filter(|tx| tx.user_id == user_id)
            .map(|tx| tx.value().clone())
            .ok_or(TransactionRepositoryError::NotFound(id))
    }

    /// Validates and stores a new transaction.
    pub fn create(
        &self,
        user_id: UserId,
        input: CreateTransactionInput,
        now: DateTime<Utc>,
    ) -> Result<Transaction, TransactionRepositoryError> {
        let transaction = Transaction::create(user_id, input, now)?;
        self.store
            .transactions
            .insert(transaction.id, transaction.clone());

        debug!(id = %transaction.id, user_id = %user_id, "Transaction stored");
        Ok(transaction)
    }

    /// Applies a partial update.
    pub fn update(
        &self,
        user_id: UserId,
        id: TransactionId,
        input: UpdateTransactionInput,
        now: DateTime<Utc>,
    ) -> Result<Transaction, TransactionRepositoryError> {
        let mut entry = self
            .store
            .transactions
            .get_mut(&id)
            .filter(|tx| tx.user_id == user_id)
            .ok_or(TransactionRepositoryError::NotFound(id))?;

        entry.apply_update(input, now)?;
        Ok(entry.value().clone())
    }

    /// Deletes a transaction, returning the removed record.
    pub fn delete(
        &self,
        user_id: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionRepositoryError> {
        self.store
            .transactions
            .remove_if(&id, |_, tx| tx.user_id == user_id)
            .map(|(_, tx)| tx)
            .ok_or(TransactionRepositoryError::NotFound(id))
    }
}

//! Transaction data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{CategoryId, TransactionId, UserId};

use super::error::TransactionError;

/// Direction of money flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

/// A single income or expense record owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owner.
    pub user_id: UserId,
    /// Positive amount; the direction comes from `transaction_type`.
    pub amount: Decimal,
    /// Category name, matched exactly against budgets.
    pub category: String,
    /// Optional link to a category record.
    pub category_id: Option<CategoryId>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the money moved.
    pub date: DateTime<Utc>,
    /// Free-form description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionInput {
    /// Amount, must be positive.
    pub amount: Decimal,
    /// Category name.
    pub category: String,
    /// Optional category record.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the money moved.
    pub date: DateTime<Utc>,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransactionInput {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New category name.
    pub category: Option<String>,
    /// New category record.
    pub category_id: Option<CategoryId>,
    /// New direction.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
    /// New description.
    pub description: Option<String>,
}

/// Largest accepted amount for a transaction or budget: one trillion.
///
/// Keeps every per-user sum far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn validate_amount(amount: Decimal) -> Result<(), TransactionError> {
    if amount <= Decimal::ZERO {
        return Err(TransactionError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(TransactionError::AmountTooLarge);
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), TransactionError> {
    if category.trim().is_empty() {
        return Err(TransactionError::EmptyCategory);
    }
    Ok(())
}

impl Transaction {
    /// Builds a new transaction for `user_id` after validating `input`.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError` if the amount is not positive or the category is blank.
    pub fn create(
        user_id: UserId,
        input: CreateTransactionInput,
        now: DateTime<Utc>,
    ) -> Result<Self, TransactionError> {
        validate_amount(input.amount)?;
        validate_category(&input.category)?;

        Ok(Self {
            id: TransactionId::new(),
            user_id,
            amount: input.amount,
            category: input.category,
            category_id: input.category_id,
            transaction_type: input.transaction_type,
            date: input.date,
            description: input.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update. Nothing changes if validation fails.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError` if a supplied field is invalid.
    pub fn apply_update(
        &mut self,
        input: UpdateTransactionInput,
        now: DateTime<Utc>,
    ) -> Result<(), TransactionError> {
        if let Some(amount) = input.amount {
            validate_amount(amount)?;
        }
        if let Some(category) = &input.category {
            validate_category(category)?;
        }

        if let Some(amount) = input.amount {
            self.amount = amount;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if input.category_id.is_some() {
            self.category_id = input.category_id;
        }
        if let Some(transaction_type) = input.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(date) = input.date {
            self.date = date;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        self.updated_at = now;

        Ok(())
    }

    /// Returns true for expense records.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Returns true for income records.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

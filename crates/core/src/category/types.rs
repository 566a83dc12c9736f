//! Category data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{CategoryId, UserId};

use super::error::CategoryError;

/// A named category, unique per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owner.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating or renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    /// Requested name.
    pub name: String,
}

impl CategoryInput {
    /// Returns the trimmed name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if nothing remains after trimming.
    pub fn normalized_name(&self) -> Result<String, CategoryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(name.to_string())
    }
}

impl Category {
    /// Builds a new category for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` for a blank name.
    pub fn create(
        user_id: UserId,
        input: &CategoryInput,
        now: DateTime<Utc>,
    ) -> Result<Self, CategoryError> {
        Ok(Self {
            id: CategoryId::new(),
            user_id,
            name: input.normalized_name()?,
            created_at: now,
        })
    }
}

//! Category repository.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use spendwise_core::category::{Category, CategoryError, CategoryInput};
use spendwise_shared::AppError;
use spendwise_shared::types::{CategoryId, UserId};
use tracing::debug;

use crate::store::{Store, category_key};

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryRepositoryError {
    /// Category not found for this user.
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    /// The user already has a category with this name.
    #[error("Category already exists: {0}")]
    DuplicateName(String),

    /// Transactions still reference the category.
    #[error("Cannot delete category that is in use by transactions")]
    InUse,

    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] CategoryError),
}

impl From<CategoryRepositoryError> for AppError {
    fn from(err: CategoryRepositoryError) -> Self {
        let message = err.to_string();
        match err {
            CategoryRepositoryError::NotFound(_) => Self::NotFound(message),
            CategoryRepositoryError::DuplicateName(_) => Self::Conflict(message),
            CategoryRepositoryError::InUse => Self::BusinessRule(message),
            CategoryRepositoryError::Invalid(_) => Self::Validation(message),
        }
    }
}

/// Category repository.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: Store,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Lists a user's categories sorted by name.
    #[must_use]
    pub fn list(&self, user_id: UserId) -> Vec<Category> {
        let mut categories = self.store.categories_of(user_id);
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }

    /// Creates a category; names are unique per user.
    pub fn create(
        &self,
        user_id: UserId,
        input: &CategoryInput,
        now: DateTime<Utc>,
    ) -> Result<Category, CategoryRepositoryError> {
        let category = Category::create(user_id, input, now)?;

        match self.store.category_names.entry(category_key(&category)) {
            Entry::Occupied(_) => Err(CategoryRepositoryError::DuplicateName(category.name)),
            Entry::Vacant(slot) => {
                slot.insert(category.id);
                self.store.categories.insert(category.id, category.clone());
                debug!(id = %category.id, user_id = %user_id, "Category created");
                Ok(category)
            }
        }
    }

    /// Renames a category, keeping names unique per user.
    pub fn rename(
        &self,
        user_id: UserId,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, CategoryRepositoryError> {
        let name = input.normalized_name()?;

        let mut entry = self
            .store
            .categories
            .get_mut(&id)
            .filter(|category| category.user_id == user_id)
            .ok_or(CategoryRepositoryError::NotFound(id))?;

        if entry.name == name {
            return Ok(entry.value().clone());
        }

        let old_key = category_key(&entry);
        match self.store.category_names.entry((user_id, name.clone())) {
            Entry::Occupied(_) => return Err(CategoryRepositoryError::DuplicateName(name)),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }
        self.store.category_names.remove(&old_key);

        entry.name = name;
        Ok(entry.value().clone())
    }

    /// Deletes a category unless a transaction still references it.
    pub fn delete(
        &self,
        user_id: UserId,
        id: CategoryId,
    ) -> Result<Category, CategoryRepositoryError> {
        let in_use = self
            .store
            .transactions
            .iter()
            .any(|tx| tx.user_id == user_id && tx.category_id == Some(id));
        if in_use {
            return Err(CategoryRepositoryError::InUse);
        }

        let (_, category) = self
            .store
            .categories
            .remove_if(&id, |_, category| category.user_id == user_id)
            .ok_or(CategoryRepositoryError::NotFound(id))?;
        self.store.category_names.remove(&category_key(&category));

        debug!(id = %id, user_id = %user_id, "Category deleted");
        Ok(category)
    }
}

//! Category error types.

use thiserror::Error;

/// Category validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// Name is blank after trimming.
    #[error("Category name is required")]
    EmptyName,
}

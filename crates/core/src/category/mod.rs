//! User-defined spending categories.

pub mod error;
pub mod types;

pub use error::CategoryError;
pub use types::{Category, CategoryInput};

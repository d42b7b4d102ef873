//! Error types for menu items.

use document_store::{DocumentId, StoreError};
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// A required field is missing or empty.
    #[error("Invalid menu item: {0}")]
    Validation(String),

    /// No menu item has the given id.
    #[error("Menu item not found: {0}")]
    NotFound(DocumentId),

    /// The menu collection could not serve the request.
    #[error("Menu store error: {0}")]
    Store(String),
}

impl From<StoreError> for MenuError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => MenuError::NotFound(id),
            StoreError::Rejected(inner) => match inner.downcast::<MenuError>() {
                Ok(e) => *e,
                Err(other) => MenuError::Store(other.to_string()),
            },
            other => MenuError::Store(other.to_string()),
        }
    }
}

//! Error types for orders.

use crate::model::OrderStatus;
use document_store::{DocumentId, StoreError};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field is missing or empty.
    #[error("Invalid order: {0}")]
    Validation(String),

    /// The configured [`TransitionPolicy`](super::TransitionPolicy) forbids this change.
    #[error("Order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// No order has the given id.
    #[error("Order not found: {0}")]
    NotFound(DocumentId),

    /// The order collection could not serve the request.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::Rejected(inner) => match inner.downcast::<OrderError>() {
                Ok(e) => *e,
                Err(other) => OrderError::Store(other.to_string()),
            },
            other => OrderError::Store(other.to_string()),
        }
    }
}

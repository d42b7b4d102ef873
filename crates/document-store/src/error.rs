//! # Store Errors
//!
//! This module defines the error type shared by collections, handles and resource managers.
//! Entity-level failures travel inside [`StoreError::Rejected`] so each resource can recover
//! its own error type with a downcast.

use crate::id::DocumentId;

/// Errors that can occur within the document store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection closed")]
    Closed,
    #[error("Collection dropped response channel")]
    Dropped,
    #[error("Document not found: {0}")]
    NotFound(DocumentId),
    #[error("Document rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
    #[error("Unsupported store URI: {0}")]
    UnsupportedUri(String),
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

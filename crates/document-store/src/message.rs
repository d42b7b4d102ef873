//! # Store Messages
//!
//! This module defines the messages exchanged between a [`CollectionHandle`](crate::CollectionHandle)
//! and the [`Collection`](crate::Collection) task that owns the documents.

use crate::document::Document;
use crate::error::StoreError;
use crate::id::DocumentId;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a collection.
///
/// The variants are the narrow document-store contract: insert, find-all, find-by-id,
/// partial update, delete, plus an `Action` variant for document-specific operations that
/// must read and write in one step.
///
/// This type is generic over `T: Document`; a menu-item payload can't be sent to an
/// order collection.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Insert {
        params: T::Create,
        respond_to: Response<T>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    FindById {
        id: DocumentId,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: DocumentId,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: DocumentId,
        respond_to: Response<T>,
    },
    Action {
        id: DocumentId,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

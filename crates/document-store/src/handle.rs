//! # Collection Handle
//!
//! This module defines the async handle used to talk to a running [`Collection`](crate::Collection).

use crate::document::Document;
use crate::error::StoreError;
use crate::id::DocumentId;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionHandle
///
/// A type-safe, async API for one collection. Every call is forwarded over a Tokio mpsc
/// channel and answered through a oneshot channel. The handle holds only a sender, so it is
/// cheap to clone and share across request handlers.
///
/// * `StoreError::Closed` – the collection task is gone.
/// * `StoreError::Dropped` – the task ended before answering.
pub struct CollectionHandle<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Derive would require `T: Clone` on the sender's payload type.
impl<T: Document> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionHandle<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Inserts a new document and returns it with its assigned id.
    pub async fn insert(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { params, respond_to })
            .await
    }

    /// Returns every document in insertion order.
    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAll { respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: DocumentId) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    /// Applies a partial update and returns the post-update document.
    pub async fn update(&self, id: DocumentId, patch: T::Patch) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    /// Removes a document and returns it.
    pub async fn delete(&self, id: DocumentId) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: DocumentId,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

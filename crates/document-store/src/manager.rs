//! # ResourceManager Trait
//!
//! Provides a common interface for resource-specific managers, adding default `list`, `get`
//! and `delete` methods built on top of a [`CollectionHandle`].
use crate::{CollectionHandle, Document, DocumentId, StoreError};
use async_trait::async_trait;

/// Trait for resource managers to inherit the standard read and delete operations.
///
/// A manager wraps a [`CollectionHandle`] and owns the lifecycle of one entity type. It
/// only has to say how store failures become its own error type; `list`, `get` and
/// `delete` come for free.
///
/// # Example
///
/// ```rust
/// use document_store::{Document, DocumentId, ResourceManager, StoreError, CollectionHandle, Timestamp};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Table { id: DocumentId, seats: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// enum TableError {
///     #[error("Table not found: {0}")]
///     NotFound(DocumentId),
///     #[error("Store error: {0}")]
///     Store(String),
/// }
///
/// impl Document for Table {
///     type Create = u32;
///     type Patch = u32;
///     type Action = std::convert::Infallible;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TableError;
///
///     fn id(&self) -> &DocumentId { &self.id }
///     fn from_create_params(id: DocumentId, seats: u32, _: Timestamp) -> Result<Self, TableError> {
///         Ok(Self { id, seats })
///     }
///     fn on_update(&mut self, seats: u32, _: Timestamp, _: &()) -> Result<(), TableError> {
///         self.seats = seats;
///         Ok(())
///     }
///     fn handle_action(&mut self, action: Self::Action, _: Timestamp, _: &()) -> Result<(), TableError> {
///         match action {}
///     }
/// }
///
/// struct TableManager { handle: CollectionHandle<Table> }
///
/// #[async_trait]
/// impl ResourceManager<Table> for TableManager {
///     type Error = TableError;
///
///     fn handle(&self) -> &CollectionHandle<Table> { &self.handle }
///
///     fn map_error(e: StoreError) -> TableError {
///         match e {
///             StoreError::NotFound(id) => TableError::NotFound(id),
///             other => TableError::Store(other.to_string()),
///         }
///     }
/// }
///
/// // list(), get() and delete() are provided automatically.
/// async fn usage(manager: TableManager, id: DocumentId) {
///     let _ = manager.list().await;
///     let _ = manager.get(id.clone()).await;
///     let _ = manager.delete(id).await;
/// }
/// ```
#[async_trait]
pub trait ResourceManager<T: Document>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner collection handle.
    fn handle(&self) -> &CollectionHandle<T>;

    /// Map store errors to the resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch every document in the store's natural order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.handle().find_all().await.map_err(Self::map_error)
    }

    /// Fetch a document by id. A missing document is a `NotFound` error.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: DocumentId) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.handle().find_by_id(id.clone()).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Err(Self::map_error(StoreError::NotFound(id))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Delete a document by id, returning what was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: DocumentId) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.handle().delete(id).await.map_err(Self::map_error)
    }
}

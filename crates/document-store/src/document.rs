//! # Document Trait
//!
//! The `Document` trait defines the contract every stored entity (menu item, order, …) must
//! implement to be kept in a generic [`Collection`](crate::Collection). It names the payload
//! types for creation, partial updates and custom actions, the runtime context injected into
//! the hooks, and the entity's own error type.
//!
//! Documents without custom actions use `std::convert::Infallible` as their `Action` and
//! match on it with an empty `match`.

use crate::id::DocumentId;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Wall-clock instant handed to every hook by the collection.
pub type Timestamp = DateTime<Utc>;

/// Trait that any stored entity must implement to be managed by a [`Collection`](crate::Collection).
///
/// # Architecture Note
/// The collection task owns the documents and drives these hooks one message at a time, so
/// a hook always sees the latest committed state of its document. Hooks run against a copy:
/// when a hook fails, the stored document is left untouched.
///
/// # Serialization
/// Documents are `Serialize + DeserializeOwned` so file-backed collections can snapshot
/// them. The same representation is what the HTTP layer returns to callers.
pub trait Document: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The data required to create a new document.
    type Create: Send + Sync + Debug;

    /// A partial update. Fields left out keep their stored value.
    type Patch: Send + Sync + Debug;

    /// Enum of document-specific operations (e.g. `ToggleStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context injected into the collection at `run()`.
    /// Use `()` if no settings are needed.
    type Context: Send + Sync;

    /// The error type for this document.
    ///
    /// One enum per document type, covering every hook. Resource managers downcast
    /// [`StoreError::Rejected`](crate::StoreError::Rejected) back into this type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier assigned at creation. Never changes afterwards.
    fn id(&self) -> &DocumentId;

    /// Build the full document from the assigned id and the creation payload.
    fn from_create_params(
        id: DocumentId,
        params: Self::Create,
        now: Timestamp,
    ) -> Result<Self, Self::Error>;

    /// Apply a partial update.
    fn on_update(
        &mut self,
        patch: Self::Patch,
        now: Timestamp,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom document-specific action.
    fn handle_action(
        &mut self,
        action: Self::Action,
        now: Timestamp,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

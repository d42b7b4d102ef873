//! # Document Store
//!
//! This crate provides a small, type-safe document store built on Tokio tasks. Each
//! collection of documents is owned by one task; callers talk to it through a cloneable
//! handle. The contract is deliberately narrow: insert, find-all, find-by-id, partial
//! update, delete, plus document-specific actions that read and write in one step.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Document Layer** ([`Document`]) - your entity, its payloads and its rules
//! 2. **Runtime Layer** ([`Collection`]) - request processing, ordering, persistence
//! 3. **Interface Layer** ([`CollectionHandle`], [`ResourceManager`]) - async, typed access
//!
//! ## Backends
//!
//! A [`StoreUri`] connection string picks where documents live:
//!
//! - `memory://` – documents live in the collection task only.
//! - `file://<dir>` – each collection is loaded from `<dir>/<name>.json` on open and
//!   rewritten after every successful mutation.
//!
//! ## Concurrency Model
//!
//! - Each collection runs in its own Tokio task
//! - Requests are processed **sequentially** within a collection (no locks needed)
//! - Different collections run in parallel
//! - An [`Document::Action`] is applied inside the task, so it is atomic with respect to
//!   every other request on the same collection
//!
//! ## Example
//!
//! ```rust
//! use document_store::{Collection, Document, DocumentId, Timestamp};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Counter { id: DocumentId, value: u32 }
//!
//! #[derive(Debug)]
//! enum CounterAction { Increment }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! impl Document for Counter {
//!     type Create = u32;
//!     type Patch = u32;
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn id(&self) -> &DocumentId { &self.id }
//!     fn from_create_params(id: DocumentId, value: u32, _: Timestamp) -> Result<Self, CounterError> {
//!         Ok(Self { id, value })
//!     }
//!     fn on_update(&mut self, value: u32, _: Timestamp, _: &()) -> Result<(), CounterError> {
//!         self.value = value;
//!         Ok(())
//!     }
//!     fn handle_action(&mut self, action: CounterAction, _: Timestamp, _: &()) -> Result<u32, CounterError> {
//!         match action {
//!             CounterAction::Increment => {
//!                 self.value += 1;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (collection, handle) = Collection::<Counter>::new("counters", 8);
//!     tokio::spawn(collection.run(()));
//!
//!     let counter = handle.insert(41).await.unwrap();
//!     let value = handle.perform_action(counter.id.clone(), CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockCollection`, which hands out a real handle answered
//! from scripted expectations.

pub mod collection;
pub mod document;
pub mod error;
pub mod handle;
pub mod id;
pub mod manager;
pub mod message;
pub mod mock;
pub mod uri;

// Re-export core types for convenience
pub use collection::Collection;
pub use document::{Document, Timestamp};
pub use error::StoreError;
pub use handle::CollectionHandle;
pub use id::DocumentId;
pub use manager::ResourceManager;
pub use message::{Response, StoreRequest};
pub use uri::StoreUri;

//! Typed, per-resource wrappers around [`CollectionHandle`](document_store::CollectionHandle).
//!
//! `list`, `get` and `delete` come from [`ResourceManager`](document_store::ResourceManager);
//! each manager adds the operations specific to its resource.

pub mod menu_manager;
pub mod order_manager;

pub use menu_manager::*;
pub use order_manager::*;

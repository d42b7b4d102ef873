//! Plain data types implementing the [`Document`](document_store::Document) trait, plus the
//! payloads accepted at the API boundary.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;

//! Menu item resource logic, including the availability toggle.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::managers::MenuManager;
use crate::model::MenuItem;
use document_store::{Collection, StoreError, StoreUri};

/// Name of the menu collection, also the snapshot file stem for `file://` stores.
pub const COLLECTION: &str = "menu_items";

/// Creates an in-memory menu collection and its manager.
pub fn new(buffer: usize) -> (Collection<MenuItem>, MenuManager) {
    let (collection, handle) = Collection::new(COLLECTION, buffer);
    (collection, MenuManager::new(handle))
}

/// Opens the menu collection on the given store.
pub async fn open(
    uri: &StoreUri,
    buffer: usize,
) -> Result<(Collection<MenuItem>, MenuManager), StoreError> {
    let (collection, handle) = Collection::open(COLLECTION, uri, buffer).await?;
    Ok((collection, MenuManager::new(handle)))
}

//! Order resource logic, including the status transition policy.

pub mod entity;
pub mod error;
mod policy;

pub use error::*;
pub use policy::*;

use crate::managers::OrderManager;
use crate::model::Order;
use document_store::{Collection, StoreError, StoreUri};

/// Name of the order collection, also the snapshot file stem for `file://` stores.
pub const COLLECTION: &str = "orders";

/// Creates an in-memory order collection and its manager.
///
/// The collection still needs a [`TransitionPolicy`] as its run context.
pub fn new(buffer: usize) -> (Collection<Order>, OrderManager) {
    let (collection, handle) = Collection::new(COLLECTION, buffer);
    (collection, OrderManager::new(handle))
}

/// Opens the order collection on the given store.
pub async fn open(
    uri: &StoreUri,
    buffer: usize,
) -> Result<(Collection<Order>, OrderManager), StoreError> {
    let (collection, handle) = Collection::open(COLLECTION, uri, buffer).await?;
    Ok((collection, OrderManager::new(handle)))
}

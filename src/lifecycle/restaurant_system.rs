use crate::config::Config;
use crate::managers::{MenuManager, OrderManager};
use crate::orders::TransitionPolicy;
use document_store::StoreError;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running collections and the managers that talk to them.
///
/// The menu collection runs with no context; the order collection runs with the
/// configured [`TransitionPolicy`].
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::open(&config).await?;
/// let item = system.menu.create(params).await?;
///
/// // Every other manager clone must be dropped first.
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub menu: MenuManager,
    pub orders: OrderManager,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts both collections in memory. Must be called inside a Tokio runtime.
    pub fn in_memory(policy: TransitionPolicy, buffer: usize) -> Self {
        let (menu_collection, menu) = crate::menu_items::new(buffer);
        let (order_collection, orders) = crate::orders::new(buffer);

        let handles = vec![
            tokio::spawn(menu_collection.run(())),
            tokio::spawn(order_collection.run(policy)),
        ];

        Self { menu, orders, handles }
    }

    /// Starts both collections on the configured store, loading any saved documents.
    pub async fn open(config: &Config) -> Result<Self, StoreError> {
        info!(store = %config.store_uri, policy = ?config.order_transitions, "Opening collections");
        let (menu_collection, menu) =
            crate::menu_items::open(&config.store_uri, config.channel_capacity).await?;
        let (order_collection, orders) =
            crate::orders::open(&config.store_uri, config.channel_capacity).await?;

        let handles = vec![
            tokio::spawn(menu_collection.run(())),
            tokio::spawn(order_collection.run(config.order_transitions)),
        ];

        Ok(Self { menu, orders, handles })
    }

    /// Drops this system's managers and waits for every collection task to finish.
    ///
    /// A collection only stops once all handles to it are gone, so any clones handed out
    /// (for example to the HTTP router) must be dropped before awaiting this.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down collections...");
        drop(self.menu);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Collection task failed");
                return Err(e);
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}

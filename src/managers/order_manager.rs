use crate::model::{Order, OrderCreate, OrderPatch, OrderStatus};
use crate::orders::OrderError;
use async_trait::async_trait;
use document_store::{CollectionHandle, DocumentId, ResourceManager, StoreError};
use tracing::{debug, info, instrument};

/// Manager for the order collection.
#[derive(Clone)]
pub struct OrderManager {
    handle: CollectionHandle<Order>,
}

impl OrderManager {
    pub fn new(handle: CollectionHandle<Order>) -> Self {
        Self { handle }
    }

    #[instrument(skip(self, params))]
    pub async fn create(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create called");
        let order = self.handle.insert(params).await.map_err(Self::map_error)?;
        info!(id = %order.id, display_id = %order.display_id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: DocumentId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .handle
            .update(id, OrderPatch { status })
            .await
            .map_err(Self::map_error)?;
        info!(id = %order.id, %status, "Order status updated");
        Ok(order)
    }
}

#[async_trait]
impl ResourceManager<Order> for OrderManager {
    type Error = OrderError;

    fn handle(&self) -> &CollectionHandle<Order> {
        &self.handle
    }

    fn map_error(e: StoreError) -> OrderError {
        OrderError::from(e)
    }

    /// All orders, newest `createdAt` first. Orders created in the same instant keep
    /// newest-inserted first.
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.handle.find_all().await.map_err(Self::map_error)?;
        orders.reverse();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use chrono::{Duration, Utc};
    use document_store::mock::MockCollection;
    use document_store::Timestamp;

    fn order(id: &str, created_at: Timestamp) -> Order {
        Order {
            id: DocumentId::from(id),
            display_id: id.to_uppercase(),
            customer: Customer { name: "Ana".into() },
            items: vec![],
            total: 0.0,
            status: OrderStatus::New,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn list_sorts_newest_first() {
        let base = Utc::now();
        let mut mock = MockCollection::<Order>::new();
        // Stored in insertion order; o3 was backfilled with an older timestamp.
        mock.expect_find_all().return_ok(vec![
            order("o1", base),
            order("o2", base + Duration::seconds(10)),
            order("o3", base - Duration::seconds(10)),
            order("o4", base + Duration::seconds(10)),
        ]);

        let manager = OrderManager::new(mock.handle());
        let ids: Vec<String> = manager
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id.to_string())
            .collect();
        assert_eq!(ids, ["o4", "o2", "o1", "o3"]);
        mock.verify();
    }

    #[tokio::test]
    async fn rejected_transition_keeps_its_error() {
        let mut mock = MockCollection::<Order>::new();
        mock.expect_update(DocumentId::from("o1"))
            .return_err(StoreError::Rejected(Box::new(OrderError::InvalidTransition {
                from: OrderStatus::Ready,
                to: OrderStatus::New,
            })));

        let manager = OrderManager::new(mock.handle());
        let result = manager
            .update_status(DocumentId::from("o1"), OrderStatus::New)
            .await;
        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Ready,
                to: OrderStatus::New
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn dropped_response_maps_to_store_error() {
        let mut mock = MockCollection::<Order>::new();
        mock.expect_delete(DocumentId::from("o1")).return_err(StoreError::Dropped);

        let manager = OrderManager::new(mock.handle());
        assert!(matches!(
            manager.delete(DocumentId::from("o1")).await,
            Err(OrderError::Store(_))
        ));
        mock.verify();
    }
}

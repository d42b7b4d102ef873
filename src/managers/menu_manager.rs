use crate::menu_items::{MenuError, MenuItemAction};
use crate::model::{MenuItem, MenuItemCreate, MenuItemPatch};
use async_trait::async_trait;
use document_store::{CollectionHandle, DocumentId, ResourceManager, StoreError};
use tracing::{debug, info, instrument};

/// Manager for the menu collection.
#[derive(Clone)]
pub struct MenuManager {
    handle: CollectionHandle<MenuItem>,
}

impl MenuManager {
    pub fn new(handle: CollectionHandle<MenuItem>) -> Self {
        Self { handle }
    }

    #[instrument(skip(self, params))]
    pub async fn create(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!(?params, "create called");
        let item = self.handle.insert(params).await.map_err(Self::map_error)?;
        info!(id = %item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: DocumentId, patch: MenuItemPatch) -> Result<MenuItem, MenuError> {
        debug!(?patch, "update called");
        self.handle.update(id, patch).await.map_err(Self::map_error)
    }

    /// Flips the item between `available` and `unavailable` and returns the stored result.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: DocumentId) -> Result<MenuItem, MenuError> {
        let item = self
            .handle
            .perform_action(id, MenuItemAction::ToggleStatus)
            .await
            .map_err(Self::map_error)?;
        info!(id = %item.id, status = ?item.status, "Menu item toggled");
        Ok(item)
    }
}

#[async_trait]
impl ResourceManager<MenuItem> for MenuManager {
    type Error = MenuError;

    fn handle(&self) -> &CollectionHandle<MenuItem> {
        &self.handle
    }

    fn map_error(e: StoreError) -> MenuError {
        MenuError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuStatus;
    use document_store::mock::MockCollection;

    fn item(id: &str, status: MenuStatus) -> MenuItem {
        MenuItem {
            id: DocumentId::from(id),
            name: "Arepa".into(),
            price: 5.0,
            category: "snack".into(),
            status,
        }
    }

    #[tokio::test]
    async fn toggle_returns_the_updated_item() {
        let mut mock = MockCollection::<MenuItem>::new();
        mock.expect_action(DocumentId::from("m1"))
            .return_ok(item("m1", MenuStatus::Unavailable));

        let manager = MenuManager::new(mock.handle());
        let toggled = manager.toggle_availability(DocumentId::from("m1")).await.unwrap();
        assert_eq!(toggled.status, MenuStatus::Unavailable);
        mock.verify();
    }

    #[tokio::test]
    async fn missing_item_maps_to_not_found() {
        let mut mock = MockCollection::<MenuItem>::new();
        mock.expect_find_by_id(DocumentId::from("ghost")).return_ok(None);
        mock.expect_delete(DocumentId::from("ghost"))
            .return_err(StoreError::NotFound(DocumentId::from("ghost")));

        let manager = MenuManager::new(mock.handle());
        assert_eq!(
            manager.get(DocumentId::from("ghost")).await,
            Err(MenuError::NotFound(DocumentId::from("ghost")))
        );
        assert_eq!(
            manager.delete(DocumentId::from("ghost")).await,
            Err(MenuError::NotFound(DocumentId::from("ghost")))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn rejected_documents_surface_their_own_error() {
        let mut mock = MockCollection::<MenuItem>::new();
        mock.expect_insert().return_err(StoreError::Rejected(Box::new(
            MenuError::Validation("name is required".into()),
        )));

        let manager = MenuManager::new(mock.handle());
        let result = manager
            .create(MenuItemCreate {
                name: String::new(),
                price: 1.0,
                category: "snack".into(),
                status: None,
            })
            .await;
        assert_eq!(result, Err(MenuError::Validation("name is required".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn closed_store_maps_to_store_error() {
        let mut mock = MockCollection::<MenuItem>::new();
        mock.expect_find_all().return_err(StoreError::Closed);

        let manager = MenuManager::new(mock.handle());
        assert!(matches!(manager.list().await, Err(MenuError::Store(_))));
        mock.verify();
    }
}

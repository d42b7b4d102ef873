//! Document trait implementation for [`MenuItem`].
//!
//! Both creation and updates require a non-empty `name` and `category`; `price` is
//! stored as given.

use super::actions::MenuItemAction;
use super::error::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemPatch};
use document_store::{Document, DocumentId, Timestamp};

fn require(field: &str, value: &str) -> Result<(), MenuError> {
    if value.is_empty() {
        return Err(MenuError::Validation(format!("{field} is required")));
    }
    Ok(())
}

impl Document for MenuItem {
    type Create = MenuItemCreate;
    type Patch = MenuItemPatch;
    type Action = MenuItemAction;
    type ActionResult = MenuItem;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Creates a menu item. A missing status means `available`.
    fn from_create_params(
        id: DocumentId,
        params: MenuItemCreate,
        _now: Timestamp,
    ) -> Result<Self, MenuError> {
        require("name", &params.name)?;
        require("category", &params.category)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            status: params.status.unwrap_or_default(),
        })
    }

    /// Merges the supplied fields; absent fields keep their stored value.
    fn on_update(&mut self, patch: MenuItemPatch, _now: Timestamp, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = &patch.name {
            require("name", name)?;
        }
        if let Some(category) = &patch.category {
            require("category", category)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        Ok(())
    }

    /// # Actions
    /// - `ToggleStatus`: flips the status and returns the updated item
    fn handle_action(&mut self, action: MenuItemAction, _now: Timestamp, _ctx: &()) -> Result<MenuItem, MenuError> {
        match action {
            MenuItemAction::ToggleStatus => {
                self.status = self.status.toggled();
                Ok(self.clone())
            }
        }
    }
}

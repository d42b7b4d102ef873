use document_store::DocumentId;
use serde::{Deserialize, Serialize};

/// Represents a dish or drink on the menu.
///
/// # Document Store
/// This struct implements the [`Document`](document_store::Document) trait,
/// allowing it to be kept in a [`Collection`](document_store::Collection).
///
/// See [`impl Document for MenuItem`](#impl-Document-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemPatch`])
/// - Custom actions ([`MenuItemAction`](crate::menu_items::MenuItemAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: DocumentId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub status: MenuStatus,
}

/// Whether the kitchen can currently serve an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuStatus {
    #[default]
    Available,
    Unavailable,
}

impl MenuStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            MenuStatus::Available => MenuStatus::Unavailable,
            MenuStatus::Unavailable => MenuStatus::Available,
        }
    }
}

/// Payload for creating a new menu item.
///
/// `name`, `price` and `category` are required; a missing `status` means `available`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub status: Option<MenuStatus>,
}

/// Partial update for a menu item. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub status: Option<MenuStatus>,
}

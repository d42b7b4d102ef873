use document_store::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents a customer order on the kitchen board.
///
/// # Document Store
/// This struct implements the [`Document`](document_store::Document) trait,
/// allowing it to be kept in a [`Collection`](document_store::Collection).
///
/// See [`impl Document for Order`](#impl-Document-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderPatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: DocumentId,
    pub display_id: String,
    pub customer: Customer,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

/// A denormalized snapshot of what was ordered; not a reference to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

/// Kitchen progress of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    New,
    InProgress,
    Ready,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::New => "new",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Ready => "ready",
        })
    }
}

/// Payload for creating a new order.
///
/// `displayId`, `customer.name` and `total` are required; `items` may be omitted (empty)
/// and a missing `status` means `new`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub display_id: String,
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub total: f64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// The only update an order accepts after creation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrderPatch {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let patch: OrderPatch = serde_json::from_str(r#"{"status":"ready"}"#).unwrap();
        assert_eq!(patch.status, OrderStatus::Ready);
        assert!(serde_json::from_str::<OrderPatch>(r#"{"status":"cooking"}"#).is_err());
    }

    #[test]
    fn create_payload_defaults_items_and_status() {
        let params: OrderCreate = serde_json::from_str(
            r#"{"displayId":"A1","customer":{"name":"Ana"},"total":10}"#,
        )
        .unwrap();
        assert_eq!(params.display_id, "A1");
        assert!(params.items.is_empty());
        assert!(params.status.is_none());
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let result = serde_json::from_str::<OrderCreate>(
            r#"{"displayId":"A1","customer":{"name":"Ana"},"items":[{"name":"Arepa","quantity":1.5}],"total":10}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_payload_requires_customer_name() {
        let result = serde_json::from_str::<OrderCreate>(
            r#"{"displayId":"A1","customer":{},"items":[],"total":10}"#,
        );
        assert!(result.is_err());
    }
}

//! Document trait implementation for [`Order`].
//!
//! Orders are created whole and afterwards only change status. The collection's
//! [`TransitionPolicy`] decides which status changes are accepted.

use super::error::OrderError;
use super::policy::TransitionPolicy;
use crate::model::{Order, OrderCreate, OrderPatch};
use document_store::{Document, DocumentId, Timestamp};
use std::convert::Infallible;

impl Document for Order {
    type Create = OrderCreate;
    type Patch = OrderPatch;
    type Action = Infallible;
    type ActionResult = ();
    type Context = TransitionPolicy;
    type Error = OrderError;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Creates an order stamped with `now` for both timestamps.
    ///
    /// `displayId` and `customer.name` must be non-empty. A missing status means `new`.
    fn from_create_params(id: DocumentId, params: OrderCreate, now: Timestamp) -> Result<Self, OrderError> {
        if params.display_id.is_empty() {
            return Err(OrderError::Validation("displayId is required".into()));
        }
        if params.customer.name.is_empty() {
            return Err(OrderError::Validation("customer.name is required".into()));
        }
        if let Some(index) = params.items.iter().position(|line| line.name.is_empty()) {
            return Err(OrderError::Validation(format!("items[{index}].name is required")));
        }

        Ok(Self {
            id,
            display_id: params.display_id,
            customer: params.customer,
            items: params.items,
            total: params.total,
            status: params.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Sets the new status and refreshes `updated_at`.
    fn on_update(&mut self, patch: OrderPatch, now: Timestamp, policy: &TransitionPolicy) -> Result<(), OrderError> {
        if !policy.allows(self.status, patch.status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: patch.status,
            });
        }
        self.status = patch.status;
        self.updated_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible, _now: Timestamp, _ctx: &TransitionPolicy) -> Result<(), OrderError> {
        match action {}
    }
}

//! Custom actions for menu items.
//!
//! Handled by [`Document::handle_action`](document_store::Document::handle_action) inside
//! the collection task, so a toggle reads and writes the status in one step.
//!
//! See [`impl Document for MenuItem`](crate::model::MenuItem#impl-Document-for-MenuItem).

/// Custom actions for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemAction {
    /// Flips `available` to `unavailable` and back.
    ToggleStatus,
}

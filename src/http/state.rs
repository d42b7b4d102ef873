use crate::managers::{MenuManager, OrderManager};

/// Managers shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuManager,
    pub orders: OrderManager,
}

impl AppState {
    pub fn new(menu: MenuManager, orders: OrderManager) -> Self {
        Self { menu, orders }
    }
}

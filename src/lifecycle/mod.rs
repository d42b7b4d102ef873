//! Startup, wiring and shutdown of the collection tasks.

mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::setup_tracing;

//! JSON-over-HTTP surface: routing, handlers and error mapping.

pub mod error;
pub mod handlers;
mod routes;
mod shutdown;
mod state;

pub use error::AppError;
pub use routes::router;
pub use state::AppState;

use crate::config::Config;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the listener and serves until Ctrl+C or SIGTERM.
///
/// The router (and with it every manager clone in `state`) is dropped when this returns.
pub async fn serve(config: &Config, state: AppState) -> std::io::Result<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
}

//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`).
//!
//! - Collection tasks log every request at `debug` and every mutation at `info`, tagged
//!   with `entity_type` (`MenuItem`, `Order`).
//! - Managers open a span per operation, so collection logs nest under the call that
//!   caused them.
//! - HTTP requests get a span from `tower_http::trace::TraceLayer`; failed requests log
//!   the mapped error at `warn` (client errors) or `error` (store failures).
//!
//! ```bash
//! RUST_LOG=debug restaurant-ops
//! RUST_LOG=restaurant_ops=debug,tower_http=debug restaurant-ops
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

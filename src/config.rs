//! Process configuration, read from flags or the matching environment variables.

use crate::orders::TransitionPolicy;
use clap::Parser;
use document_store::StoreUri;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Where documents live: `memory://` or `file://<dir>`.
    #[arg(long, env = "STORE_URI", default_value = "memory://")]
    pub store_uri: StoreUri,

    /// Which order status changes are accepted.
    #[arg(long, env = "ORDER_TRANSITIONS", value_enum, default_value_t = TransitionPolicy::Permissive)]
    pub order_transitions: TransitionPolicy,

    /// Pending requests each collection buffers before callers wait.
    #[arg(long, env = "CHANNEL_CAPACITY", default_value_t = 32)]
    pub channel_capacity: usize,

    /// How long to wait for collections to drain after the listener stops.
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["restaurant-ops"]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.store_uri, StoreUri::Memory);
        assert_eq!(config.order_transitions, TransitionPolicy::Permissive);
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.address(), "0.0.0.0:4000");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "restaurant-ops",
            "--port",
            "8080",
            "--store-uri",
            "file:///var/lib/restaurant",
            "--order-transitions",
            "forward-only",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.store_uri, StoreUri::File(PathBuf::from("/var/lib/restaurant")));
        assert_eq!(config.order_transitions, TransitionPolicy::ForwardOnly);
    }

    #[test]
    fn dotenv_file_feeds_env_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SHUTDOWN_TIMEOUT_SECS=3\n").unwrap();

        dotenv::from_path(&path).unwrap();
        let config = Config::try_parse_from(["restaurant-ops"]).unwrap();
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn unsupported_store_is_rejected() {
        let result = Config::try_parse_from(["restaurant-ops", "--store-uri", "mongodb://localhost"]);
        assert!(result.is_err());
    }
}

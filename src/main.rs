use clap::Parser;
use restaurant_ops::config::Config;
use restaurant_ops::http::{self, AppState};
use restaurant_ops::lifecycle::{setup_tracing, RestaurantSystem};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    setup_tracing();
    let config = Config::parse();
    info!(?config, "Starting restaurant-ops");

    let system = RestaurantSystem::open(&config).await?;
    let state = AppState::new(system.menu.clone(), system.orders.clone());

    http::serve(&config, state).await?;

    match tokio::time::timeout(config.shutdown_timeout(), system.shutdown()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Collections did not stop cleanly"),
        Err(_) => warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Timed out waiting for collections to stop"
        ),
    }
    Ok(())
}

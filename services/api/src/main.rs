use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use api::{AppState, config::ServerConfig, create_router, shutdown, telemetry};
use common::UserRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    telemetry::init_tracing(&config.log_level)?;

    info!("Starting users API service");

    let app_state = AppState::new(UserRegistry::new());

    // Start the web server
    let app = create_router(app_state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Users API service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Users API service stopped");
    Ok(())
}

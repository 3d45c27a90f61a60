use user_registry::config::Config;
use user_registry::http::{AppState, build_router};
use user_registry::lifecycle::{UserSystem, setup_tracing};

use std::error::Error;

use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    setup_tracing(&config.logging.level);
    info!("Starting user-registry v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let system = UserSystem::from_config(&config.users);
    let app = build_router(AppState::new(system.user_client.clone()));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
        })
        .await?;

    system.shutdown().await?;
    Ok(())
}

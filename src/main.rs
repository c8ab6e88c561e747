use std::time::Duration;

use anyhow::Result;
use tracing::info;

use github_relay::config::Config;
use github_relay::{router, startup};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (reads .env first)
    let config = Config::from_env()?;

    // Initialize tracing
    startup::init_tracing(config.log_format);
    info!("Loaded configuration: {:?}", config);

    let app_state = startup::initialize_app(&config)?;
    let app = router::build_router(app_state, Duration::from_secs(config.request_timeout));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;
    info!("Starting GitHub relay on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}

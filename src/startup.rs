//! Application startup and initialization logic

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::{Config, LogFormat};
use crate::services::{RelayService, TelegramNotifier};
use crate::utils::HmacSha256Verifier;

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "github_relay=debug,tower_http=debug".into());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Wire the verifier, dispatcher and notifier into the AppState.
pub fn initialize_app(config: &Config) -> Result<AppState> {
    let verifier = Arc::new(HmacSha256Verifier::new(config.webhook_secret.clone()));
    info!("✅ Webhook signature verifier initialized");

    let notifier = TelegramNotifier::new(&config.telegram)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Telegram notifier: {}", e))?;
    info!(
        api_url = %config.telegram.api_url,
        chat_id = %config.telegram.chat_id,
        thread_id = %config.telegram.thread_id,
        "✅ Telegram notifier initialized"
    );

    Ok(AppState {
        environment: config.environment.clone(),
        relay: RelayService::new(verifier, Arc::new(notifier)),
    })
}

/// Wait for shutdown signal.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}

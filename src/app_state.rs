//! Application state shared across all handlers.

use crate::services::RelayService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deployment environment name, reported by the health check
    pub environment: String,
    /// Webhook verification and notification pipeline
    pub relay: RelayService,
}

impl axum::extract::FromRef<AppState> for RelayService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}

//! Router configuration module
//!
//! Only `POST /github` reaches the relay. Every other path is answered by the
//! fallback before any signature check runs.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::constants::webhook;
use crate::handlers::{health_check, receive_github_webhook, unknown_route};
use crate::middleware::request_logger_middleware;

/// Build the application router.
pub fn build_router(app_state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            webhook::PATH,
            post(receive_github_webhook).layer(DefaultBodyLimit::max(webhook::MAX_BODY_BYTES)),
        )
        .route("/health", get(health_check))
        .fallback(unknown_route)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(app_state)
}

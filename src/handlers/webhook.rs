use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::HeaderMap,
};
use tracing::info;

use crate::constants::webhook::{DELIVERY_HEADER, EVENT_HEADER, SIGNATURE_HEADER};
use crate::error::{ApiError, Result};
use crate::services::RelayService;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Receive a GitHub webhook delivery
/// POST /github
pub async fn receive_github_webhook(
    State(relay): State<RelayService>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String> {
    info!(
        event = header_str(&headers, EVENT_HEADER).unwrap_or("unknown"),
        delivery = header_str(&headers, DELIVERY_HEADER).unwrap_or("unknown"),
        bytes = body.len(),
        "Received webhook delivery"
    );

    // A missing header is an empty signature, which never verifies
    let signature = header_str(&headers, SIGNATURE_HEADER).unwrap_or_default();

    relay.relay(signature, &body).await
}

/// Fallback for every path other than the webhook endpoint
pub async fn unknown_route(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::constants::server::REQUEST_ID_HEADER;

/// Longest caller-supplied request id that is reused as-is
const MAX_REQUEST_ID_LEN: usize = 64;

/// Take the caller's `X-Request-ID` when it is usable, otherwise mint one.
fn request_id_for(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Request logging middleware that logs every request and stamps the response
/// with an `X-Request-ID` header.
///
/// The rest of the request runs inside a `request` span carrying the same id,
/// so error logs emitted by handlers line up with the header.
/// Headers are never logged: they carry the webhook signature.
pub async fn request_logger_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_for(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    debug!(%request_id, %method, %path, "Incoming request");

    let span = info_span!("request", %request_id);
    let mut response = next.run(request).instrument(span).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(%request_id, %method, %path, %status, duration_ms, "Request failed with server error");
    } else if status.is_client_error() {
        warn!(%request_id, %method, %path, %status, duration_ms, "Request rejected");
    } else if status == StatusCode::OK {
        info!(%request_id, %method, %path, %status, duration_ms, "Request completed successfully");
    } else {
        debug!(%request_id, %method, %path, %status, duration_ms, "Request completed");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

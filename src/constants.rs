//! Application constants.
//!
//! Wire-level names shared between the router, handlers and notifier.

/// Inbound GitHub webhook
pub mod webhook {
    /// The only path deliveries are accepted on
    pub const PATH: &str = "/github";

    /// HMAC-SHA256 signature of the raw body, `sha256=<hex>`
    pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

    /// Event name, e.g. `pull_request` or `release`
    pub const EVENT_HEADER: &str = "X-GitHub-Event";

    /// Unique delivery GUID
    pub const DELIVERY_HEADER: &str = "X-GitHub-Delivery";

    /// GitHub caps webhook payloads at 25 MB
    pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
}

/// Outbound Telegram messages
pub mod telegram {
    /// Marker prepended to every message
    pub const MESSAGE_PREFIX: &str = "🤖: ";

    pub const PARSE_MODE: &str = "Markdown";
}

/// HTTP server
pub mod server {
    /// Request / response header carrying the per-request id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

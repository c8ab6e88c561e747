// HTTP handlers
// Webhook intake and health check

pub mod health;
pub mod webhook;

pub use health::health_check;
pub use webhook::{receive_github_webhook, unknown_route};

use async_trait::async_trait;

use crate::error::ApiError;

/// Delivers a rendered message to the chat platform.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), ApiError>;
}

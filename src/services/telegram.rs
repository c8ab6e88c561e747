use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{SecretString, TelegramConfig};
use crate::constants::telegram::{MESSAGE_PREFIX, PARSE_MODE};
use crate::error::ApiError;
use crate::services::notifier::Notifier;
use url::form_urlencoded;

/// Telegram Bot API `sendMessage` client
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: SecretString,
    chat_id: String,
    thread_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
            thread_id: config.thread_id.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token.expose())
    }

    /// Form-encoded body for `sendMessage`, fields in a fixed order.
    pub fn form_body(&self, message: &str) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("chat_id", &self.chat_id)
            .append_pair("text", &format!("{}{}", MESSAGE_PREFIX, message))
            .append_pair("message_thread_id", &self.thread_id)
            .append_pair("parse_mode", PARSE_MODE)
            .append_pair("disable_web_page_preview", "true")
            .finish()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(self.form_body(message))
            .send()
            .await
            // The request URL carries the bot token
            .map_err(|e| ApiError::Notifier(format!("sendMessage request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Telegram rejected sendMessage");
            return Err(ApiError::Notifier(format!(
                "sendMessage returned {}: {}",
                status, body
            )));
        }

        info!(chat_id = %self.chat_id, thread_id = %self.thread_id, "Telegram message sent");
        Ok(())
    }
}

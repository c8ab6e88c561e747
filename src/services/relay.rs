use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{ApiError, Result};
use crate::models::WebhookPayload;
use crate::services::dispatcher::{Dispatch, EventDispatcher};
use crate::services::notifier::Notifier;
use crate::utils::SignatureVerifier;

/// Verify → dispatch → notify for one webhook delivery.
///
/// Holds no mutable state; clones share the verifier and notifier.
#[derive(Clone)]
pub struct RelayService {
    verifier: Arc<dyn SignatureVerifier>,
    dispatcher: EventDispatcher,
    notifier: Arc<dyn Notifier>,
}

impl RelayService {
    pub fn new(verifier: Arc<dyn SignatureVerifier>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            verifier,
            dispatcher: EventDispatcher::new(),
            notifier,
        }
    }

    /// Handle one delivery and return the plain-text acknowledgement.
    ///
    /// `signature` is the raw `X-Hub-Signature-256` value (empty when the
    /// header is absent) and `body` the exact bytes received. A notifier
    /// failure is logged and does not change the acknowledgement.
    pub async fn relay(&self, signature: &str, body: &[u8]) -> Result<String> {
        if !self.verifier.verify(signature, body) {
            warn!("Webhook validation failed");
            return Err(ApiError::SignatureInvalid);
        }
        info!("Webhook validation success");

        let payload = WebhookPayload::parse(body).map_err(|e| ApiError::malformed(format!("body: {}", e)))?;

        let dispatch = self.dispatcher.dispatch(&payload)?;

        match &dispatch {
            Dispatch::Notify { kind, message } => {
                if let Err(e) = self.notifier.notify(message).await {
                    error!(kind = ?kind, error = %e, "Failed to deliver notification");
                } else {
                    info!(kind = ?kind, "Notification delivered");
                }
            }
            Dispatch::Ignored { action } => {
                info!(action = %action, "Ignoring webhook action");
            }
        }

        Ok(dispatch.response_text())
    }
}

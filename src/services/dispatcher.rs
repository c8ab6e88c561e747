use tracing::debug;

use crate::error::Result;
use crate::models::{Action, WebhookPayload};
use crate::services::messages::{
    PullRequestClosedNotice, PullRequestOpenedNotice, ReleaseNotice,
};

/// Which notification a delivery produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ReleasePublished,
    PullRequestOpened,
    PullRequestClosed,
}

impl NotificationKind {
    /// Prefix used when echoing the message back to the webhook sender
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::ReleasePublished => "Published",
            NotificationKind::PullRequestOpened => "Opened",
            NotificationKind::PullRequestClosed => "Closed",
        }
    }
}

/// Outcome of routing one verified delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Forward `message` to the chat
    Notify {
        kind: NotificationKind,
        message: String,
    },
    /// Acknowledge without notifying
    Ignored { action: String },
}

impl Dispatch {
    pub fn response_text(&self) -> String {
        match self {
            Dispatch::Notify { kind, message } => format!("{}: {}", kind.label(), message),
            Dispatch::Ignored { action } => format!("Ignored action: {}", action),
        }
    }
}

/// Reported in place of the action for deliveries without one
pub const NO_ACTION: &str = "none";

/// Routes a payload by its `action` to exactly one message builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventDispatcher;

impl EventDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, payload: &WebhookPayload) -> Result<Dispatch> {
        // ping and push deliveries carry no action
        let Some(action) = payload.action.as_deref().map(Action::from) else {
            debug!("Delivery has no action");
            return Ok(Dispatch::Ignored {
                action: NO_ACTION.to_string(),
            });
        };

        debug!(action = %action, "Dispatching webhook action");

        let dispatch = match action {
            Action::Published => Dispatch::Notify {
                kind: NotificationKind::ReleasePublished,
                message: ReleaseNotice::from_payload(payload)?.render(),
            },
            Action::Opened => Dispatch::Notify {
                kind: NotificationKind::PullRequestOpened,
                message: PullRequestOpenedNotice::from_payload(payload)?.render(),
            },
            Action::Closed => Dispatch::Notify {
                kind: NotificationKind::PullRequestClosed,
                message: PullRequestClosedNotice::from_payload(payload)?.render(),
            },
            Action::Other(action) => Dispatch::Ignored { action },
        };

        Ok(dispatch)
    }
}

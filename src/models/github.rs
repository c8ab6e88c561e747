//! GitHub webhook payload models
//!
//! Every sub-record is optional here. Which fields must be present depends on
//! the action, and that is checked by the dispatcher rather than by serde, so
//! deliveries for actions we ignore never fail to parse.

use serde::Deserialize;
use std::fmt;

/// Webhook action discriminant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A release was published
    Published,
    /// A pull request was opened
    Opened,
    /// A pull request was closed (merged or not)
    Closed,
    /// Any action this relay does not forward
    Other(String),
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        match value {
            "published" => Action::Published,
            "opened" => Action::Opened,
            "closed" => Action::Closed,
            other => Action::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Published => write!(f, "published"),
            Action::Opened => write!(f, "opened"),
            Action::Closed => write!(f, "closed"),
            Action::Other(action) => write!(f, "{}", action),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    pub action: Option<String>,
    pub release: Option<Release>,
    pub pull_request: Option<PullRequest>,
    pub repository: Option<Repository>,
    pub sender: Option<User>,
}

impl WebhookPayload {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    pub html_url: Option<String>,
    pub tag_name: Option<String>,
    pub prerelease: Option<bool>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    pub name: Option<String>,
    pub browser_download_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    pub name: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    pub html_url: Option<String>,
    pub title: Option<String>,
    pub user: Option<User>,
    pub number: Option<u64>,
    pub commits: Option<u64>,
    pub changed_files: Option<u64>,
    pub additions: Option<u64>,
    pub deletions: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: Option<String>,
    pub html_url: Option<String>,
}

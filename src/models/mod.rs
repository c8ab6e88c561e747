// Data models
// Inbound webhook payloads

pub mod github;

pub use github::{Action, Asset, PullRequest, Release, Repository, User, WebhookPayload};

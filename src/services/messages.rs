//! Telegram message builders
//!
//! Each notice is first validated out of a [`WebhookPayload`] (every field the
//! template needs must be present, otherwise a `MalformedPayload` error names
//! the missing field) and then rendered as Telegram Markdown.
//!
//! Pull request titles go out percent-encoded (`encodeURIComponent` rules).
//! Form encoding of the whole text happens later, in the notifier.

use std::fmt::Write;

use crate::error::{ApiError, Result};
use crate::models::{PullRequest, Repository, User, WebhookPayload};
use crate::utils::encode_uri_component;

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T> {
    value.clone().ok_or_else(|| ApiError::malformed(field))
}

fn required_ref<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ApiError::malformed(field))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    fn markdown(&self) -> String {
        format!("[{}]({})", self.text, self.url)
    }
}

fn repository_link(repository: &Option<Repository>) -> Result<Link> {
    let repository = required_ref(repository, "repository")?;
    Ok(Link {
        text: required(&repository.name, "repository.name")?,
        url: required(&repository.html_url, "repository.html_url")?,
    })
}

fn user_link(user: &Option<User>, path: &str) -> Result<Link> {
    let user = required_ref(user, path)?;
    Ok(Link {
        text: required(&user.login, &format!("{path}.login"))?,
        url: required(&user.html_url, &format!("{path}.html_url"))?,
    })
}

fn pull_request_link(pr: &PullRequest) -> Result<Link> {
    let number = required(&pr.number, "pull_request.number")?;
    Ok(Link {
        text: format!("#{}", number),
        url: required(&pr.html_url, "pull_request.html_url")?,
    })
}

/// A published release and its downloadable assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotice {
    pub repository: Link,
    pub release: Link,
    pub prerelease: bool,
    pub assets: Vec<Link>,
}

impl ReleaseNotice {
    pub fn from_payload(payload: &WebhookPayload) -> Result<Self> {
        let repository = repository_link(&payload.repository)?;
        let release = required_ref(&payload.release, "release")?;

        let assets = release
            .assets
            .iter()
            .enumerate()
            .map(|(i, asset)| {
                Ok(Link {
                    text: required(&asset.name, &format!("release.assets[{i}].name"))?,
                    url: required(
                        &asset.browser_download_url,
                        &format!("release.assets[{i}].browser_download_url"),
                    )?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            repository,
            release: Link {
                text: required(&release.tag_name, "release.tag_name")?,
                url: required(&release.html_url, "release.html_url")?,
            },
            prerelease: required(&release.prerelease, "release.prerelease")?,
            assets,
        })
    }

    pub fn release_type(&self) -> &'static str {
        if self.prerelease {
            "prereleased"
        } else {
            "released"
        }
    }

    pub fn render(&self) -> String {
        let mut message = format!(
            "{} *{}* {}\n\n*Assets*:\n",
            self.repository.markdown(),
            self.release_type(),
            self.release.markdown()
        );

        for (i, asset) in self.assets.iter().enumerate() {
            let _ = writeln!(message, "  {}) {}", i + 1, asset.markdown());
        }

        message.trim_end().to_string()
    }
}

/// A newly opened pull request with its change statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestOpenedNotice {
    pub author: Link,
    pub repository: Link,
    pub pull_request: Link,
    pub title: String,
    pub commits: u64,
    pub changed_files: u64,
    pub additions: u64,
    pub deletions: u64,
}

impl PullRequestOpenedNotice {
    pub fn from_payload(payload: &WebhookPayload) -> Result<Self> {
        let repository = repository_link(&payload.repository)?;
        let pr = required_ref(&payload.pull_request, "pull_request")?;

        Ok(Self {
            author: user_link(&pr.user, "pull_request.user")?,
            repository,
            pull_request: pull_request_link(pr)?,
            title: required(&pr.title, "pull_request.title")?,
            commits: required(&pr.commits, "pull_request.commits")?,
            changed_files: required(&pr.changed_files, "pull_request.changed_files")?,
            additions: required(&pr.additions, "pull_request.additions")?,
            deletions: required(&pr.deletions, "pull_request.deletions")?,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "{} *wants to merge* {} {} into {} at {}\n\n*Title*: {}\n*Files Changed*: {} with +{} -{}",
            self.author.markdown(),
            self.commits,
            commit_noun(self.commits),
            self.repository.markdown(),
            self.pull_request.markdown(),
            encode_uri_component(&self.title),
            self.changed_files,
            self.additions,
            self.deletions
        )
    }
}

/// A closed pull request, attributed to whoever closed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestClosedNotice {
    pub closed_by: Link,
    pub pull_request: Link,
    pub title: String,
}

impl PullRequestClosedNotice {
    pub fn from_payload(payload: &WebhookPayload) -> Result<Self> {
        let pr = required_ref(&payload.pull_request, "pull_request")?;

        Ok(Self {
            closed_by: user_link(&payload.sender, "sender")?,
            pull_request: pull_request_link(pr)?,
            title: required(&pr.title, "pull_request.title")?,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "{} *closed* {}\n\n*Title*: {}",
            self.closed_by.markdown(),
            self.pull_request.markdown(),
            encode_uri_component(&self.title)
        )
    }
}

/// Singular only for exactly one commit; zero reads "0 commits".
pub fn commit_noun(count: u64) -> &'static str {
    if count == 1 {
        "commit"
    } else {
        "commits"
    }
}

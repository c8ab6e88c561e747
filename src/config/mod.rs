use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

/// A configuration value that must never end up in logs or responses.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Unknown LOG_FORMAT: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Seconds before an inbound request is abandoned
    pub request_timeout: u64,
    pub log_format: LogFormat,
    /// Shared HMAC secret configured on the GitHub webhook
    pub webhook_secret: SecretString,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub api_url: String,
    pub token: SecretString,
    pub chat_id: String,
    pub thread_id: String,
    /// Seconds before a sendMessage call is abandoned
    pub timeout: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| anyhow::anyhow!("{} environment variable is required", key))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let webhook_secret = SecretString::new(required("SECRET")?);
        if webhook_secret.is_empty() {
            return Err(anyhow::anyhow!("SECRET environment variable must not be empty"));
        }

        Ok(Config {
            environment: or_default("ENVIRONMENT", "development"),
            host: or_default("HOST", "0.0.0.0"),
            port: or_default("PORT", "8080")
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?,
            request_timeout: or_default("REQUEST_TIMEOUT", "30")
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid REQUEST_TIMEOUT: {}", e))?,
            log_format: or_default("LOG_FORMAT", "pretty").parse()?,
            webhook_secret,
            telegram: TelegramConfig {
                api_url: or_default("TELEGRAM_API_URL", "https://api.telegram.org")
                    .trim_end_matches('/')
                    .to_string(),
                token: SecretString::new(required("TELEGRAM_TOKEN")?),
                chat_id: required("TELEGRAM_CHAT_ID")?,
                thread_id: required("TELEGRAM_THREAD_ID")?,
                timeout: or_default("NOTIFIER_TIMEOUT", "10")
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid NOTIFIER_TIMEOUT: {}", e))?,
            },
        })
    }
}

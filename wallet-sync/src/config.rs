//! # Sync Configuration
//!
//! Loaded from environment variables (a `.env` file is honored by the binary).
//! All values are validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `WALLET_SYNC_API_URL` | `http://localhost:4280` | Daemon API address |
//! | `WALLET_SYNC_PAGE_PATH` | `/` | Path of the GUI page being kept in sync |
//! | `WALLET_SYNC_REQUEST_TIMEOUT_MS` | unset | Per-request timeout; unset means none |

use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Default daemon API address (the daemon's `--api-addr` default).
pub const DEFAULT_API_URL: &str = "http://localhost:4280";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Base URL the `/gui/*` endpoints are resolved against
    pub api_base_url: String,
    /// Path of the page, decides which onboarding redirects apply
    pub page_path: String,
    pub request_timeout: Option<Duration>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_path: "/".to_string(),
            request_timeout: None,
        }
    }
}

impl SyncConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = lookup("WALLET_SYNC_API_URL").unwrap_or(defaults.api_base_url);
        let page_path = lookup("WALLET_SYNC_PAGE_PATH").unwrap_or(defaults.page_path);
        let request_timeout = match lookup("WALLET_SYNC_REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|e| {
                    AppError::Config(format!(
                        "WALLET_SYNC_REQUEST_TIMEOUT_MS must be a number of milliseconds: {}",
                        e
                    ))
                })?;
                Some(Duration::from_millis(ms))
            }
            None => None,
        };

        let config = Self {
            api_base_url,
            page_path,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("WALLET_SYNC_API_URL is not a valid URL: {}", e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "WALLET_SYNC_API_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if !self.page_path.starts_with('/') {
            return Err(AppError::Config(
                "WALLET_SYNC_PAGE_PATH must start with '/'".to_string(),
            ));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config(
                "WALLET_SYNC_REQUEST_TIMEOUT_MS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

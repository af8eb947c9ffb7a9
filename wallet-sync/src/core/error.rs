//! # Common Error Types
//!
//! Consolidated error handling for the GUI sync client.
//!
//! ## Error Categories
//!
//! - **Network**: The request never produced a response (connection refused, reset, timeout)
//! - **Status**: The daemon answered with a non-2xx status code
//! - **Decode**: The body was not JSON, or not the array shape the endpoint promises
//! - **Config**: Invalid environment configuration, detected at startup
//! - **Page**: The page does not carry an element the update needs (e.g. a redirect form)
//!
//! `reqwest` failures convert with `?`: a body that is not JSON becomes
//! `Decode`, an error status becomes `Status`, anything else `Network`.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use wallet_sync::core::error::{AppError, Result};
//!
//! fn endpoint_path(endpoint: &str) -> Result<&str> {
//!     if !endpoint.starts_with('/') {
//!         return Err(AppError::Config(format!("endpoint must be absolute: {}", endpoint)));
//!     }
//!     Ok(endpoint)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type for the GUI sync client.
///
/// # Example
///
/// ```rust
/// use wallet_sync::core::error::AppError;
///
/// let err = AppError::Status(503);
/// assert_eq!(err.to_string(), "HTTP error: status 503");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Request failed before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Daemon answered with a non-success status.
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// Response body is not the expected JSON array.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),

    /// The page lacks an element an update relies on.
    #[error("Page error: {0}")]
    Page(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Status(status.as_u16())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

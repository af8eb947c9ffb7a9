//! # GUI Endpoints
//!
//! Paths of the daemon's GUI polling endpoints and reply decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{AppError, Result};

pub const BLOCK_HEIGHT: &str = "/gui/blockHeight";
pub const BALANCE: &str = "/gui/balance";
pub const DOWNLOADER_PROGRESS: &str = "/gui/downloaderProgress";
pub const HEARTBEAT: &str = "/gui/heartbeat";

/// Logo served by the daemon, referenced by the shutdown notice.
pub const LOGO: &str = "/gui/logo.png";

/// Decode a fetched body into one of the [`shared::dto::gui`] reply types.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| AppError::Decode(format!("{}: {}", endpoint, e)))
}

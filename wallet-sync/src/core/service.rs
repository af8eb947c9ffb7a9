//! # Service Traits
//!
//! Traits for dependency injection, enabling poller tests without a daemon.

use async_trait::async_trait;
use serde_json::Value;

use super::error::Result;

/// Read access to the daemon's GUI endpoints.
///
/// Implemented by [`crate::services::api::ApiClient`] in production and by
/// scripted mocks in tests.
#[async_trait]
pub trait GuiApi: Send + Sync {
    /// GET `endpoint` (a path such as `/gui/heartbeat`) and return the decoded JSON body.
    ///
    /// Non-2xx responses and bodies that are not JSON are errors.
    async fn fetch(&self, endpoint: &str) -> Result<Value>;
}

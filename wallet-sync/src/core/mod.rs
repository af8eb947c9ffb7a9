//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the sync client.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`GuiApi`] seam between poll loops and HTTP
//!
//! ## Dependency Injection
//!
//! Poll loops only see `Arc<dyn GuiApi>`:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_sync::core::service::GuiApi;
//! use wallet_sync::services::api::ApiClient;
//!
//! let api: Arc<dyn GuiApi> = Arc::new(ApiClient::new("http://localhost:4280", None));
//! ```

pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{AppError, Result};
pub use service::GuiApi;

//! # Logging Infrastructure
//!
//! File-based structured logging for the sync client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! let _guard = wallet_sync::debug::init();
//!
//! tracing::info!(endpoint = "/gui/balance", "Poll completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `wallet_sync=debug,info`)
//! - `WALLET_SYNC_LOG_DIR`: Log directory (default: `logs`)
//! - `WALLET_SYNC_LOG_CONSOLE`: Echo logs to stderr (1=on, 0=off, default on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
///
/// Call this at application startup, before any other operations, and keep
/// the returned guard alive until exit.
pub fn init() -> Option<WorkerGuard> {
    init_logger(&DebugConfig::from_env())
}

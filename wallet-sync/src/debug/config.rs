//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (daily rotated `wallet-sync.log.*` files)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "wallet_sync=debug,info")
    pub log_level: String,
    /// Echo log lines to stderr as well as the log file
    pub console: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: "wallet_sync=info,warn".to_string(),
            console: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("WALLET_SYNC_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            console: std::env::var("WALLET_SYNC_LOG_CONSOLE")
                .map(|v| v != "0")
                .unwrap_or(defaults.console),
        }
    }
}

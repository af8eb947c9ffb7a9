//! # Application Events
//!
//! Event types sent from poll tasks to the app, the single writer of the page.

use shared::dto::gui::{BalanceReply, BlockHeightReply, DownloaderProgressReply, HeartbeatReply};

use crate::core::error::AppError;

/// Poll results sent to the app
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Block height, sync status and status color polled
    BlockHeight(BlockHeightReply),
    /// Balances polled
    Balance(BalanceReply),
    /// Initial download progress polled
    DownloaderProgress(DownloaderProgressReply),
    /// Heartbeat answered with something other than "true"; the heartbeat loop has stopped
    HeartbeatStopped(HeartbeatReply),
    /// Heartbeat request failed; the daemon is gone
    BackendLost(AppError),
}

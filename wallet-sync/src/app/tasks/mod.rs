//! # Poll Tasks
//!
//! The four poll loops are one generic [`poller`] driven by tagged
//! configuration:
//!
//! | kind | endpoint | interval | guard class |
//! |---|---|---|---|
//! | `BlockHeight` | `/gui/blockHeight` | 5000 ms | `block_height` |
//! | `Balance` | `/gui/balance` | 5000 ms | `balance` |
//! | `DownloaderProgress` | `/gui/downloaderProgress` | 1000 ms | `downloader-progress` |
//! | `Heartbeat` | `/gui/heartbeat` | 200 ms | none |
//!
//! [`outcome`] maps one fetch result to the event for the app and the next step.

pub mod poller;

use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::app::events::AppEvent;
use crate::core::error::Result;
use crate::services::api::gui;
use crate::ui::page::class;

pub use poller::{PollExit, PollSet, Poller};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    BlockHeight,
    Balance,
    DownloaderProgress,
    Heartbeat,
}

impl TaskKind {
    /// Start order of the loops.
    pub const ALL: [TaskKind; 4] = [
        TaskKind::DownloaderProgress,
        TaskKind::BlockHeight,
        TaskKind::Balance,
        TaskKind::Heartbeat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TaskKind::BlockHeight => "block_height",
            TaskKind::Balance => "balance",
            TaskKind::DownloaderProgress => "downloader_progress",
            TaskKind::Heartbeat => "heartbeat",
        }
    }
}

/// One poll loop's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTask {
    pub kind: TaskKind,
    pub endpoint: &'static str,
    pub interval: Duration,
    /// Skip the request while the page has no element with this class
    pub guard: Option<&'static str>,
}

impl PollTask {
    pub fn new(kind: TaskKind) -> Self {
        let (endpoint, interval_ms, guard) = match kind {
            TaskKind::BlockHeight => (gui::BLOCK_HEIGHT, 5000, Some(class::BLOCK_HEIGHT)),
            TaskKind::Balance => (gui::BALANCE, 5000, Some(class::BALANCE)),
            TaskKind::DownloaderProgress => {
                (gui::DOWNLOADER_PROGRESS, 1000, Some(class::DOWNLOADER_PROGRESS))
            }
            TaskKind::Heartbeat => (gui::HEARTBEAT, 200, None),
        };
        Self {
            kind,
            endpoint,
            interval: Duration::from_millis(interval_ms),
            guard,
        }
    }

    /// All four loops, in start order.
    pub fn all() -> Vec<PollTask> {
        TaskKind::ALL.into_iter().map(PollTask::new).collect()
    }
}

/// What a loop does after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    After(Duration),
    Stop,
}

/// Map a fetch result to the event for the app and the loop's next step.
///
/// Every failure is retried at the task's interval, except for the heartbeat:
/// a failed heartbeat request means the daemon is gone and the loop ends.
/// Any JSON heartbeat body decodes; one that is not `["true"]` ends the loop
/// without declaring the daemon gone.
pub fn outcome(task: &PollTask, result: Result<Value>) -> (Option<AppEvent>, Step) {
    let again = Step::After(task.interval);

    let decoded = result.and_then(|body| match task.kind {
        TaskKind::BlockHeight => gui::decode(task.endpoint, body).map(AppEvent::BlockHeight),
        TaskKind::Balance => gui::decode(task.endpoint, body).map(AppEvent::Balance),
        TaskKind::DownloaderProgress => {
            gui::decode(task.endpoint, body).map(AppEvent::DownloaderProgress)
        }
        TaskKind::Heartbeat => gui::decode(task.endpoint, body).map(AppEvent::HeartbeatStopped),
    });

    match (task.kind, decoded) {
        (TaskKind::Heartbeat, Ok(AppEvent::HeartbeatStopped(reply))) if reply.is_alive() => {
            (None, again)
        }
        (TaskKind::Heartbeat, Ok(event)) => {
            warn!(task = task.kind.name(), event = ?event, "Heartbeat not alive - heartbeat polling stopped");
            (Some(event), Step::Stop)
        }
        (TaskKind::Heartbeat, Err(e)) => (Some(AppEvent::BackendLost(e)), Step::Stop),
        (_, Ok(event)) => {
            debug!(task = task.kind.name(), endpoint = task.endpoint, "Poll succeeded");
            (Some(event), again)
        }
        (_, Err(e)) => {
            warn!(
                task = task.kind.name(),
                endpoint = task.endpoint,
                error = %e,
                retry_ms = task.interval.as_millis() as u64,
                "Poll failed - keeping last known values"
            );
            (None, again)
        }
    }
}

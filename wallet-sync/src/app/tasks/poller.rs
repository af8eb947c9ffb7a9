//! # Generic Poller
//!
//! One loop per [`PollTask`]: check the guard, fetch, hand the event to the
//! app, wait, repeat. A loop has at most one request in flight because the
//! next cycle only starts after the previous one finished and its delay
//! elapsed.
//!
//! Loops are cancellable: [`PollSet::stop`] interrupts a pending request or
//! delay. All timing goes through `tokio::time`, so tests drive the loops on
//! tokio's paused clock.

use async_channel::Sender;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, trace, warn};

use super::{outcome, PollTask, Step, TaskKind};
use crate::app::events::AppEvent;
use crate::core::service::GuiApi;
use crate::ui::page::SharedPage;

/// Why a loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollExit {
    /// The task decided not to reschedule (heartbeat stop or death)
    Finished,
    /// Stopped from outside
    Cancelled,
    /// The app no longer receives events
    Disconnected,
    /// The loop's task panicked or was aborted
    Aborted,
}

/// A single poll loop.
pub struct Poller {
    task: PollTask,
    api: Arc<dyn GuiApi>,
    page: SharedPage,
    events: Sender<AppEvent>,
}

impl Poller {
    pub fn new(
        task: PollTask,
        api: Arc<dyn GuiApi>,
        page: SharedPage,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            task,
            api,
            page,
            events,
        }
    }

    fn guard_open(&self) -> bool {
        match self.task.guard {
            Some(class) => self.page.read().has_class(class),
            None => true,
        }
    }

    /// Run one cycle and return what to do next, or how the loop ends.
    pub async fn cycle(&self) -> Result<Step, PollExit> {
        if !self.guard_open() {
            trace!(
                task = self.task.kind.name(),
                guard = self.task.guard,
                "Guard class not on page - skipping request"
            );
            return Ok(Step::After(self.task.interval));
        }

        let result = self.api.fetch(self.task.endpoint).await;
        let (event, step) = outcome(&self.task, result);

        if let Some(event) = event {
            if self.events.send(event).await.is_err() {
                debug!(task = self.task.kind.name(), "Event channel closed - stopping poller");
                return Err(PollExit::Disconnected);
            }
        }
        Ok(step)
    }

    /// Poll until the task stops itself or `stop` fires.
    pub async fn run(self, mut stop: watch::Receiver<bool>) -> PollExit {
        loop {
            let step = tokio::select! {
                biased;
                _ = stop.changed() => return PollExit::Cancelled,
                step = self.cycle() => step,
            };

            match step {
                Ok(Step::After(delay)) => {
                    tokio::select! {
                        biased;
                        _ = stop.changed() => return PollExit::Cancelled,
                        _ = sleep(delay) => {}
                    }
                }
                Ok(Step::Stop) => return PollExit::Finished,
                Err(exit) => return exit,
            }
        }
    }
}

struct PollHandle {
    kind: TaskKind,
    stop: watch::Sender<bool>,
    join: JoinHandle<PollExit>,
}

/// The running poll loops of one page.
///
/// Dropping the set cancels every loop.
pub struct PollSet {
    handles: Vec<PollHandle>,
}

impl PollSet {
    /// Spawn one loop per task. Must be called within a tokio runtime.
    pub fn spawn(
        tasks: impl IntoIterator<Item = PollTask>,
        api: Arc<dyn GuiApi>,
        page: SharedPage,
        events: Sender<AppEvent>,
    ) -> Self {
        let handles = tasks
            .into_iter()
            .map(|task| {
                let kind = task.kind;
                info!(
                    task = kind.name(),
                    endpoint = task.endpoint,
                    interval_ms = task.interval.as_millis() as u64,
                    "Starting poller"
                );
                let (stop, stop_rx) = watch::channel(false);
                let poller = Poller::new(task, Arc::clone(&api), Arc::clone(&page), events.clone());
                let join = tokio::spawn(poller.run(stop_rx));
                PollHandle { kind, stop, join }
            })
            .collect();
        Self { handles }
    }

    /// Kinds of the loops still running.
    pub fn running(&self) -> Vec<TaskKind> {
        self.handles
            .iter()
            .filter(|h| !h.join.is_finished())
            .map(|h| h.kind)
            .collect()
    }

    /// Ask every loop to stop; in-flight requests and delays are abandoned.
    pub fn stop(&self) {
        for handle in &self.handles {
            // a finished loop has dropped its receiver
            let _ = handle.stop.send(true);
        }
    }

    /// Wait for every loop to end.
    pub async fn join(self) -> Vec<(TaskKind, PollExit)> {
        let mut exits = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            let exit = match handle.join.await {
                Ok(exit) => exit,
                Err(e) => {
                    warn!(task = handle.kind.name(), error = %e, "Poller task aborted");
                    PollExit::Aborted
                }
            };
            exits.push((handle.kind, exit));
        }
        exits
    }

    /// Stop every loop and wait for them to end.
    pub async fn shutdown(self) -> Vec<(TaskKind, PollExit)> {
        self.stop();
        self.join().await
    }
}

//! # Application Orchestrator
//!
//! The [`App`] keeps one GUI page in sync with the daemon. It is the single
//! consumer of poll results and the only writer of the page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              Poll loops (Tokio tasks)                    │
//! │  downloader_progress 1s   block_height 5s                │
//! │  balance 5s               heartbeat 200ms                │
//! │  - read the page (guard classes) under a read lock       │
//! └───────────────────────┬──────────────────────────────────┘
//!                         │ async_channel (AppEvent)
//! ┌───────────────────────▼──────────────────────────────────┐
//! │  App::handle_event                                       │
//! │  1. handlers::* update the ViewModel (pure)              │
//! │  2. ui::render writes the ViewModel into the page        │
//! │  3. redirect form submitted / shutdown notice shown      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`App::run`] ends when the page navigates away or the daemon is lost;
//! every poll loop is stopped before it returns.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use wallet_sync::app::App;
//! use wallet_sync::services::api::ApiClient;
//! use wallet_sync::ui::{Document, SharedPage};
//!
//! # async fn example() {
//! let page: SharedPage = Arc::new(RwLock::new(Document::dashboard("/")));
//! let api = Arc::new(ApiClient::new("http://localhost:4280", None));
//!
//! let mut app = App::new(page);
//! let exit = app.run(api).await;
//! println!("stopped: {:?}", exit);
//! # }
//! ```

pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::{Liveness, Redirect, ViewModel};

use async_channel::{unbounded, Receiver};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::core::error::AppError;
use crate::core::service::GuiApi;
use crate::ui::page::SharedPage;
use crate::ui::render::render;
use crate::ui::shutdown::shutdown_notice;
use handlers::{balance, block_height, downloader, heartbeat, Update};
use tasks::{PollSet, PollTask};

/// What the runtime does after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// A redirect form was submitted; the page is unloading
    Navigate(Redirect),
    /// The daemon is gone and the shutdown notice is shown
    Shutdown,
}

/// Why [`App::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Navigated(Redirect),
    BackendLost,
    /// Every poll loop ended on its own
    Idle,
}

pub struct App {
    /// What the app knows about the daemon
    pub state: ViewModel,
    page: SharedPage,
}

impl App {
    /// Create an app for `page`; the page's path decides which redirects apply.
    pub fn new(page: SharedPage) -> Self {
        let path = page.read().path().to_string();
        Self {
            state: ViewModel::new(path),
            page,
        }
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    /// Start all four poll loops. Events arrive on the returned receiver.
    pub fn start(&self, api: Arc<dyn GuiApi>) -> (PollSet, Receiver<AppEvent>) {
        // unbounded: a send never delays a loop's schedule
        let (tx, rx) = unbounded();
        let pollers = PollSet::spawn(PollTask::all(), api, Arc::clone(&self.page), tx);
        info!(path = %self.state.page_path, "Sync started");
        (pollers, rx)
    }

    /// Poll and render until the page navigates away or the daemon is lost.
    pub async fn run(&mut self, api: Arc<dyn GuiApi>) -> Exit {
        let (pollers, events) = self.start(api);

        let exit = loop {
            let Ok(event) = events.recv().await else {
                break Exit::Idle;
            };
            match self.handle_event(event) {
                Control::Continue => {}
                Control::Navigate(redirect) => break Exit::Navigated(redirect),
                Control::Shutdown => break Exit::BackendLost,
            }
        };

        for (task, poll_exit) in pollers.shutdown().await {
            debug!(task = task.name(), exit = ?poll_exit, "Poller ended");
        }
        info!(exit = ?exit, "Sync stopped");
        exit
    }

    /// Apply one poll result to the view model and the page.
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        let now = Utc::now();
        let update = match event {
            AppEvent::BlockHeight(reply) => block_height::apply(&mut self.state, reply, now),
            AppEvent::Balance(reply) => balance::apply(&mut self.state, reply, now),
            AppEvent::DownloaderProgress(reply) => downloader::apply(&mut self.state, reply, now),
            AppEvent::HeartbeatStopped(reply) => {
                warn!(reply = ?reply.alive, "Daemon stopped answering alive - heartbeat polling ended");
                return Control::Continue;
            }
            AppEvent::BackendLost(e) => return self.handle_backend_lost(e),
        };
        self.apply_update(update)
    }

    fn apply_update(&mut self, update: Update) -> Control {
        if update.changed {
            let changed = render(&self.state, &mut *self.page.write());
            info!(
                elements = changed,
                height = ?self.state.block_height,
                progress = ?self.state.downloader_progress,
                "Page updated"
            );
        }

        let Some(redirect) = update.redirect else {
            return Control::Continue;
        };
        let form = redirect.form_id();
        match self.page.write().submit_form(form) {
            Ok(()) => {
                info!(form, "Onboarding finished - submitted redirect form");
                self.state.navigating = Some(redirect);
                Control::Navigate(redirect)
            }
            Err(e) => {
                warn!(form, error = %e, "Redirect form missing - will retry on next reply");
                Control::Continue
            }
        }
    }

    fn handle_backend_lost(&mut self, cause: AppError) -> Control {
        if !heartbeat::backend_lost(&mut self.state) {
            return Control::Shutdown;
        }
        error!(error = %cause, "Heartbeat failed - daemon is gone");
        self.page.write().replace_body(&shutdown_notice());
        Control::Shutdown
    }
}

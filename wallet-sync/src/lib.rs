//! # Wallet Sync - Library Root
//!
//! Keeps a wallet GUI page in sync with the wallet daemon's `/gui/*` JSON API.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Live chain status**: block height and sync status badge every 5s
//! - **Balances**: confirmed, unconfirmed, SPF funds (and claim balance) every 5s
//! - **Download progress**: initial blockchain download every 1s
//! - **Liveness**: 200ms heartbeat; a lost daemon replaces the page with a shutdown notice
//! - **Onboarding redirects**: the page moves on once syncing or downloading finished
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              wallet-sync (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime, poll timers            │
//! │  Reqwest       - HTTP client                           │
//! │  async-channel - Poll results -> App                   │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON arrays)
//!          ▼
//! ┌─────────────────────────┐
//! │  Wallet daemon GUI API  │
//! │  (localhost:4280)       │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, view model, update handlers, poll loops
//! - **config**: daemon address and page path from the environment
//! - **core**: `AppError` and the `GuiApi` trait
//! - **debug**: logging setup
//! - **services**: HTTP client for the daemon
//! - **ui**: page model, rendering, shutdown notice
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (App, handlers, tasks)
//!   │   ├── services::api (GuiApi over HTTP)
//!   │   └── ui (Page, render)
//!   │
//!   └── debug (tracing subscriber)
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{App, AppEvent, Exit};
pub use config::SyncConfig;
pub use crate::core::{AppError, GuiApi, Result};

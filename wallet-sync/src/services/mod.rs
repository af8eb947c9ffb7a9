//! # Services Module
//!
//! External service integrations for the GUI sync client.
//!
//! ```text
//! services/
//! └── api/
//!     ├── client.rs  - HTTP client (reqwest) implementing GuiApi
//!     └── gui.rs     - /gui/* endpoint paths, reply decoding
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 wallet-sync                  │
//! │                                              │
//! │  poll tasks ──► Arc<dyn GuiApi> ──► ApiClient│
//! └───────────────────────────────┬──────────────┘
//!                                 │ HTTP/JSON (GET)
//!                                 ▼
//! ┌──────────────────────────────────────────────┐
//! │  Wallet daemon API (default localhost:4280)  │
//! │                                              │
//! │  /gui/blockHeight                            │
//! │  /gui/balance                                │
//! │  /gui/downloaderProgress                     │
//! │  /gui/heartbeat                              │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api;

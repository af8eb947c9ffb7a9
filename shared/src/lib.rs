//! # Shared GUI Wire Contract
//!
//! This library defines the contract between the wallet daemon's GUI endpoints
//! and the clients that keep the GUI view in sync with it.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the GUI polling endpoints
//!   - **[`dto::gui`]**: Block height, balance, downloader progress and heartbeat replies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::display_text`]**: Render a JSON scalar as display text
//!
//! ## Wire Format
//!
//! Every GUI endpoint answers with a flat JSON array whose meaning is positional:
//!
//! ```text
//! GET /gui/blockHeight        -> ["12345", "Synchronized", "blue"]
//! GET /gui/balance            -> ["1.50", "0.20", "3", "0.00"]
//! GET /gui/downloaderProgress -> ["42%"]
//! GET /gui/heartbeat          -> ["true"]
//! ```
//!
//! The reply types decode from that array (extra trailing items are ignored)
//! and encode back to an array of strings, so the same types can be used by a
//! server implementation.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::gui::BlockHeightReply;
//!
//! let reply: BlockHeightReply = serde_json::from_str(r#"[12345, "Synchronized", "blue"]"#).unwrap();
//! assert_eq!(reply.height, "12345");
//! assert!(reply.is_synchronized());
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;

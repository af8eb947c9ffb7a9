//! # Data Transfer Objects (DTOs)
//!
//! Reply structures for the wallet daemon's GUI polling endpoints.
//!
//! ## Module Organization
//!
//! - [`gui`] - Positional array replies of `/gui/*` endpoints
//!
//! ## Serialization Format
//!
//! Unlike field-named JSON objects, GUI replies are arrays. Each reply type
//! uses `#[serde(try_from = "Vec<Value>", into = "Vec<String>")]` so that
//! decoding validates the array length and item types in one place.
//!
//! ```text
//! GET /gui/balance
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json; charset=utf-8
//!
//! ["         150.00","           0.20","3","           0.00"]
//! ```

pub mod gui;

pub use gui::*;

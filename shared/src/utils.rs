//! # Shared Utility Functions
//!
//! Helpers used by both sides of the GUI wire contract.
//!
//! ## Display Text
//!
//! GUI replies carry values that are only ever shown to the user. The daemon
//! sends most of them as strings, but older builds send the block height as a
//! bare number. [`display_text`] turns either into the text the page shows,
//! without giving numbers any further meaning.
//!
//! ```rust
//! use serde_json::json;
//! use shared::utils::display_text;
//!
//! assert_eq!(display_text(&json!(12345)), Some("12345".to_string()));
//! assert_eq!(display_text(&json!("?")), Some("?".to_string()));
//! assert_eq!(display_text(&json!(null)), None);
//! ```

use serde_json::Value;

/// Render a JSON scalar as display text.
///
/// Strings are returned verbatim (whitespace included, the daemon pads
/// balances to a fixed width), numbers and booleans use their JSON spelling.
/// Returns `None` for `null`, arrays and objects.
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

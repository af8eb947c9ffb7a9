//! # GUI Endpoint Replies
//!
//! Positional array replies of the daemon's GUI polling endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::utils::display_text;

/// Sync status reported once the wallet has caught up with the chain.
pub const STATUS_SYNCHRONIZED: &str = "Synchronized";

/// Downloader progress reported once the initial download is complete.
pub const PROGRESS_COMPLETE: &str = "100%";

/// Heartbeat value of a daemon that still serves a GUI.
pub const HEARTBEAT_ALIVE: &str = "true";

/// A GUI reply array that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyError {
    pub field: &'static str,
    pub index: usize,
    pub reason: &'static str,
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} ({}) {}", self.index, self.field, self.reason)
    }
}

impl std::error::Error for ReplyError {}

fn text_at(items: &[Value], index: usize, field: &'static str) -> Result<String, ReplyError> {
    let value = items.get(index).ok_or(ReplyError {
        field,
        index,
        reason: "is missing",
    })?;
    display_text(value).ok_or(ReplyError {
        field,
        index,
        reason: "is not a scalar",
    })
}

/// Reply of `GET /gui/blockHeight`: `[height, status, color]`.
///
/// `height` is display text only. The daemon sends `"?"` while the wallet
/// cannot report a height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<String>")]
pub struct BlockHeightReply {
    pub height: String,
    /// "Synchronized", "Synchronizing", "Rescanning" or a transient daemon status
    pub status: String,
    /// CSS color class for the status badge ("blue", "yellow", "cyan")
    pub color: String,
}

impl BlockHeightReply {
    pub fn is_synchronized(&self) -> bool {
        self.status == STATUS_SYNCHRONIZED
    }
}

impl TryFrom<Vec<Value>> for BlockHeightReply {
    type Error = ReplyError;

    fn try_from(items: Vec<Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            height: text_at(&items, 0, "height")?,
            status: text_at(&items, 1, "status")?,
            color: text_at(&items, 2, "color")?,
        })
    }
}

impl From<BlockHeightReply> for Vec<String> {
    fn from(reply: BlockHeightReply) -> Self {
        vec![reply.height, reply.status, reply.color]
    }
}

/// Reply of `GET /gui/balance`: `[confirmed, unconfirmed, spf_funds, claim?]`.
///
/// All amounts are preformatted by the daemon (`"?"` while the wallet is locked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<String>")]
pub struct BalanceReply {
    pub confirmed: String,
    pub unconfirmed: String,
    pub spf_funds: String,
    /// Claimable balance; only sent by daemons that track claims.
    pub claim: Option<String>,
}

impl TryFrom<Vec<Value>> for BalanceReply {
    type Error = ReplyError;

    fn try_from(items: Vec<Value>) -> Result<Self, Self::Error> {
        let claim = match items.get(3) {
            Some(_) => Some(text_at(&items, 3, "claim")?),
            None => None,
        };
        Ok(Self {
            confirmed: text_at(&items, 0, "confirmed")?,
            unconfirmed: text_at(&items, 1, "unconfirmed")?,
            spf_funds: text_at(&items, 2, "spf_funds")?,
            claim,
        })
    }
}

impl From<BalanceReply> for Vec<String> {
    fn from(reply: BalanceReply) -> Self {
        let mut items = vec![reply.confirmed, reply.unconfirmed, reply.spf_funds];
        items.extend(reply.claim);
        items
    }
}

/// Reply of `GET /gui/downloaderProgress`: `[status]`, e.g. `["42%"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<String>")]
pub struct DownloaderProgressReply {
    pub status: String,
}

impl DownloaderProgressReply {
    pub fn is_complete(&self) -> bool {
        self.status == PROGRESS_COMPLETE
    }
}

impl TryFrom<Vec<Value>> for DownloaderProgressReply {
    type Error = ReplyError;

    fn try_from(items: Vec<Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            status: text_at(&items, 0, "status")?,
        })
    }
}

impl From<DownloaderProgressReply> for Vec<String> {
    fn from(reply: DownloaderProgressReply) -> Self {
        vec![reply.status]
    }
}

/// Reply of `GET /gui/heartbeat`: `["true"]` or `["false"]`.
///
/// The daemon answers `"false"` when it runs headless and no GUI should be
/// kept alive. Any JSON body decodes: `alive` is `None` when the body is not
/// an array or its first item is missing or not a string. Such a reply never
/// counts as alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Vec<String>")]
pub struct HeartbeatReply {
    pub alive: Option<String>,
}

impl HeartbeatReply {
    /// Only the exact string `"true"` counts as alive.
    pub fn is_alive(&self) -> bool {
        self.alive.as_deref() == Some(HEARTBEAT_ALIVE)
    }
}

impl From<Value> for HeartbeatReply {
    fn from(body: Value) -> Self {
        let alive = match body {
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        };
        Self { alive }
    }
}

impl From<HeartbeatReply> for Vec<String> {
    fn from(reply: HeartbeatReply) -> Self {
        reply.alive.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_height_accepts_numeric_height() {
        let reply: BlockHeightReply =
            serde_json::from_str(r#"[12345, "Synchronized", "green"]"#).unwrap();
        assert_eq!(reply.height, "12345");
        assert_eq!(reply.status, "Synchronized");
        assert_eq!(reply.color, "green");
        assert!(reply.is_synchronized());
    }

    #[test]
    fn test_block_height_unknown_height() {
        let reply: BlockHeightReply =
            serde_json::from_str(r#"["?", "Synchronizing", "yellow"]"#).unwrap();
        assert_eq!(reply.height, "?");
        assert!(!reply.is_synchronized());
    }

    #[test]
    fn test_block_height_too_short() {
        let err = serde_json::from_str::<BlockHeightReply>(r#"["1", "Synchronized"]"#).unwrap_err();
        assert!(err.to_string().contains("item 2 (color) is missing"));
    }

    #[test]
    fn test_reply_must_be_an_array() {
        assert!(serde_json::from_str::<BlockHeightReply>(r#"{"height": "1"}"#).is_err());
        assert!(serde_json::from_str::<DownloaderProgressReply>(r#""100%""#).is_err());
    }

    #[test]
    fn test_heartbeat_decodes_any_body_as_not_alive() {
        for body in [r#"{"alive": "true"}"#, r#""true""#, "1", "null"] {
            let reply: HeartbeatReply = serde_json::from_str(body).unwrap();
            assert_eq!(reply.alive, None, "body {}", body);
            assert!(!reply.is_alive());
        }
    }

    #[test]
    fn test_balance_with_and_without_claim() {
        let reply: BalanceReply = serde_json::from_str(r#"["1.5", "0.2", "3.0"]"#).unwrap();
        assert_eq!(reply.confirmed, "1.5");
        assert_eq!(reply.unconfirmed, "0.2");
        assert_eq!(reply.spf_funds, "3.0");
        assert_eq!(reply.claim, None);

        let reply: BalanceReply =
            serde_json::from_str(r#"["1.5", "0.2", "3.0", "0.7"]"#).unwrap();
        assert_eq!(reply.claim.as_deref(), Some("0.7"));
    }

    #[test]
    fn test_balance_serializes_as_array() {
        let reply = BalanceReply {
            confirmed: "1".to_string(),
            unconfirmed: "2".to_string(),
            spf_funds: "3".to_string(),
            claim: None,
        };
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"["1","2","3"]"#);
    }

    #[test]
    fn test_downloader_progress_completion() {
        let done: DownloaderProgressReply = serde_json::from_str(r#"["100%"]"#).unwrap();
        let partial: DownloaderProgressReply = serde_json::from_str(r#"["42%"]"#).unwrap();
        assert!(done.is_complete());
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_heartbeat_only_exact_true_is_alive() {
        let alive: HeartbeatReply = serde_json::from_str(r#"["true"]"#).unwrap();
        let headless: HeartbeatReply = serde_json::from_str(r#"["false"]"#).unwrap();
        let boolean: HeartbeatReply = serde_json::from_str("[true]").unwrap();
        let empty: HeartbeatReply = serde_json::from_str("[]").unwrap();
        assert!(alive.is_alive());
        assert!(!headless.is_alive());
        assert!(!boolean.is_alive());
        assert!(!empty.is_alive());
    }

    #[test]
    fn test_extra_items_are_ignored() {
        let reply: DownloaderProgressReply = serde_json::from_str(r#"["7%", "extra"]"#).unwrap();
        assert_eq!(reply.status, "7%");
    }
}

//! Inter-process relay protocol
//!
//! When the hosting process runs as a child of a supervisor, log lines are
//! not printed locally; each one is framed as a JSON line and handed to the
//! parent through the relay channel:
//!
//! ```json
//! {"log":"info","message":"2026-01-01 12:00:00 (INFO):\tstarted"}
//! ```
//!
//! Delivery is fire-and-forget: no response is awaited and there is no
//! retry. Ordering is whatever order the send calls were made in.

mod channel;

use serde::{Deserialize, Serialize};

use crate::logging::LogResult;

pub use channel::RelayChannel;

/// The channel method a relayed line is delivered through
///
/// `remote`, `debug` and `write` all route through `info`, so only these
/// three tags ever appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTag {
    Error,
    Warn,
    Info,
}

impl OutputTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputTag::Error => "error",
            OutputTag::Warn => "warn",
            OutputTag::Info => "info",
        }
    }
}

impl std::fmt::Display for OutputTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One framed log line on the relay channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayMessage {
    /// Channel method the line targets
    pub log: OutputTag,
    /// The full line text, exactly as it would have been printed locally
    pub message: String,
}

impl RelayMessage {
    /// Create a new frame
    pub fn new(log: OutputTag, message: impl Into<String>) -> Self {
        Self {
            log,
            message: message.into(),
        }
    }

    /// Decode one received frame (the parent side of the protocol)
    pub fn parse(line: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let frame = RelayMessage::new(OutputTag::Info, "hi");
        let encoded = serde_json::to_string(&frame).unwrap();
        assert_eq!(encoded, r#"{"log":"info","message":"hi"}"#);
    }

    #[test]
    fn test_parse_round_trip() {
        let frame = RelayMessage::new(OutputTag::Warn, "low disk");
        let encoded = serde_json::to_string(&frame).unwrap();
        assert_eq!(RelayMessage::parse(&encoded).unwrap(), frame);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RelayMessage::parse("not json").is_err());
        assert!(RelayMessage::parse(r#"{"log":"status","message":"x"}"#).is_err());
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(OutputTag::Error.as_str(), "error");
        assert_eq!(OutputTag::Warn.to_string(), "warn");
        assert_eq!(OutputTag::Info.as_str(), "info");
    }
}

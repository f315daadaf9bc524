//! Severity levels and their output routing

use crate::relay::OutputTag;

/// The five recognized severities
///
/// `write` is not a severity: it emits raw text with no prefix through the
/// info path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Remote,
    Debug,
}

impl Severity {
    /// Display label, the uppercased severity name
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Remote => "REMOTE",
            Severity::Debug => "DEBUG",
        }
    }

    /// Channel method this severity emits through
    ///
    /// `remote` and `debug` have no output path of their own; both ride the
    /// info path.
    pub fn output_tag(&self) -> OutputTag {
        match self {
            Severity::Error => OutputTag::Error,
            Severity::Warn => OutputTag::Warn,
            Severity::Info | Severity::Remote | Severity::Debug => OutputTag::Info,
        }
    }

    /// True for the severities whose raw body is forwarded to remote sinks
    pub fn forwards(&self) -> bool {
        matches!(self, Severity::Error | Severity::Warn | Severity::Remote)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Remote => "remote",
            Severity::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

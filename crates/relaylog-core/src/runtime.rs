//! Execution-environment detection

/// Variable a supervising parent sets when it wires up the relay channel for
/// a child it spawns
pub const CHANNEL_VAR: &str = "RELAYLOG_CHANNEL";

/// How the hosting process is running
///
/// Consulted exactly once, at logger construction, to bind the output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Top-level process; lines go straight to the terminal
    Standalone,
    /// Spawned by a supervising parent; lines are relayed to it
    ChildProcess,
}

impl RuntimeEnv {
    /// Detect the environment from the process's environment variables
    ///
    /// `ChildProcess` when `RELAYLOG_CHANNEL` is set non-empty, `Standalone`
    /// otherwise.
    pub fn detect() -> Self {
        match std::env::var(CHANNEL_VAR) {
            Ok(v) if !v.is_empty() => RuntimeEnv::ChildProcess,
            _ => RuntimeEnv::Standalone,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnv::Standalone => "standalone",
            RuntimeEnv::ChildProcess => "child-process",
        }
    }

    /// Check if this process reports to a parent
    pub fn is_child(&self) -> bool {
        matches!(self, RuntimeEnv::ChildProcess)
    }
}

impl std::fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

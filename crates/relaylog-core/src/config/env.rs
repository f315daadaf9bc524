//! Environment-variable configuration source

use super::traits::{ConfigResult, ConfigSource};
use super::LogConfig;

/// Variable enabling the debug severity
pub const DEBUG_VAR: &str = "RELAYLOG_DEBUG";

/// Variable suppressing all output
pub const SILENT_VAR: &str = "RELAYLOG_SILENT";

/// Configuration source backed by process environment variables
///
/// A variable set to `1` or `true` (case-insensitive) enables its flag;
/// unset or any other value leaves it off.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    /// Create a new environment-variable source
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvConfigSource {
    fn load(&self) -> ConfigResult<LogConfig> {
        Ok(LogConfig {
            debug: flag(DEBUG_VAR),
            silent: flag(SILENT_VAR),
        })
    }
}

fn flag(name: &str) -> bool {
    parse_flag(std::env::var(name).ok().as_deref())
}

fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

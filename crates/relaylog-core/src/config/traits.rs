//! Configuration source trait definition

use super::LogConfig;

/// Configuration source abstraction
///
/// Implementations:
/// - `MemoryConfigSource`: fixed flags for testing and embedding hosts
/// - `EnvConfigSource`: reads `RELAYLOG_DEBUG` / `RELAYLOG_SILENT`
/// - `FileConfigSource`: reads a YAML file
pub trait ConfigSource: Send + Sync {
    /// Load the configuration snapshot
    ///
    /// Consulted exactly once, at logger construction.
    fn load(&self) -> ConfigResult<LogConfig>;
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

//! Relaylog Core
//!
//! A process-local logger. Each message is formatted with a timestamp and
//! severity label, then written to the output target bound at construction:
//! the local terminal when the process is top-level, or a JSON-line relay
//! channel to the supervising parent when it runs as a child process.
//! Warn, error and remote messages are additionally mirrored, unformatted,
//! to every registered remote sink.
//!
//! The logger is owned by the host's composition point and passed by
//! reference to whatever needs to log; there is no ambient global instance.
//!
//! ```rust,ignore
//! use relaylog_core::{ConfigSource, EnvConfigSource, Logger, RuntimeEnv};
//! use relaylog_core::log_info;
//!
//! let config = EnvConfigSource::new().load()?;
//! let logger = Logger::new(&config, RuntimeEnv::detect());
//!
//! log_info!(logger, "listening on port %d", 3000)?;
//! ```

pub mod config;
pub mod format;
pub mod logging;
pub mod relay;
pub mod runtime;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigResult, ConfigSource, EnvConfigSource, FileConfigSource, LogConfig,
    MemoryConfigSource,
};

pub use format::{format_values, LogValue};

pub use logging::{LogError, LogResult, Logger, OutputTarget, RemoteLog, Severity, SharedRemoteLog};

pub use relay::{OutputTag, RelayChannel, RelayMessage};

pub use runtime::RuntimeEnv;

//! Configuration source abstractions
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigSource`: fixed in-memory flags for testing and embedding hosts
//! - `EnvConfigSource`: process environment variables
//! - `FileConfigSource`: YAML file-based

mod env;
mod file;
mod memory;
mod traits;

use serde::{Deserialize, Serialize};

pub use env::EnvConfigSource;
pub use file::FileConfigSource;
pub use memory::MemoryConfigSource;
pub use traits::{ConfigError, ConfigResult, ConfigSource};

/// Logger configuration flags
///
/// An immutable snapshot: read once, at logger construction, and never
/// consulted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Enable the debug severity
    #[serde(default)]
    pub debug: bool,
    /// Suppress every operation, including `write`; overrides `debug`
    #[serde(default)]
    pub silent: bool,
}

impl LogConfig {
    /// Create a config with the given flags
    pub fn new(debug: bool, silent: bool) -> Self {
        Self { debug, silent }
    }
}

//! File-based configuration source (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{ConfigError, ConfigResult, ConfigSource};
use super::LogConfig;

/// File-based configuration source
///
/// Reads the logger flags from a YAML file:
///
/// ```yaml
/// debug: true
/// silent: false
/// ```
///
/// A missing file yields the defaults; a file that fails to parse is an
/// error.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Create a source reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> ConfigResult<LogConfig> {
        if !self.path.exists() {
            return Ok(LogConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: LogConfig = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {}", e)))?;

        Ok(config)
    }
}

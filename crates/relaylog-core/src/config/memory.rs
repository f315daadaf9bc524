//! In-memory configuration source

use super::traits::{ConfigResult, ConfigSource};
use super::LogConfig;

/// Fixed in-memory configuration source
///
/// Useful for tests and for hosts that resolve their flags elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryConfigSource {
    config: LogConfig,
}

impl MemoryConfigSource {
    /// Create a source holding the given flags
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }
}

impl ConfigSource for MemoryConfigSource {
    fn load(&self) -> ConfigResult<LogConfig> {
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_source() {
        let source = MemoryConfigSource::new(LogConfig::new(true, false));
        let config = source.load().unwrap();
        assert!(config.debug);
        assert!(!config.silent);
    }

    #[test]
    fn test_default_is_all_off() {
        let config = MemoryConfigSource::default().load().unwrap();
        assert_eq!(config, LogConfig::default());
    }
}

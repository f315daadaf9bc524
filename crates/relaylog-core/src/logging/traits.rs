//! Remote sink trait and logger errors

use std::sync::Arc;

/// Remote sink capability: accept one raw message string for out-of-band
/// delivery
///
/// The logger hands the unformatted body of every warn/error/remote message
/// to each registered sink, in registration order. What a sink does with the
/// text is its own business; nothing beyond failure is consulted.
pub trait RemoteLog: Send + Sync {
    /// Deliver one raw message
    fn log_remote(&self, message: &str) -> LogResult<()>;
}

/// Type alias for an Arc-wrapped remote sink
pub type SharedRemoteLog = Arc<dyn RemoteLog>;

/// Errors that can occur while emitting a log line
///
/// The logger performs no error handling of its own: output and sink
/// failures propagate to the caller of the log operation.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Relay encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Remote sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LogError {
    /// Wrap a sink's failure
    pub fn sink(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        LogError::Sink(err.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;

/// Convenience macros for printf-style logging
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.error(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.warn(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.info(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_remote {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.remote(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.debug(&[$($crate::LogValue::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_write {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        $logger.write(&[$($crate::LogValue::from($arg)),*])
    };
}

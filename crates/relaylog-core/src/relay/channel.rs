//! Relay channel writer

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::logging::LogResult;

use super::{OutputTag, RelayMessage};

/// Outbound channel to the supervising parent process
///
/// Frames each line as a [`RelayMessage`] JSON line and flushes immediately.
/// No acknowledgment is read back; a write or encoding failure propagates to
/// the caller of the log operation.
pub struct RelayChannel {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl RelayChannel {
    /// Create a channel over a host-supplied pipe
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Create a channel over the process's stdout, the conventional pipe a
    /// supervisor reads from its children
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Send one framed line
    pub fn send(&self, log: OutputTag, message: &str) -> LogResult<()> {
        let frame = serde_json::to_string(&RelayMessage::new(log, message))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", frame)?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for RelayChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayChannel").finish_non_exhaustive()
    }
}

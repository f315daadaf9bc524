//! The process-local logger
//!
//! Formats each message with a timestamp and severity label, writes it to
//! the output target bound at construction, and mirrors warn/error/remote
//! bodies to every registered remote sink.

use chrono::Local;
use parking_lot::Mutex;

use crate::config::LogConfig;
use crate::format::{format_values, LogValue};
use crate::relay::{OutputTag, RelayChannel};
use crate::runtime::RuntimeEnv;

use super::output::OutputTarget;
use super::severity::Severity;
use super::traits::{LogResult, SharedRemoteLog};

/// Timestamp layout on every labeled line, local time
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Process-local logger
///
/// One instance per process, constructed at the host's composition point and
/// passed to whatever needs to log. The output target and the suppression
/// flags are fixed at construction; the remote sink list only grows.
///
/// Suppression: `silent` turns every operation into a no-op and overrides
/// `debug`; with `silent` off, `debug` only gates the debug operation.
pub struct Logger {
    output: OutputTarget,
    remote_sinks: Mutex<Vec<SharedRemoteLog>>,
    debug: bool,
    silent: bool,
}

impl Logger {
    /// Create a logger bound to the given execution environment
    ///
    /// `Standalone` writes to the local terminal; `ChildProcess` relays
    /// every line to the parent over stdout.
    pub fn new(config: &LogConfig, env: RuntimeEnv) -> Self {
        let output = match env {
            RuntimeEnv::Standalone => OutputTarget::Terminal,
            RuntimeEnv::ChildProcess => OutputTarget::Relay(RelayChannel::stdout()),
        };
        Self::with_output(config, output)
    }

    /// Create a logger over a host-supplied output target
    pub fn with_output(config: &LogConfig, output: OutputTarget) -> Self {
        Self {
            output,
            remote_sinks: Mutex::new(Vec::new()),
            debug: config.debug,
            silent: config.silent,
        }
    }

    /// Log an error line, then forward the raw body to every remote sink
    pub fn error(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent {
            return Ok(());
        }
        self.emit(Severity::Error, args)
    }

    /// Log a warning line, then forward the raw body to every remote sink
    pub fn warn(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent {
            return Ok(());
        }
        self.emit(Severity::Warn, args)
    }

    /// Log an info line; never forwarded
    pub fn info(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent {
            return Ok(());
        }
        self.emit(Severity::Info, args)
    }

    /// Log a remote-severity line
    ///
    /// Mirrored locally through the info path and always forwarded to every
    /// sink, even when the sink list is empty. The only severity that does
    /// both.
    pub fn remote(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent {
            return Ok(());
        }
        self.emit(Severity::Remote, args)
    }

    /// Log a line labeled `DEBUG` through the info path
    ///
    /// A no-op unless debug mode is enabled; silent mode wins over debug.
    pub fn debug(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent || !self.debug {
            return Ok(());
        }
        self.emit(Severity::Debug, args)
    }

    /// Emit raw formatted text with no timestamp or label prefix
    pub fn write(&self, args: &[LogValue]) -> LogResult<()> {
        if self.silent {
            return Ok(());
        }
        let body = format_values(args);
        self.output.emit(OutputTag::Info, &body)
    }

    /// Register a remote sink, appended after any already registered
    ///
    /// No deduplication and no validation: a sink that cannot deliver fails
    /// only when a forwarding call reaches it.
    pub fn add_remote_logger(&self, sink: SharedRemoteLog) {
        self.remote_sinks.lock().push(sink);
    }

    fn emit(&self, severity: Severity, args: &[LogValue]) -> LogResult<()> {
        let body = format_values(args);
        let line = format!(
            "{} ({}):\t{}",
            Local::now().format(TIMESTAMP_FORMAT),
            severity.label(),
            body
        );
        self.output.emit(severity.output_tag(), &line)?;
        if severity.forwards() {
            self.forward(&body)?;
        }
        Ok(())
    }

    /// Hand the raw body to each sink in registration order; the first
    /// failure stops iteration and propagates
    fn forward(&self, raw: &str) -> LogResult<()> {
        let sinks = self.remote_sinks.lock();
        for sink in sinks.iter() {
            sink.log_remote(raw)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("output", &self.output)
            .field("debug", &self.debug)
            .field("silent", &self.silent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::traits::{LogError, RemoteLog};
    use crate::relay::RelayMessage;
    use crate::{log_debug, log_error, log_info, log_remote, log_warn, log_write};
    use std::io::{self, Write};
    use std::sync::Arc;

    /// Write half of an in-memory pipe, clonable so the test keeps the read half
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(config: &LogConfig) -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let output = OutputTarget::Relay(RelayChannel::new(Box::new(buf.clone())));
        (Logger::with_output(config, output), buf)
    }

    fn frames(buf: &SharedBuf) -> Vec<RelayMessage> {
        buf.contents()
            .lines()
            .map(|line| RelayMessage::parse(line).unwrap())
            .collect()
    }

    /// Assert a line is `YYYY-MM-DD HH:mm:ss (LABEL):\t<body>`
    fn assert_stamped(line: &str, label: &str, body: &str) {
        let (stamp, rest) = line.split_at(19);
        assert_eq!(rest, format!(" ({}):\t{}", label, body), "line: {:?}", line);
        for (i, c) in stamp.char_indices() {
            match i {
                4 | 7 => assert_eq!(c, '-', "stamp: {:?}", stamp),
                10 => assert_eq!(c, ' ', "stamp: {:?}", stamp),
                13 | 16 => assert_eq!(c, ':', "stamp: {:?}", stamp),
                _ => assert!(c.is_ascii_digit(), "stamp: {:?}", stamp),
            }
        }
    }

    struct RecordingSink {
        name: &'static str,
        record: Arc<Mutex<Vec<String>>>,
    }

    impl RemoteLog for RecordingSink {
        fn log_remote(&self, message: &str) -> LogResult<()> {
            self.record.lock().push(format!("{}:{}", self.name, message));
            Ok(())
        }
    }

    struct FailingSink;

    impl RemoteLog for FailingSink {
        fn log_remote(&self, _message: &str) -> LogResult<()> {
            Err(LogError::sink("sink offline"))
        }
    }

    #[test]
    fn test_each_severity_emits_one_labeled_line() {
        let (logger, buf) = capture_logger(&LogConfig::default());

        logger.error(&["x=%d".into(), 5.into()]).unwrap();
        logger.warn(&["x=%d".into(), 5.into()]).unwrap();
        logger.info(&["x=%d".into(), 5.into()]).unwrap();
        logger.remote(&["x=%d".into(), 5.into()]).unwrap();

        let frames = frames(&buf);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].log, OutputTag::Error);
        assert_stamped(&frames[0].message, "ERROR", "x=5");
        assert_eq!(frames[1].log, OutputTag::Warn);
        assert_stamped(&frames[1].message, "WARN", "x=5");
        assert_eq!(frames[2].log, OutputTag::Info);
        assert_stamped(&frames[2].message, "INFO", "x=5");
        // remote rides the info path with its own label
        assert_eq!(frames[3].log, OutputTag::Info);
        assert_stamped(&frames[3].message, "REMOTE", "x=5");
    }

    #[test]
    fn test_debug_enabled_emits_debug_label_on_info_path() {
        let (logger, buf) = capture_logger(&LogConfig::new(true, false));

        logger.debug(&["checking %s".into(), "cache".into()]).unwrap();

        let frames = frames(&buf);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].log, OutputTag::Info);
        assert_stamped(&frames[0].message, "DEBUG", "checking cache");
    }

    #[test]
    fn test_debug_disabled_is_noop() {
        let (logger, buf) = capture_logger(&LogConfig::default());

        logger.debug(&["invisible".into()]).unwrap();

        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_silent_suppresses_everything() {
        // silent wins even with debug enabled
        let (logger, buf) = capture_logger(&LogConfig::new(true, true));
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "a",
            record: record.clone(),
        }));

        logger.error(&["e".into()]).unwrap();
        logger.warn(&["w".into()]).unwrap();
        logger.info(&["i".into()]).unwrap();
        logger.remote(&["r".into()]).unwrap();
        logger.debug(&["d".into()]).unwrap();
        logger.write(&["raw".into()]).unwrap();

        assert!(buf.contents().is_empty());
        assert!(record.lock().is_empty());
    }

    #[test]
    fn test_write_emits_body_with_no_prefix() {
        let (logger, buf) = capture_logger(&LogConfig::default());

        logger.write(&["a".into(), "b".into()]).unwrap();

        let frames = frames(&buf);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].log, OutputTag::Info);
        assert_eq!(frames[0].message, "a b");
    }

    #[test]
    fn test_sinks_receive_raw_body_in_registration_order() {
        let (logger, _buf) = capture_logger(&LogConfig::default());
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "a",
            record: record.clone(),
        }));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "b",
            record: record.clone(),
        }));

        logger.error(&["boom".into()]).unwrap();

        assert_eq!(*record.lock(), vec!["a:boom", "b:boom"]);
    }

    #[test]
    fn test_warn_forwards_formatted_body_without_stamp() {
        let (logger, _buf) = capture_logger(&LogConfig::default());
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "a",
            record: record.clone(),
        }));

        logger.warn(&["x=%d".into(), 5.into()]).unwrap();

        // the sink sees the expanded body only, no timestamp or label
        assert_eq!(*record.lock(), vec!["a:x=5"]);
    }

    #[test]
    fn test_info_never_forwards() {
        let (logger, buf) = capture_logger(&LogConfig::default());
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "a",
            record: record.clone(),
        }));

        logger.info(&["quiet".into()]).unwrap();

        assert_eq!(frames(&buf).len(), 1);
        assert!(record.lock().is_empty());
    }

    #[test]
    fn test_remote_mirrors_locally_and_forwards() {
        let (logger, buf) = capture_logger(&LogConfig::default());
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "a",
            record: record.clone(),
        }));

        logger.remote(&["ping".into()]).unwrap();

        let frames = frames(&buf);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].log, OutputTag::Info);
        assert_stamped(&frames[0].message, "REMOTE", "ping");
        assert_eq!(*record.lock(), vec!["a:ping"]);
    }

    #[test]
    fn test_remote_with_no_sinks_still_mirrors() {
        let (logger, buf) = capture_logger(&LogConfig::default());

        logger.remote(&["ping".into()]).unwrap();

        assert_eq!(frames(&buf).len(), 1);
    }

    #[test]
    fn test_sink_failure_propagates_and_stops_iteration() {
        let (logger, buf) = capture_logger(&LogConfig::default());
        let record = Arc::new(Mutex::new(Vec::new()));
        logger.add_remote_logger(Arc::new(FailingSink));
        logger.add_remote_logger(Arc::new(RecordingSink {
            name: "late",
            record: record.clone(),
        }));

        let result = logger.error(&["boom".into()]);

        assert!(matches!(result, Err(LogError::Sink(_))));
        // the local line was already out before the sink failed
        assert_eq!(frames(&buf).len(), 1);
        assert!(record.lock().is_empty());
    }

    #[test]
    fn test_macros_expand_to_printf_calls() {
        let (logger, buf) = capture_logger(&LogConfig::new(true, false));

        log_error!(logger, "x=%d", 5).unwrap();
        log_warn!(logger, "w=%s", "v").unwrap();
        log_info!(logger, "plain").unwrap();
        log_remote!(logger, "ping").unwrap();
        log_debug!(logger, "d=%d", 1).unwrap();
        log_write!(logger, "a", "b").unwrap();

        let frames = frames(&buf);
        assert_eq!(frames.len(), 6);
        assert_stamped(&frames[0].message, "ERROR", "x=5");
        assert_stamped(&frames[1].message, "WARN", "w=v");
        assert_stamped(&frames[2].message, "INFO", "plain");
        assert_stamped(&frames[3].message, "REMOTE", "ping");
        assert_stamped(&frames[4].message, "DEBUG", "d=1");
        assert_eq!(frames[5].message, "a b");
    }

    #[test]
    fn test_standalone_env_binds_terminal_output() {
        let logger = Logger::new(&LogConfig::default(), RuntimeEnv::Standalone);
        assert!(matches!(logger.output, OutputTarget::Terminal));
    }

    #[test]
    fn test_child_env_binds_relay_output() {
        let logger = Logger::new(&LogConfig::default(), RuntimeEnv::ChildProcess);
        assert!(matches!(logger.output, OutputTarget::Relay(_)));
    }
}

//! Output target selection

use std::io::{self, Write};

use crate::relay::{OutputTag, RelayChannel};

use super::traits::LogResult;

/// Where finished lines go
///
/// Bound once, from the execution environment, at logger construction;
/// exactly one variant is active for the life of the instance.
#[derive(Debug)]
pub enum OutputTarget {
    /// Top-level process: error/warn lines to stderr, info lines to stdout
    Terminal,
    /// Child process: every line framed and relayed to the parent
    Relay(RelayChannel),
}

impl OutputTarget {
    /// Deliver one finished line through the given channel method
    pub fn emit(&self, tag: OutputTag, line: &str) -> LogResult<()> {
        match self {
            OutputTarget::Terminal => match tag {
                OutputTag::Error | OutputTag::Warn => {
                    writeln!(io::stderr().lock(), "{}", line)?;
                    Ok(())
                }
                OutputTag::Info => {
                    writeln!(io::stdout().lock(), "{}", line)?;
                    Ok(())
                }
            },
            OutputTarget::Relay(channel) => channel.send(tag, line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_emit_does_not_fail() {
        let target = OutputTarget::Terminal;
        target.emit(OutputTag::Info, "to stdout").unwrap();
        target.emit(OutputTag::Warn, "to stderr").unwrap();
        target.emit(OutputTag::Error, "to stderr").unwrap();
    }
}

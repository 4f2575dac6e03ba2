//! Bridge from the `log` facade into a named channel
//!
//! Libraries that log through `log::info!` and friends end up in the
//! channel's destinations, with the channel's name and line format.

use crate::error::{LogError, LogResult};
use crate::level::LogLevel;
use crate::logger::NamedLogger;

/// `log::Log` implementation that forwards records to a `NamedLogger`
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: NamedLogger,
}

impl LogBridge {
    pub fn new(logger: NamedLogger) -> Self {
        Self { logger }
    }

    /// The channel records are forwarded to
    pub fn logger(&self) -> &NamedLogger {
        &self.logger
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        self.logger
            .log_args(LogLevel::from(record.level()), *record.args());
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Install `logger` as the process-wide `log` facade backend
///
/// Fails with `LogError::AlreadyInstalled` if any `log` backend was
/// installed before.
pub fn install_global(logger: NamedLogger, max_level: log::LevelFilter) -> LogResult<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))
        .map_err(|_| LogError::AlreadyInstalled)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::{ConsoleDestination, MemoryWriter};
    use crate::logger::DEFAULT_LOG_FILE;
    use log::Log;

    #[test]
    fn test_bridge_forwards_records() {
        let logger = NamedLogger::new("bridged", DEFAULT_LOG_FILE);
        let out = MemoryWriter::new();
        logger.attach(ConsoleDestination::with_writer(out.clone()).with_threshold(LogLevel::Info));
        let bridge = LogBridge::new(logger);

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .target("some::module")
                .args(format_args!("from facade {}", 7))
                .build(),
        );

        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(!bridge.enabled(&debug));

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(" bridged      : "));
        assert!(lines[0].ends_with("WARNING : from facade 7"));
    }
}

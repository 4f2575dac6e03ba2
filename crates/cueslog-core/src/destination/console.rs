//! Console destination

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::{Destination, DestinationKind};
use crate::level::LevelFilter;

/// A destination that writes lines to the console
///
/// Defaults to stdout. Any writer can be injected with `with_writer`,
/// which is how tests capture console output.
pub struct ConsoleDestination {
    writer: Mutex<Box<dyn Write + Send>>,
    threshold: LevelFilter,
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleDestination {
    /// Create a console destination writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a console destination writing to a custom writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            threshold: LevelFilter::All,
        }
    }

    /// Only accept messages that pass `threshold`
    pub fn with_threshold(mut self, threshold: impl Into<LevelFilter>) -> Self {
        self.threshold = threshold.into();
        self
    }
}

impl Destination for ConsoleDestination {
    fn kind(&self) -> DestinationKind {
        DestinationKind::Console
    }

    fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl std::fmt::Debug for ConsoleDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleDestination")
            .field("threshold", &self.threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::MemoryWriter;
    use crate::level::LogLevel;

    #[test]
    fn test_console_destination_creation() {
        let console = ConsoleDestination::stdout();
        assert_eq!(console.kind(), DestinationKind::Console);
        assert_eq!(console.threshold(), LevelFilter::All);

        let strict = ConsoleDestination::stdout().with_threshold(LogLevel::Error);
        assert_eq!(strict.threshold(), LevelFilter::AtLeast(LogLevel::Error));
    }

    #[test]
    fn test_console_writes_lines() {
        let buffer = MemoryWriter::new();
        let console = ConsoleDestination::with_writer(buffer.clone());

        console.write_line("first").unwrap();
        console.write_line("second").unwrap();

        assert_eq!(buffer.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_stdout_does_not_panic() {
        let console = ConsoleDestination::default();
        console.write_line(" test         : 2024-01-01 00:00:00: INFO    : hello").unwrap();
        console.flush().unwrap();
    }
}

//! Destination trait definition

use std::fmt;
use std::io;

use crate::level::LevelFilter;

/// Tag identifying the kind of a destination
///
/// A channel holds at most one destination per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DestinationKind {
    Console,
    File,
}

impl DestinationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationKind::Console => "console",
            DestinationKind::File => "file",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sink for formatted log lines
///
/// Implementations:
/// - `ConsoleDestination`: stdout or an injected writer
/// - `FileDestination`: append-mode file
pub trait Destination: Send + Sync {
    /// Which kind of destination this is
    fn kind(&self) -> DestinationKind;

    /// Minimum level this destination accepts
    fn threshold(&self) -> LevelFilter {
        LevelFilter::All
    }

    /// Write one line; the destination appends the newline
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&self) -> io::Result<()>;
}

/// Type alias for a boxed destination
pub type BoxedDestination = Box<dyn Destination>;

//! Named logger handles
//!
//! A `NamedLogger` is a cheap, cloneable handle onto a channel: a name, a
//! channel-level gate and a tagged set of destinations. Handles obtained
//! for the same name from a `LoggerRegistry` share one channel.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::destination::{
    BoxedDestination, ConsoleDestination, Destination, DestinationKind, FileDestination,
};
use crate::error::LogResult;
use crate::format::Record;
use crate::level::{LevelFilter, LogLevel};
use crate::template;

/// Default file used by `attach_file` when no path is given
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// State shared by every handle of one channel
pub(crate) struct Channel {
    name: String,
    level: RwLock<LevelFilter>,
    destinations: RwLock<BTreeMap<DestinationKind, BoxedDestination>>,
}

impl Channel {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LevelFilter::All),
            destinations: RwLock::new(BTreeMap::new()),
        }
    }
}

/// Handle onto a named logging channel
///
/// # Example
///
/// ```no_run
/// use cueslog_core::{LoggerRegistry, LevelFilter};
///
/// let registry = LoggerRegistry::new();
/// let log = registry.get_or_create(Some("worker"));
/// log.attach_console();
/// log.attach_file(None, LevelFilter::All)?;
/// log.info("processed {} items", &[&42])?;
/// # Ok::<(), cueslog_core::LogError>(())
/// ```
#[derive(Clone)]
pub struct NamedLogger {
    channel: Arc<Channel>,
    default_file: PathBuf,
}

impl NamedLogger {
    /// Create a handle on a fresh channel that is not tracked by any registry
    pub fn new(name: impl Into<String>, default_file: impl Into<PathBuf>) -> Self {
        Self::from_channel(Arc::new(Channel::new(name)), default_file)
    }

    pub(crate) fn from_channel(channel: Arc<Channel>, default_file: impl Into<PathBuf>) -> Self {
        Self {
            channel,
            default_file: default_file.into(),
        }
    }

    /// Channel name
    pub fn name(&self) -> &str {
        &self.channel.name
    }

    /// File used by `attach_file` when no path is given
    pub fn default_file_path(&self) -> &Path {
        &self.default_file
    }

    /// Whether both handles point at the same channel
    pub fn same_channel(&self, other: &NamedLogger) -> bool {
        Arc::ptr_eq(&self.channel, &other.channel)
    }

    /// Channel-level gate, applied before any destination threshold
    pub fn level(&self) -> LevelFilter {
        *self.channel.level.read()
    }

    /// Set the channel-level gate
    pub fn set_level(&self, level: impl Into<LevelFilter>) {
        *self.channel.level.write() = level.into();
    }

    /// Register a destination unless one of the same kind is present
    ///
    /// Returns `true` if the destination was added.
    pub fn attach(&self, destination: impl Destination + 'static) -> bool {
        let mut destinations = self.channel.destinations.write();
        match destinations.entry(destination.kind()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Box::new(destination));
                true
            }
        }
    }

    /// Register a stdout destination unless a console destination is present
    pub fn attach_console(&self) -> bool {
        self.attach(ConsoleDestination::stdout())
    }

    /// Register an append-mode file destination unless a file destination is present
    ///
    /// Uses the handle's default path when `path` is `None` or empty.
    /// Messages below `threshold` are not written to the file. If a file
    /// destination is already registered, no file is opened.
    pub fn attach_file(
        &self,
        path: Option<&Path>,
        threshold: impl Into<LevelFilter>,
    ) -> LogResult<bool> {
        let mut destinations = self.channel.destinations.write();
        match destinations.entry(DestinationKind::File) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                let path = path
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(&self.default_file);
                slot.insert(Box::new(FileDestination::open(path, threshold)?));
                Ok(true)
            }
        }
    }

    /// Whether a destination of `kind` is registered
    pub fn has_destination(&self, kind: DestinationKind) -> bool {
        self.channel.destinations.read().contains_key(&kind)
    }

    /// Kinds of all registered destinations
    pub fn destination_kinds(&self) -> Vec<DestinationKind> {
        self.channel.destinations.read().keys().copied().collect()
    }

    /// Whether a message at `level` would be written anywhere
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
            && self
                .channel
                .destinations
                .read()
                .values()
                .any(|d| d.threshold().allows(level))
    }

    /// Log a message built from a runtime template
    ///
    /// The template is only rendered if some destination accepts `level`.
    /// Template errors are returned and nothing is written.
    pub fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let message = template::render(template, args)?;
        self.dispatch(level, &message);
        Ok(())
    }

    /// Log a message built with `format_args!`
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, &args.to_string());
    }

    /// Log a trace message
    pub fn trace(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Trace, template, args)
    }

    /// Log a debug message
    pub fn debug(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Debug, template, args)
    }

    /// Log an info message
    pub fn info(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Info, template, args)
    }

    /// Log a warning message
    pub fn warn(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Warn, template, args)
    }

    /// Log an error message
    pub fn error(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Error, template, args)
    }

    /// Log a fatal message
    pub fn fatal(&self, template: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log(LogLevel::Fatal, template, args)
    }

    /// Flush every destination
    pub fn flush(&self) {
        for destination in self.channel.destinations.read().values() {
            let _ = destination.flush();
        }
    }

    /// Flush and drop every destination, closing any open file
    pub fn close(&self) {
        let mut destinations = self.channel.destinations.write();
        for destination in destinations.values() {
            let _ = destination.flush();
        }
        destinations.clear();
    }

    fn dispatch(&self, level: LogLevel, message: &str) {
        let line = Record::now(self.name(), level, message).to_line();
        for destination in self.channel.destinations.read().values() {
            if destination.threshold().allows(level) {
                // A failing sink must not affect the caller or the other sinks
                let _ = destination.write_line(&line);
            }
        }
    }
}

impl fmt::Debug for NamedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedLogger")
            .field("name", &self.channel.name)
            .field("default_file", &self.default_file)
            .field("level", &self.level())
            .field("destinations", &self.destination_kinds())
            .finish()
    }
}

/// Log at an explicit level with `format!` syntax
#[macro_export]
macro_rules! cues_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log_args($level, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Trace, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cues_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_args($crate::LogLevel::Fatal, format_args!($($arg)*))
    };
}

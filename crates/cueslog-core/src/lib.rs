//! Cueslog Core
//!
//! Named logging channels with a fixed line format and console and/or file
//! destinations. Nothing is created or opened until the application asks
//! for it: the application owns a `LoggerRegistry`, requests channels by
//! name, and attaches destinations. Attaching is idempotent per
//! destination kind, so repeated initialization never duplicates output.
//!
//! Every destination writes lines of the form
//!
//! ```text
//!  host1        : 2024-01-01 00:00:00: INFO    : started
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cueslog_core::{cues_info, LevelFilter, LogLevel, LoggerRegistry};
//!
//! let registry = LoggerRegistry::new();
//!
//! // Channel named after the host, default file "log.txt"
//! let log = registry.get_or_create(None);
//! log.attach_console();
//! log.attach_file(None, LevelFilter::AtLeast(LogLevel::Info))?;
//!
//! log.debug("console only: {}", &[&"details"])?;
//! cues_info!(log, "listening on port {}", 8080);
//!
//! registry.shutdown();
//! # Ok::<(), cueslog_core::LogError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod destination;
pub mod error;
pub mod format;
pub mod host;
pub mod level;
pub mod logger;
pub mod registry;
pub mod template;

// Re-export commonly used types
pub use bridge::{install_global, LogBridge};
pub use config::LoggerConfig;
pub use destination::{
    BoxedDestination, ConsoleDestination, Destination, DestinationKind, FileDestination,
    MemoryWriter,
};
pub use error::{LogError, LogResult};
pub use format::{format_line, Record, TIMESTAMP_FORMAT};
pub use level::{LevelFilter, LogLevel};
pub use logger::{NamedLogger, DEFAULT_LOG_FILE};
pub use registry::LoggerRegistry;
pub use template::TemplateError;

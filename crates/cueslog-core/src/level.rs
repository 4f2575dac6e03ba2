//! Severity levels and per-destination thresholds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Log levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// All levels from least to most severe
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Name printed in the level column
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    // `pad` so that width specifiers like `{:<8}` apply
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" | "critical" => Ok(LogLevel::Fatal),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self, LogError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_lowercase()
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

/// Minimum level a channel or destination lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Log everything
    #[default]
    All,
    /// Drop messages below the given level
    AtLeast(LogLevel),
}

impl LevelFilter {
    /// Whether a message at `level` passes this filter
    pub fn allows(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::AtLeast(min) => level >= *min,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::AtLeast(level)
    }
}

impl From<Option<LogLevel>> for LevelFilter {
    fn from(level: Option<LogLevel>) -> Self {
        level.map_or(LevelFilter::All, LevelFilter::AtLeast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Fatal > LogLevel::Error);
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:<8}|", LogLevel::Info), "INFO    |");
        assert_eq!(format!("{:<8}|", LogLevel::Warn), "WARNING |");
        assert_eq!(format!("{:<8}|", LogLevel::Fatal), "CRITICAL|");
    }

    #[test]
    fn test_parse() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" Warn ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LogError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_filter() {
        assert!(LevelFilter::All.allows(LogLevel::Trace));

        let filter = LevelFilter::AtLeast(LogLevel::Warn);
        assert!(!filter.allows(LogLevel::Info));
        assert!(filter.allows(LogLevel::Warn));
        assert!(filter.allows(LogLevel::Fatal));

        assert_eq!(LevelFilter::from(None), LevelFilter::All);
        assert_eq!(
            LevelFilter::from(Some(LogLevel::Error)),
            LevelFilter::AtLeast(LogLevel::Error)
        );
    }

    #[test]
    fn test_from_facade_level() {
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warn);
        assert_eq!(LogLevel::from(log::Level::Trace), LogLevel::Trace);
    }
}

//! The fixed line format shared by every destination
//!
//! ```text
//!  <name padded to 13>: <YYYY-MM-DD HH:MM:SS>: <LEVEL padded to 8>: <message>
//! ```

use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::level::LogLevel;

/// Timestamp pattern used in the second column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width the channel name is padded to
pub const NAME_WIDTH: usize = 13;

/// Width the level name is padded to
pub const LEVEL_WIDTH: usize = 8;

/// A single formatted log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn now(name: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: Local::now().naive_local(),
            level,
            message: message.into(),
        }
    }

    /// Render as a single line, without the trailing newline
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_line(&self.name, &self.timestamp, self.level, &self.message))
    }
}

/// Format one line from its parts
pub fn format_line(name: &str, timestamp: &NaiveDateTime, level: LogLevel, message: &str) -> String {
    format!(
        " {:<name_w$}: {}: {:<level_w$}: {}",
        name,
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        message,
        name_w = NAME_WIDTH,
        level_w = LEVEL_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_year() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_line_exact() {
        let line = format_line("host1", &new_year(), LogLevel::Info, "started");
        assert_eq!(line, " host1        : 2024-01-01 00:00:00: INFO    : started");
    }

    #[test]
    fn test_record_matches_format_line() {
        let record = Record {
            name: "worker".to_string(),
            timestamp: new_year(),
            level: LogLevel::Warn,
            message: "disk almost full".to_string(),
        };
        assert_eq!(
            record.to_line(),
            format_line("worker", &new_year(), LogLevel::Warn, "disk almost full")
        );
        assert_eq!(
            record.to_line(),
            " worker       : 2024-01-01 00:00:00: WARNING : disk almost full"
        );
    }

    #[test]
    fn test_long_name_not_truncated() {
        let line = format_line("a-very-long-host-name", &new_year(), LogLevel::Debug, "x");
        assert!(line.starts_with(" a-very-long-host-name: "));
    }

    #[test]
    fn test_record_now_uses_timestamp_pattern() {
        let record = Record::now("n", LogLevel::Info, "m");
        let stamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(stamp.len(), "2024-01-01 00:00:00".len());
        assert!(record.to_line().contains(&stamp));
    }
}

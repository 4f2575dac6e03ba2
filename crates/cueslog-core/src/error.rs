//! Error types for channel setup, message formatting and configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateError;

/// Errors that can occur while configuring or writing to a channel
#[derive(Error, Debug)]
pub enum LogError {
    /// A file destination could not be opened for appending
    #[error("Failed to open log file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The message template did not match its arguments
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// A level name could not be parsed
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// A global `log` facade logger is already installed
    #[error("A global logger is already installed")]
    AlreadyInstalled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create a file-open error for `path`
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

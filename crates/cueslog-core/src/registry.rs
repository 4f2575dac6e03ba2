//! Registry of named channels
//!
//! The application owns a `LoggerRegistry` and hands it (or handles from
//! it) to the code that logs. Asking for the same name twice yields the
//! same channel, so repeated initialization is cheap and does not
//! duplicate destinations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::host;
use crate::level::LevelFilter;
use crate::logger::{Channel, NamedLogger, DEFAULT_LOG_FILE};

/// Registry mapping channel names to channels
#[derive(Default)]
pub struct LoggerRegistry {
    channels: RwLock<HashMap<String, Arc<Channel>>>,
}

impl LoggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Get a handle for `name` (or the host name when absent or empty), creating the channel on first use
    ///
    /// `default_file` becomes the handle's default path for `attach_file`.
    /// It belongs to the returned handle only, not to the shared channel.
    pub fn create(&self, name: Option<&str>, default_file: Option<PathBuf>) -> NamedLogger {
        let name = name.filter(|n| !n.is_empty()).unwrap_or_else(|| host::hostname());
        let default_file = default_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        if let Some(channel) = self.channels.read().get(name) {
            return NamedLogger::from_channel(Arc::clone(channel), default_file);
        }

        let mut channels = self.channels.write();
        let channel = channels
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Channel::new(name)));
        NamedLogger::from_channel(Arc::clone(channel), default_file)
    }

    /// Get a handle for `name` (or the host name) with the default file path
    pub fn get_or_create(&self, name: Option<&str>) -> NamedLogger {
        self.create(name, None)
    }

    /// Get a handle for an existing channel
    pub fn get(&self, name: &str) -> Option<NamedLogger> {
        self.channels
            .read()
            .get(name)
            .map(|channel| NamedLogger::from_channel(Arc::clone(channel), DEFAULT_LOG_FILE))
    }

    /// Check if a channel exists
    pub fn contains(&self, name: &str) -> bool {
        self.channels.read().contains_key(name)
    }

    /// List all channel names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.channels.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }

    /// Create a handle and attach destinations as described by `config`
    ///
    /// Attaching is idempotent, so applying the same config twice leaves a
    /// single console and a single file destination.
    pub fn configure(&self, config: &LoggerConfig) -> LogResult<NamedLogger> {
        let logger = self.create(config.name.as_deref(), config.file.clone());

        if let Some(level) = config.level {
            logger.set_level(level);
        }
        if config.console {
            logger.attach_console();
        }
        if config.file.is_some() {
            logger.attach_file(None, LevelFilter::from(config.file_level))?;
        }

        Ok(logger)
    }

    /// Flush and close every destination of every channel
    pub fn shutdown(&self) {
        for channel in self.channels.read().values() {
            NamedLogger::from_channel(Arc::clone(channel), DEFAULT_LOG_FILE).close();
        }
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("channels", &self.names())
            .finish()
    }
}

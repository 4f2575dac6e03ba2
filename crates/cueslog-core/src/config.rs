//! Logger configuration
//!
//! Loaded from a YAML (or JSON) file and optionally overridden from the
//! environment:
//!
//! ```yaml
//! name: worker
//! file: /var/log/worker.log
//! console: true
//! file_level: info
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::level::LogLevel;

/// Environment variable overriding the channel name
pub const ENV_NAME: &str = "CUESLOG_NAME";
/// Environment variable overriding the log file path
pub const ENV_FILE: &str = "CUESLOG_FILE";
/// Environment variable overriding the channel-level gate
pub const ENV_LEVEL: &str = "CUESLOG_LEVEL";
/// Environment variable overriding the file threshold
pub const ENV_FILE_LEVEL: &str = "CUESLOG_FILE_LEVEL";
/// Environment variable toggling the console destination
pub const ENV_CONSOLE: &str = "CUESLOG_CONSOLE";

/// How a channel should be set up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Channel name; the host name when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File destination path; no file destination when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Attach a console destination
    pub console: bool,

    /// Minimum level written to the file; everything when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_level: Option<LogLevel>,

    /// Channel-level gate; everything when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            file: None,
            console: true,
            file_level: None,
            level: None,
        }
    }
}

impl LoggerConfig {
    /// User-level config location (~/.config/cueslog/config.yaml)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("cueslog").join("config.yaml")
    }

    /// Load config from `path`
    ///
    /// A missing file yields the defaults. Files ending in `.json` are read
    /// as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if is_json(path) {
            serde_json::from_str(&content)
                .map_err(|e| LogError::Config(format!("Failed to parse JSON: {}", e)))
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse config from a YAML string
    pub fn from_yaml(content: &str) -> LogResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Save config to `path` as YAML (or JSON for `.json` paths)
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| LogError::Config(format!("Failed to serialize JSON: {}", e)))?
        } else {
            serde_yaml::to_string(self)
                .map_err(|e| LogError::Config(format!("Failed to serialize YAML: {}", e)))?
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> LogResult<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        if let Some(name) = lookup(ENV_NAME).filter(|v| !v.is_empty()) {
            self.name = Some(name);
        }
        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.is_empty()) {
            self.file = Some(PathBuf::from(file));
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = Some(level.parse()?);
        }
        if let Some(level) = lookup(ENV_FILE_LEVEL) {
            self.file_level = Some(level.parse()?);
        }
        if let Some(console) = lookup(ENV_CONSOLE) {
            self.console = console == "1" || console.to_lowercase() == "true";
        }
        Ok(self)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

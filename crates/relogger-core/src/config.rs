//! Logger configuration
//!
//! `LoggerConfig` can be built in code or deserialized as part of an
//! application's own config file:
//!
//! ```yaml
//! logging:
//!   file: /var/log/app.log
//!   level: info
//!   enabled: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Startup settings for a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file to mirror records into; console-only when absent or empty
    pub file: Option<PathBuf>,
    /// Minimum severity that is emitted
    pub level: LogLevel,
    /// Master switch for record emission
    pub enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: LogLevel::Trace,
            enabled: true,
        }
    }
}

impl LoggerConfig {
    /// Create a console-only config that emits everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror records into a log file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the minimum severity
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable record emission
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// File path, if one is configured and non-empty
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.file, None);
        assert_eq!(config.level, LogLevel::Trace);
        assert!(config.enabled);
        assert_eq!(config.file_path(), None);
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::new()
            .with_file("app.log")
            .with_level(LogLevel::Warn)
            .with_enabled(false);

        assert_eq!(config.file_path(), Some(Path::new("app.log")));
        assert_eq!(config.level, LogLevel::Warn);
        assert!(!config.enabled);
    }

    #[test]
    fn test_empty_path_is_console_only() {
        let config = LoggerConfig::new().with_file("");
        assert_eq!(config.file_path(), None);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig = serde_json::from_str(r#"{"level": "error"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert!(config.enabled);
        assert_eq!(config.file, None);

        let config: LoggerConfig =
            serde_json::from_str(r#"{"file": "/tmp/app.log", "enabled": false}"#).unwrap();
        assert_eq!(config.file_path(), Some(Path::new("/tmp/app.log")));
        assert!(!config.enabled);
    }
}

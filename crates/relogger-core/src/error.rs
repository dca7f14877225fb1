//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or writing log output
///
/// None of these ever escape [`Logger::log`](crate::Logger::log); they are
/// returned only by the fallible entry points (`try_init`, level parsing) and
/// otherwise rendered as console warnings.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Log file could not be created or truncated
    #[error("Could not open log file '{}' (error: {source})", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing a record to the log file failed
    #[error("Could not write to log file '{}' (error: {source})", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A level name did not match any known severity
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        Self::InvalidLevel(name.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_open_message() {
        let err = LoggerError::file_open(
            "/nope/app.log",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Could not open log file '/nope/app.log' (error: No such file or directory)"
        );
    }

    #[test]
    fn test_invalid_level_message() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Unknown log level: verbose");
    }
}

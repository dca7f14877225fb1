//! No-op logger implementation

use super::traits::Log;
use crate::level::LogLevel;
use crate::location::Location;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Log for NoOpLogger {
    fn log(&self, _level: LogLevel, _message: &str, _location: Location) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

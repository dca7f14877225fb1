//! Process-wide logger
//!
//! A lazily created [`Logger`] on the process stdout/stderr, for programs that
//! prefer a single global over passing a logger around. The instance lives for
//! the whole process, so call [`shutdown`] before exiting to close the file.

use std::path::Path;

use once_cell::sync::Lazy;

use super::logger::Logger;
use crate::level::LogLevel;
use crate::location::Location;

/// Global logger instance
static LOGGER: Lazy<Logger> = Lazy::new(Logger::stdio);

/// The process-wide logger
pub fn global() -> &'static Logger {
    &LOGGER
}

/// Open the global log file; see [`Logger::init`]
pub fn init(path: impl AsRef<Path>) {
    LOGGER.init(path);
}

/// Close the global log file; see [`Logger::shutdown`]
pub fn shutdown() {
    LOGGER.shutdown();
}

pub fn set_level(level: LogLevel) {
    LOGGER.set_level(level);
}

pub fn get_level() -> LogLevel {
    LOGGER.level()
}

/// Log a message at the specified level
pub fn log(level: LogLevel, message: &str, location: Location) {
    LOGGER.log(level, message, location);
}

/// Convenience macros for logging through the global logger with automatic
/// call-site capture
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Trace, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Debug, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Info, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Warn, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Error, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)*) => {
        $crate::LogExt::log_fmt($crate::global(), $crate::LogLevel::Fatal, format_args!($($arg)*), $crate::location!())
    };
}

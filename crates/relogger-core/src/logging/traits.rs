//! Log trait definition

use std::fmt;
use std::sync::Arc;

use crate::level::LogLevel;
use crate::location::Location;

/// Anything that accepts leveled records
///
/// Implementations:
/// - `Logger`: colored console plus optional plain-text file
/// - `NoOpLogger`: Silent logger for testing
pub trait Log: Send + Sync {
    /// Emit a record; must never fail or panic on sink errors
    fn log(&self, level: LogLevel, message: &str, location: Location);

    /// Whether a record at `level` would currently be emitted
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn trace(&self, message: &str, location: Location) {
        self.log(LogLevel::Trace, message, location);
    }

    fn debug(&self, message: &str, location: Location) {
        self.log(LogLevel::Debug, message, location);
    }

    fn info(&self, message: &str, location: Location) {
        self.log(LogLevel::Info, message, location);
    }

    fn warn(&self, message: &str, location: Location) {
        self.log(LogLevel::Warn, message, location);
    }

    fn error(&self, message: &str, location: Location) {
        self.log(LogLevel::Error, message, location);
    }

    fn fatal(&self, message: &str, location: Location) {
        self.log(LogLevel::Fatal, message, location);
    }
}

impl<T: Log + ?Sized> Log for &T {
    fn log(&self, level: LogLevel, message: &str, location: Location) {
        (**self).log(level, message, location);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }
}

impl<T: Log + ?Sized> Log for Box<T> {
    fn log(&self, level: LogLevel, message: &str, location: Location) {
        (**self).log(level, message, location);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }
}

impl<T: Log + ?Sized> Log for Arc<T> {
    fn log(&self, level: LogLevel, message: &str, location: Location) {
        (**self).log(level, message, location);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Log>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Log>;

/// Extension trait for logging with format arguments
pub trait LogExt: Log {
    /// Format and emit a record, skipping the formatting when filtered out
    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>, location: Location) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.log(level, message, location),
            None => self.log(level, &args.to_string(), location),
        }
    }
}

// Implement LogExt for all Log implementations
impl<T: Log + ?Sized> LogExt for T {}

/// Convenience macros for logging through a specific logger, capturing the
/// call site automatically
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Trace, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Debug, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Info, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Warn, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Error, format_args!($($arg)*), $crate::location!())
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::LogExt::log_fmt(&$logger, $crate::LogLevel::Fatal, format_args!($($arg)*), $crate::location!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        min: Option<LogLevel>,
        records: Mutex<Vec<(LogLevel, String, Location)>>,
    }

    impl Log for Recorder {
        fn log(&self, level: LogLevel, message: &str, location: Location) {
            self.records.lock().push((level, message.to_string(), location));
        }

        fn enabled(&self, level: LogLevel) -> bool {
            self.min.map_or(true, |min| level >= min)
        }
    }

    #[test]
    fn test_level_methods() {
        let recorder = Recorder::default();
        let here = crate::location!();

        recorder.trace("t", here);
        recorder.debug("d", here);
        recorder.info("i", here);
        recorder.warn("w", here);
        recorder.error("e", here);
        recorder.fatal("f", here);

        let levels: Vec<LogLevel> = recorder.records.lock().iter().map(|r| r.0).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_macros_capture_call_site() {
        let recorder = Recorder::default();
        crate::log_warn!(recorder, "low on {} ({}%)", "disk", 5);

        let records = recorder.records.lock();
        let (level, message, location) = &records[0];
        assert_eq!(*level, LogLevel::Warn);
        assert_eq!(message, "low on disk (5%)");
        assert_eq!(location.file, file!());
        assert_eq!(location.function, "test_macros_capture_call_site");
    }

    #[test]
    fn test_macros_skip_filtered_levels() {
        let recorder = Recorder {
            min: Some(LogLevel::Error),
            ..Default::default()
        };
        crate::log_info!(recorder, "ignored");
        crate::log_error!(recorder, "kept");

        let records = recorder.records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1, "kept");
    }

    #[test]
    fn test_shared_logger() {
        let recorder = Arc::new(Recorder::default());
        let shared: SharedLogger = recorder.clone();
        let by_ref = &shared;

        crate::log_debug!(shared, "via arc");
        crate::log_fatal!(by_ref, "via ref");

        assert_eq!(recorder.records.lock().len(), 2);
    }
}

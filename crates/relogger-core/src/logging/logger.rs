//! Leveled console + file logger
//!
//! A `Logger` is owned by the application's composition root and shared by
//! reference (or `Arc`) with everything that logs. Several independent
//! instances can coexist, each with its own console streams and file.
//!
//! Every emitted record is formatted and written to both sinks while holding a
//! single lock, so lines never interleave and both sinks see records in the
//! same order. The lock is not re-entrant: calling back into the same logger
//! from inside a sink writer (or a signal handler) deadlocks and is not
//! supported.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use chrono::Local;
use parking_lot::Mutex;

use super::traits::Log;
use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::format::{colorize, format_record, timestamp};
use crate::level::LogLevel;
use crate::location::Location;
use crate::sinks::{Console, FileSink};

/// Sink state guarded by the logger lock
#[derive(Debug)]
struct SinkState {
    console: Console,
    file: Option<FileSink>,
    /// Set after the first failed file write so the warning is shown once
    write_failed: bool,
}

impl SinkState {
    fn write_file(&mut self, line: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(e) = file.write_line(line) {
            if !self.write_failed {
                self.write_failed = true;
                self.console.warn(&e.to_string());
            }
        }
    }

    fn close_file(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.close() {
                self.console.warn(&e.to_string());
            }
        }
        self.write_failed = false;
    }
}

/// Thread-safe leveled logger
#[derive(Debug)]
pub struct Logger {
    threshold: AtomicU8,
    enabled: AtomicBool,
    state: Mutex<SinkState>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdio()
    }
}

impl Logger {
    /// Create a console-only logger that emits every level
    pub fn new(console: Console) -> Self {
        Self {
            threshold: AtomicU8::new(LogLevel::Trace as u8),
            enabled: AtomicBool::new(true),
            state: Mutex::new(SinkState {
                console,
                file: None,
                write_failed: false,
            }),
        }
    }

    /// Create a console-only logger on the process stdout/stderr
    pub fn stdio() -> Self {
        Self::new(Console::stdio())
    }

    /// Create a logger on the process stdout/stderr from a config
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::with_config(Console::stdio(), config)
    }

    /// Create a logger on a custom console from a config
    ///
    /// A file that cannot be opened produces a console warning and a
    /// console-only logger, exactly like [`init`](Self::init).
    pub fn with_config(console: Console, config: &LoggerConfig) -> Self {
        let logger = Self::new(console);
        logger.set_level(config.level);
        logger.set_enabled(config.enabled);
        if let Some(path) = config.file_path() {
            logger.init(path);
        }
        logger
    }

    /// Open `path` as the log file, truncating it
    ///
    /// An empty path means console-only. A file that is already open is
    /// flushed and closed first. If the file cannot be opened a warning is
    /// written to the console error stream and logging continues console-only.
    pub fn init(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock();
        state.close_file();
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return;
        }
        match FileSink::open(path) {
            Ok(file) => state.file = Some(file),
            Err(e) => state.console.warn(&e.to_string()),
        }
    }

    /// Like [`init`](Self::init), but report an open failure to the caller
    /// instead of warning on the console
    pub fn try_init(&self, path: impl AsRef<Path>) -> LoggerResult<()> {
        let mut state = self.state.lock();
        state.close_file();
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        state.file = Some(FileSink::open(path)?);
        Ok(())
    }

    /// Flush and close the log file; a no-op when none is open
    pub fn shutdown(&self) {
        self.state.lock().close_file();
    }

    /// Set the minimum severity; applies to the next `log` call
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Current minimum severity
    pub fn level(&self) -> LogLevel {
        LogLevel::from_raw(self.threshold.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Turn record emission on or off
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Whether a record at `level` passes the switch and the threshold
    pub fn would_log(&self, level: LogLevel) -> bool {
        self.is_enabled() && (level as u8) >= self.threshold.load(Ordering::Acquire)
    }

    /// Check if a log file is currently open
    pub fn has_file_sink(&self) -> bool {
        self.state.lock().file.is_some()
    }

    /// Path of the open log file, if any
    pub fn file_path(&self) -> Option<std::path::PathBuf> {
        self.state.lock().file.as_ref().map(|f| f.path().to_path_buf())
    }

    /// Emit one record to the console and, if open, the log file
    ///
    /// Filtered-out records return before taking the lock. Sink failures are
    /// never reported to the caller.
    pub fn log(&self, level: LogLevel, message: &str, location: Location) {
        if !self.would_log(level) {
            return;
        }

        let mut state = self.state.lock();
        let now = Local::now();
        let line = format_record(&timestamp(&now), level, &location, message);
        state.console.write_line(level, &colorize(level, &line));
        state.write_file(&line);
    }
}

impl Log for Logger {
    fn log(&self, level: LogLevel, message: &str, location: Location) {
        Logger::log(self, level, message, location);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.would_log(level)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.state.get_mut().close_file();
    }
}

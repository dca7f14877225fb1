//! RELogger Core
//!
//! A small, thread-safe, level-filtered logger. Every record is written as one
//! colored line to the console (stderr for `Error` and `Fatal`, stdout
//! otherwise) and, when a log file is open, as the same line without colors to
//! that file, flushed immediately:
//!
//! ```text
//! [HH:MM:SS] LEVEL file:line (function) - message
//! ```
//!
//! ## Usage
//!
//! Build a [`Logger`] at the composition root and hand out references:
//!
//! ```no_run
//! use relogger_core::{log_error, log_info, LogLevel, Logger};
//!
//! let logger = Logger::stdio();
//! logger.init("app.log");
//! logger.set_level(LogLevel::Info);
//!
//! log_info!(logger, "Application started successfully!");
//! log_error!(logger, "disk full on {}", "/var");
//!
//! logger.shutdown();
//! ```
//!
//! Or use the process-wide facade:
//!
//! ```no_run
//! use relogger_core::{info_log, logging::global, LogLevel};
//!
//! global::init("app.log");
//! global::set_level(LogLevel::Debug);
//! info_log!("ready");
//! global::shutdown();
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod location;
pub mod logging;
pub mod sinks;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use level::{level_color, level_name, LogLevel, RESET};
pub use location::Location;
pub use logging::{global, BoxedLogger, Log, LogExt, Logger, NoOpLogger, SharedLogger};
pub use sinks::{Console, FileSink, MemoryBuffer};

//! Console sink

use std::fmt;
use std::io::{self, Write};

use crate::level::LogLevel;

type Writer = Box<dyn Write + Send>;

/// Console output, split into a standard and an error stream
///
/// Records at `Error` and above go to the error stream, everything else to the
/// standard stream. Write failures are ignored: console output is best-effort.
pub struct Console {
    out: Writer,
    err: Writer,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdio()
    }
}

impl Console {
    /// Console writing to the process stdout/stderr
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Console writing to custom streams
    pub fn with_writers(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Write one line to the stream selected by `level`
    pub fn write_line(&mut self, level: LogLevel, line: &str) {
        let stream = if level.is_error_stream() {
            &mut self.err
        } else {
            &mut self.out
        };
        let _ = writeln!(stream, "{}", line);
        let _ = stream.flush();
    }

    /// Write a logger diagnostic to the error stream
    pub fn warn(&mut self, message: &str) {
        let _ = writeln!(self.err, "Warning: {}", message);
        let _ = self.err.flush();
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemoryBuffer;

    #[test]
    fn test_console_routing() {
        let out = MemoryBuffer::new();
        let err = MemoryBuffer::new();
        let mut console = Console::with_writers(out.clone(), err.clone());

        for level in LogLevel::ALL {
            console.write_line(level, level.as_str());
        }

        assert_eq!(out.lines(), vec!["TRACE", "DEBUG", "INFO", "WARN"]);
        assert_eq!(err.lines(), vec!["ERROR", "FATAL"]);
    }

    #[test]
    fn test_console_warn() {
        let out = MemoryBuffer::new();
        let err = MemoryBuffer::new();
        let mut console = Console::with_writers(out.clone(), err.clone());

        console.warn("something odd");

        assert!(out.is_empty());
        assert_eq!(err.contents(), "Warning: something odd\n");
    }

    #[test]
    fn test_console_stdio() {
        // This test just verifies writing to the real streams doesn't panic
        let mut console = Console::stdio();
        console.write_line(LogLevel::Info, "info message");
        console.write_line(LogLevel::Error, "error message");
    }
}

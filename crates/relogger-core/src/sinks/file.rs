//! File sink

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LoggerError, LoggerResult};

/// Plain-text log file
///
/// Opening truncates any existing content. Every line is flushed as soon as it
/// is written so concurrent readers of the file see it immediately.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create or truncate the file at `path`
    pub fn open(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LoggerError::file_open(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Path the sink was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line and flush it to disk
    pub fn write_line(&mut self, line: &str) -> LoggerResult<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::write(&self.path, e))
    }

    /// Flush and close the file
    pub fn close(mut self) -> LoggerResult<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::write(&self.path, e))
    }
}

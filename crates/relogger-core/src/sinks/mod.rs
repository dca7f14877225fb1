//! Output destinations for rendered records
//!
//! - `Console`: colored lines routed to stdout/stderr by severity
//! - `FileSink`: plain lines, truncated on open, flushed per record
//! - `MemoryBuffer`: in-memory writer for tests and embedders

mod console;
mod file;
mod memory;

pub use console::Console;
pub use file::FileSink;
pub use memory::MemoryBuffer;

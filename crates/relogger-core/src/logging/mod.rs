//! Logger, log trait and the process-wide facade

mod traits;
mod noop;
mod logger;
pub mod global;

pub use traits::{BoxedLogger, Log, LogExt, SharedLogger};
pub use noop::NoOpLogger;
pub use logger::Logger;
pub use global::global;

//! Appender trait for log output destinations

use super::error::Result;

/// A destination for formatted text blocks.
///
/// Each call to `append` receives one complete block, terminator included,
/// and must write it in a single operation so concurrent blocks do not
/// interleave.
pub trait Appender: Send + Sync {
    fn append(&mut self, block: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

//! Stream appender implementation

use super::memory::SharedBuffer;
use crate::core::{Appender, Result};
use std::io::{self, Write};

#[derive(Debug, Clone)]
enum Target {
    Stderr,
    Stdout,
    Buffer(SharedBuffer),
}

/// Writes blocks to a process stream or a [`SharedBuffer`].
///
/// Each block is written under the stream lock and flushed immediately.
pub struct StreamAppender {
    target: Target,
}

impl StreamAppender {
    /// Standard error, the default channel destination
    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Write into an in-memory buffer
    ///
    /// # Example
    ///
    /// ```
    /// use channel_logger::appenders::{SharedBuffer, StreamAppender};
    /// use channel_logger::Appender;
    ///
    /// let buffer = SharedBuffer::new();
    /// let mut appender = StreamAppender::buffer(buffer.clone());
    /// appender.append("\nhello\n").unwrap();
    /// assert_eq!(buffer.contents(), "\nhello\n");
    /// ```
    pub fn buffer(buffer: SharedBuffer) -> Self {
        Self {
            target: Target::Buffer(buffer),
        }
    }
}

impl Default for StreamAppender {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Appender for StreamAppender {
    fn append(&mut self, block: &str) -> Result<()> {
        match self.target {
            Target::Stderr => {
                let mut stream = io::stderr().lock();
                stream.write_all(block.as_bytes())?;
                stream.flush()?;
            }
            Target::Stdout => {
                let mut stream = io::stdout().lock();
                stream.write_all(block.as_bytes())?;
                stream.flush()?;
            }
            Target::Buffer(ref mut buffer) => buffer.write_all(block.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            Target::Stderr => io::stderr().flush()?,
            Target::Stdout => io::stdout().flush()?,
            Target::Buffer(_) => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            Target::Stderr => "stderr",
            Target::Stdout => "stdout",
            Target::Buffer(_) => "buffer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(StreamAppender::default().name(), "stderr");
        assert_eq!(StreamAppender::stdout().name(), "stdout");
        assert_eq!(StreamAppender::buffer(SharedBuffer::new()).name(), "buffer");
    }

    #[test]
    fn test_buffer_appends_in_order() {
        let buffer = SharedBuffer::new();
        let mut appender = StreamAppender::buffer(buffer.clone());
        appender.append("\nfirst\n").unwrap();
        appender.append("\nsecond\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(buffer.contents(), "\nfirst\n\nsecond\n");
    }
}

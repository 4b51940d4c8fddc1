//! Handlers: level threshold, filters, formatter and sink

use super::appender::Appender;
use super::error::Result;
use super::filter::Filter;
use super::formatter::Formatter;
use super::log_level::LogLevel;
use super::log_record::LogRecord;

/// Terminator written after every formatted block
pub const TERMINATOR: &str = "\n";

/// Accepts records at or above `level` that pass every filter, formats
/// them and writes them to its appender.
pub struct Handler {
    name: String,
    level: LogLevel,
    filters: Vec<Box<dyn Filter>>,
    formatter: Formatter,
    appender: Box<dyn Appender>,
}

impl Handler {
    pub fn new(name: impl Into<String>, appender: Box<dyn Appender>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            filters: Vec::new(),
            formatter: Formatter::informational(),
            appender,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Name of the sink this handler writes to
    pub fn destination(&self) -> &str {
        self.appender.name()
    }

    pub fn accepts(&self, record: &LogRecord) -> bool {
        record.level >= self.level && self.filters.iter().all(|f| f.accept(record))
    }

    /// Write `record` if accepted; returns whether it was written
    pub fn handle(&mut self, record: &LogRecord) -> Result<bool> {
        if !self.accepts(record) {
            return Ok(false);
        }

        let mut block = self.formatter.format(record);
        block.push_str(TERMINATOR);
        self.appender.append(&block)?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.appender.flush()
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("filters", &self.filters.len())
            .field("template", &self.formatter.template().source())
            .field("destination", &self.appender.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{SharedBuffer, StreamAppender};
    use crate::core::filter::MaxLevel;
    use crate::core::TimestampFormat;

    fn handler(buffer: &SharedBuffer) -> Handler {
        Handler::new("informational", Box::new(StreamAppender::buffer(buffer.clone())))
            .with_level(LogLevel::Debug)
            .with_filter(MaxLevel(LogLevel::Info))
            .with_formatter(
                Formatter::informational().with_timestamp_format(TimestampFormat::Custom("T".into())),
            )
    }

    #[test]
    fn test_handle_writes_terminated_block() {
        let buffer = SharedBuffer::new();
        let mut handler = handler(&buffer);

        let written = handler
            .handle(&LogRecord::new("test", LogLevel::Info, "hello"))
            .unwrap();

        assert!(written);
        assert_eq!(buffer.contents(), "\nT - test - INFO: hello\n");
    }

    #[test]
    fn test_filter_rejects_above_ceiling() {
        let buffer = SharedBuffer::new();
        let mut handler = handler(&buffer);

        let written = handler
            .handle(&LogRecord::new("test", LogLevel::Warning, "careful"))
            .unwrap();

        assert!(!written);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_level_threshold() {
        let handler = Handler::new("alert", Box::new(StreamAppender::stderr()))
            .with_level(LogLevel::Warning);

        assert!(!handler.accepts(&LogRecord::new("t", LogLevel::Info, "m")));
        assert!(handler.accepts(&LogRecord::new("t", LogLevel::Critical, "m")));
        assert_eq!(handler.destination(), "stderr");
    }
}

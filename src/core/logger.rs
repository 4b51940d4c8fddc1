//! Main logger implementation

use super::{
    error::Result, handler::Handler, log_level::LogLevel, log_record::LogRecord,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::any::Any;
use std::error::Error;
use std::panic::Location;

/// Default minimum level of a logger nothing has configured yet
pub const DEFAULT_MIN_LEVEL: LogLevel = LogLevel::Warning;

/// A named logger dispatching records to its handlers.
///
/// Loggers are shared as `Arc<Logger>` (see
/// [`LoggerRegistry`](crate::core::LoggerRegistry)); every method takes
/// `&self`. Handlers are written to under a single lock, so blocks from
/// concurrent threads never interleave.
pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    handlers: RwLock<Vec<Handler>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(DEFAULT_MIN_LEVEL),
            handlers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    pub fn add_handler(&self, handler: Handler) {
        self.handlers.write().push(handler);
    }

    /// Swap in `handler` for the handler of the same name, keeping its
    /// position; appends when there is none. Returns the replaced handler.
    pub fn replace_handler(&self, handler: Handler) -> Option<Handler> {
        let mut handlers = self.handlers.write();
        match handlers.iter_mut().find(|h| h.name() == handler.name()) {
            Some(slot) => Some(std::mem::replace(slot, handler)),
            None => {
                handlers.push(handler);
                None
            }
        }
    }

    pub fn remove_handler(&self, name: &str) -> Option<Handler> {
        let mut handlers = self.handlers.write();
        let idx = handlers.iter().position(|h| h.name() == name)?;
        Some(handlers.remove(idx))
    }

    /// Detach every handler, returning them
    pub fn clear_handlers(&self) -> Vec<Handler> {
        std::mem::take(&mut *self.handlers.write())
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Inspect the attached handlers
    pub fn with_handlers<R>(&self, f: impl FnOnce(&[Handler]) -> R) -> R {
        f(&self.handlers.read())
    }

    /// Dispatch a fully built record to every handler
    pub fn handle(&self, record: &LogRecord) {
        if !self.is_enabled(record.level) {
            return;
        }

        let mut handlers = self.handlers.write();
        Self::dispatch(&mut handlers, record, &self.metrics);
    }

    /// Hand the record to each handler with per-handler panic isolation.
    ///
    /// A failing handler is reported on stderr and the record counted as
    /// dropped; the remaining handlers still see it. Writes are not retried.
    fn dispatch(handlers: &mut [Handler], record: &LogRecord, metrics: &LoggerMetrics) {
        let mut has_error = false;
        let mut written = false;

        for handler in handlers.iter_mut() {
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.handle(record)));

            match result {
                Ok(Ok(emitted)) => written |= emitted,
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Handler '{}' failed: {}", handler.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Handler '{}' panicked: {}. \
                         Other handlers continue to function.",
                        handler.name(),
                        panic_message(&*panic_info)
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_dropped();
        } else if written {
            metrics.record_logged();
        } else {
            metrics.record_unhandled();
        }
    }

    /// Log `message` at `level` with the caller's file and line.
    ///
    /// The function field renders as `(unknown function)`; use the
    /// [`log!`](crate::log) family of macros when alert blocks should name
    /// the calling function.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let caller = Location::caller();
        let record = LogRecord::new(&self.name, level, message).with_location(
            caller.file(),
            caller.line(),
            None,
            None,
        );
        self.handle(&record);
    }

    /// Log with a captured error: its display, `source()` chain and a
    /// backtrace when `RUST_BACKTRACE` enables one
    #[track_caller]
    pub fn log_with_error(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        error: &(dyn Error + 'static),
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let caller = Location::caller();
        let record = LogRecord::new(&self.name, level, message)
            .with_location(caller.file(), caller.line(), None, None)
            .with_error(error);
        self.handle(&record);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// WARNING through the alert channel; see [`Logger::log`] for the
    /// function field, or use [`warning!`](crate::warning)
    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// ERROR-level record carrying `error`; [`exception!`](crate::exception)
    /// also records the calling function
    #[inline]
    #[track_caller]
    pub fn exception(&self, message: impl Into<String>, error: &(dyn Error + 'static)) {
        self.log_with_error(LogLevel::Error, message, error);
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use channel_logger::Logger;
    ///
    /// let logger = Logger::new("app");
    /// logger.warning("no handlers attached yet");
    ///
    /// assert_eq!(logger.metrics().unhandled_count(), 1);
    /// assert_eq!(logger.metrics().drop_rate(), 0.0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("handlers", &self.handler_names())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} dropped logs (drop rate: {:.2}%)",
                self.name,
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{SharedBuffer, StreamAppender};
    use crate::core::{Appender, Formatter, LoggerError, TimestampFormat};

    fn buffered(name: &str, buffer: &SharedBuffer) -> Handler {
        Handler::new(name, Box::new(StreamAppender::buffer(buffer.clone()))).with_formatter(
            Formatter::informational().with_timestamp_format(TimestampFormat::Custom("T".into())),
        )
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _block: &str) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn append(&mut self, _block: &str) -> Result<()> {
            panic!("appender exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_default_min_level() {
        let logger = Logger::new("fresh");
        assert_eq!(logger.min_level(), LogLevel::Warning);
        assert!(!logger.is_enabled(LogLevel::Info));
    }

    #[test]
    fn test_min_level_gates_records() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new("gate");
        logger.add_handler(buffered("all", &buffer));

        logger.info("suppressed");
        assert!(buffer.is_empty());

        logger.set_min_level(LogLevel::Debug);
        logger.info("shown");
        assert_eq!(buffer.contents(), "\nT - gate - INFO: shown\n");
    }

    #[test]
    fn test_caller_location_recorded() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new("loc");
        logger.add_handler(
            Handler::new("path", Box::new(StreamAppender::buffer(buffer.clone())))
                .with_formatter(Formatter::new("{path}:{module}".parse().unwrap())),
        );

        logger.warning("where");
        assert_eq!(buffer.contents(), format!("{}:logger\n", file!()));
    }

    #[test]
    fn test_function_field_needs_macro() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new("fn");
        logger.add_handler(
            Handler::new("function", Box::new(StreamAppender::buffer(buffer.clone())))
                .with_formatter(Formatter::new("{function}".parse().unwrap())),
        );

        logger.warning("plain");
        crate::warning!(logger, "macro");

        assert_eq!(
            buffer.contents(),
            format!("{}\ntest_function_field_needs_macro\n", crate::core::log_record::UNKNOWN_FUNCTION)
        );
    }

    #[test]
    fn test_replace_handler_keeps_position() {
        let logger = Logger::new("replace");
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        logger.add_handler(buffered("a", &first));
        logger.add_handler(buffered("b", &first));

        let old = logger.replace_handler(buffered("a", &second));
        assert!(old.is_some());
        assert_eq!(logger.handler_names(), vec!["a", "b"]);

        assert!(logger.replace_handler(buffered("c", &second)).is_none());
        assert_eq!(logger.handler_count(), 3);
        assert!(logger.remove_handler("b").is_some());
        assert!(logger.remove_handler("b").is_none());
    }

    #[test]
    fn test_failing_handler_isolated() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new("isolated");
        logger.add_handler(Handler::new("failing", Box::new(FailingAppender)));
        logger.add_handler(Handler::new("panicking", Box::new(PanickingAppender)));
        logger.add_handler(buffered("ok", &buffer));

        logger.error("still delivered");

        assert!(buffer.contents().contains("still delivered"));
        assert_eq!(logger.dropped_count(), 1);
    }

    #[test]
    fn test_exception_carries_error_text() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new("exc");
        logger.add_handler(buffered("all", &buffer));

        let err = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        logger.exception("request failed", &err);

        let output = buffer.contents();
        assert!(output.contains("ERROR: request failed\nError: socket closed"));
    }

    #[test]
    fn test_unhandled_counted() {
        let logger = Logger::new("nobody");
        logger.critical("into the void");
        assert_eq!(logger.metrics().unhandled_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 0);
    }
}

//! Bridge from the `log` crate facade
//!
//! Libraries that log through `log::info!` and friends can be routed into a
//! channel logger. `log::Level::Trace` has no counterpart and is folded
//! into DEBUG.

use crate::core::{LogLevel, LogRecord, Logger, LoggerError, Result};
use std::sync::Arc;

fn level_from_log(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warning,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug | log::Level::Trace => LogLevel::Debug,
    }
}

fn level_filter_for(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Debug => log::LevelFilter::Trace,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
    }
}

/// `log::Log` implementation forwarding into a [`Logger`]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Convert a `log` record; the `log` target becomes the module path
    pub fn convert(&self, record: &log::Record<'_>) -> LogRecord {
        LogRecord::new(
            self.logger.name(),
            level_from_log(record.level()),
            record.args().to_string(),
        )
        .with_location(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            Some(record.module_path().unwrap_or_else(|| record.target())),
            None,
        )
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.logger.handle(&self.convert(record));
        }
    }

    fn flush(&self) {
        if let Err(e) = self.logger.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush '{}': {}", self.logger.name(), e);
        }
    }
}

/// Install `logger` as the process-wide `log` backend.
///
/// The `log` max level follows the logger's current minimum. Fails if a
/// `log` backend is already installed.
pub fn install(logger: Arc<Logger>) -> Result<()> {
    let max_level = level_filter_for(logger.min_level());
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))
        .map_err(|e| LoggerError::BridgeError(e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{SharedBuffer, StreamAppender};
    use crate::core::{Formatter, Handler};
    use log::Log;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_from_log(log::Level::Trace), LogLevel::Debug);
        assert_eq!(level_from_log(log::Level::Warn), LogLevel::Warning);
        assert_eq!(level_filter_for(LogLevel::Critical), log::LevelFilter::Error);
        assert_eq!(level_filter_for(LogLevel::Debug), log::LevelFilter::Trace);
    }

    #[test]
    fn test_bridge_forwards_records() {
        let buffer = SharedBuffer::new();
        let logger = Arc::new(Logger::new("bridged"));
        logger.add_handler(
            Handler::new("all", Box::new(StreamAppender::buffer(buffer.clone())))
                .with_formatter(Formatter::new("{level} {module_path} {message}".parse().unwrap())),
        );
        let bridge = LogBridge::new(Arc::clone(&logger));

        bridge.log(
            &log::Record::builder()
                .args(format_args!("from log"))
                .level(log::Level::Error)
                .target("deps::http")
                .build(),
        );
        bridge.log(
            &log::Record::builder()
                .args(format_args!("too quiet"))
                .level(log::Level::Info)
                .build(),
        );

        assert_eq!(buffer.contents(), "ERROR deps::http from log\n");
    }
}

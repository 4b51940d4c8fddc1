//! Logging macros for ergonomic log message formatting.
//!
//! Unlike the `Logger` methods, the macros record the enclosing module path
//! and function name as well as the file and line, so the alert channel can
//! show `→ module → function @ line` for every record.
//!
//! # Examples
//!
//! ```
//! use channel_logger::{info, warning, LoggerRegistry};
//! use channel_logger::config::{ChannelsBuilder, Destination};
//! use channel_logger::appenders::SharedBuffer;
//!
//! let registry = LoggerRegistry::new();
//! let buffer = SharedBuffer::new();
//! let logger = ChannelsBuilder::new()
//!     .destination(Destination::Buffer(buffer.clone()))
//!     .build(&registry, "server")
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warning!(logger, "Disk usage at {}%", 91);
//!
//! assert!(buffer.contents().contains("INFO: Server listening on port 8080"));
//! ```

/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Log a message with automatic formatting and full call-site location.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use channel_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.handle(
                &$crate::LogRecord::new(logger.name(), level, format!($($arg)+)).with_location(
                    file!(),
                    line!(),
                    Some(module_path!()),
                    Some($crate::function_name!()),
                ),
            );
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use channel_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message together with a captured error.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use channel_logger::exception;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
/// exception!(logger, &err, "Could not load {}", "settings");
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled($crate::LogLevel::Error) {
            logger.handle(
                &$crate::LogRecord::new(logger.name(), $crate::LogLevel::Error, format!($($arg)+))
                    .with_location(
                        file!(),
                        line!(),
                        Some(module_path!()),
                        Some($crate::function_name!()),
                    )
                    .with_error($err),
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::appenders::{SharedBuffer, StreamAppender};
    use crate::core::{Formatter, Handler, LogLevel, Logger};

    fn location_logger(buffer: &SharedBuffer) -> Logger {
        let logger = Logger::new("macros");
        logger.set_min_level(LogLevel::Debug);
        logger.add_handler(
            Handler::new("loc", Box::new(StreamAppender::buffer(buffer.clone()))).with_formatter(
                Formatter::new("{level}|{module_path}|{function}|{message}".parse().unwrap()),
            ),
        );
        logger
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name!(), "test_function_name");
        let from_closure = || function_name!();
        assert_eq!(from_closure(), "test_function_name");
    }

    #[test]
    fn test_log_macro_records_location() {
        let buffer = SharedBuffer::new();
        let logger = location_logger(&buffer);

        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        assert_eq!(
            buffer.contents(),
            "INFO|channel_logger::macros::tests|test_log_macro_records_location|Formatted: 42\n"
        );
    }

    #[test]
    fn test_level_macros() {
        let buffer = SharedBuffer::new();
        let logger = location_logger(&buffer);

        debug!(logger, "d");
        info!(logger, "i");
        warning!(logger, "w");
        error!(logger, "e");
        critical!(logger, "c {}", 5);

        let levels: Vec<String> = buffer
            .contents()
            .lines()
            .map(|line| line.split('|').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(levels, vec!["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        let buffer = SharedBuffer::new();
        let logger = location_logger(&buffer);
        logger.set_min_level(LogLevel::Error);

        warning!(logger, "{}", "skipped");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_exception_macro() {
        let buffer = SharedBuffer::new();
        let logger = location_logger(&buffer);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");

        exception!(logger, &err, "failed after {} tries", 3);

        assert!(buffer
            .contents()
            .starts_with("ERROR|channel_logger::macros::tests|test_exception_macro|failed after 3 tries\nError: boom"));
    }
}

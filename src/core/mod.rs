//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod template;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use filter::{Filter, MaxLevel, MinLevel};
pub use formatter::Formatter;
pub use handler::Handler;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, DEFAULT_MIN_LEVEL};
pub use metrics::LoggerMetrics;
pub use registry::LoggerRegistry;
pub use template::{Template, ALERT_TEMPLATE, INFORMATIONAL_TEMPLATE};
pub use timestamp::TimestampFormat;

//! # Channel Logger
//!
//! Two-channel logger configuration. A configured logger writes DEBUG and
//! INFO records in a compact one-line form and WARNING and above in a
//! verbose form carrying thread, process and source location, both to
//! stderr or both appended to one file.
//!
//! ## Features
//!
//! - **Disjoint channels**: every level goes to exactly one handler
//! - **Named registry**: one logger per name, with explicit shutdown
//! - **Templates**: named-field format templates per channel
//! - **`log` bridge**: route `log` crate records into a channel logger
//!
//! ```no_run
//! use channel_logger::config::setup;
//!
//! let logger = setup("billing", None)?;
//! logger.info("invoice run started");
//! logger.warning("3 invoices skipped");
//! # Ok::<(), channel_logger::LoggerError>(())
//! ```

pub mod appenders;
pub mod bridge;
pub mod config;
pub mod core;
pub mod demo;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FileAppender, SharedBuffer, StreamAppender};
    pub use crate::config::{configure, setup, ChannelConfig, ChannelsBuilder, Destination};
    pub use crate::core::{
        Appender, Filter, Formatter, Handler, LogLevel, LogRecord, Logger, LoggerError,
        LoggerMetrics, LoggerRegistry, MaxLevel, MinLevel, Result, Template, TimestampFormat,
    };
}

pub use crate::core::registry;
pub use crate::appenders::{FileAppender, SharedBuffer, StreamAppender};
pub use crate::config::{configure, setup, ChannelConfig, ChannelsBuilder, Destination};
pub use crate::core::{
    Appender, Filter, Formatter, Handler, LogLevel, LogRecord, Logger, LoggerError,
    LoggerMetrics, LoggerRegistry, MaxLevel, MinLevel, Result, Template, TimestampFormat,
};

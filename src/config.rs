//! Two-channel logger configuration
//!
//! [`configure`] wires a named logger to two handlers sharing one
//! destination:
//!
//! - **informational**: DEBUG and INFO only, compact single-line blocks
//!   (`\n<timestamp> - <name> - <LEVEL>: <message>`)
//! - **alert**: WARNING and above, verbose blocks with thread, process and
//!   source location
//!
//! The two accepted ranges are disjoint and together cover every level.
//!
//! ```
//! use channel_logger::appenders::SharedBuffer;
//! use channel_logger::config::{ChannelsBuilder, Destination};
//! use channel_logger::LoggerRegistry;
//!
//! let registry = LoggerRegistry::new();
//! let buffer = SharedBuffer::new();
//! let logger = ChannelsBuilder::new()
//!     .destination(Destination::Buffer(buffer.clone()))
//!     .build(&registry, "docs")?;
//!
//! logger.info("hello");
//! assert!(buffer.contents().ends_with(" - docs - INFO: hello\n"));
//! # Ok::<(), channel_logger::LoggerError>(())
//! ```

use crate::appenders::{FileAppender, SharedBuffer, StreamAppender};
use crate::core::{
    registry, Appender, Formatter, Handler, LogLevel, Logger, LoggerError, LoggerRegistry,
    MaxLevel, Result, Template, TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handler name of the DEBUG/INFO channel
pub const INFORMATIONAL_HANDLER: &str = "informational";

/// Handler name of the WARNING-and-above channel
pub const ALERT_HANDLER: &str = "alert";

/// Where both channels of a logger write
#[derive(Debug, Clone, Default)]
pub enum Destination {
    #[default]
    Stderr,
    /// Append to this file, creating it if missing
    File(PathBuf),
    Buffer(SharedBuffer),
}

impl Destination {
    /// stderr for `None`, otherwise the file at `path`
    pub fn from_path<P: Into<PathBuf>>(path: Option<P>) -> Self {
        match path {
            Some(path) => Destination::File(path.into()),
            None => Destination::Stderr,
        }
    }

    /// Human-readable description of the output location
    pub fn describe(&self) -> String {
        match self {
            Destination::Stderr => "standard error".to_string(),
            Destination::File(path) => path.display().to_string(),
            Destination::Buffer(_) => "in-memory buffer".to_string(),
        }
    }

    /// One appender per channel, both writing to this destination
    fn open_pair(&self) -> Result<(Box<dyn Appender>, Box<dyn Appender>)> {
        Ok(match self {
            Destination::Stderr => (
                Box::new(StreamAppender::stderr()),
                Box::new(StreamAppender::stderr()),
            ),
            Destination::File(path) => {
                let first = FileAppender::new(path)?;
                let second = first.try_clone()?;
                (Box::new(first), Box::new(second))
            }
            Destination::Buffer(buffer) => (
                Box::new(StreamAppender::buffer(buffer.clone())),
                Box::new(StreamAppender::buffer(buffer.clone())),
            ),
        })
    }
}

/// Builder for the two-channel configuration
///
/// Configuring a name that already carries the two channel handlers
/// replaces them: output is never duplicated, and the destination may
/// change between calls.
#[derive(Debug, Clone, Default)]
pub struct ChannelsBuilder {
    destination: Destination,
    timestamp_format: TimestampFormat,
    colors: bool,
    informational_template: Option<String>,
    alert_template: Option<String>,
}

impl ChannelsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Shorthand for `destination(Destination::File(path))`
    #[must_use = "builder methods return a new value"]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.destination(Destination::File(path.into()))
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Color level names; only sensible for terminal destinations
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn informational_template(mut self, template: impl Into<String>) -> Self {
        self.informational_template = Some(template.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn alert_template(mut self, template: impl Into<String>) -> Self {
        self.alert_template = Some(template.into());
        self
    }

    /// Configure the logger `name` in `registry` and return it.
    ///
    /// Templates and the timestamp layout are validated before the
    /// destination is opened; a destination that cannot be opened fails
    /// with the underlying filesystem error and leaves any existing
    /// configuration of `name` untouched.
    pub fn build(self, registry: &LoggerRegistry, name: &str) -> Result<Arc<Logger>> {
        self.timestamp_format.validate()?;
        let informational = match self.informational_template {
            Some(ref source) => Template::parse(source)?,
            None => Template::informational(),
        };
        let alert = match self.alert_template {
            Some(ref source) => Template::parse(source)?,
            None => Template::alert(),
        };

        let (informational_sink, alert_sink) = self.destination.open_pair()?;

        let informational_handler = Handler::new(INFORMATIONAL_HANDLER, informational_sink)
            .with_level(LogLevel::Debug)
            .with_filter(MaxLevel(LogLevel::Info))
            .with_formatter(
                Formatter::new(informational)
                    .with_timestamp_format(self.timestamp_format.clone())
                    .with_colors(self.colors),
            );
        let alert_handler = Handler::new(ALERT_HANDLER, alert_sink)
            .with_level(LogLevel::Warning)
            .with_formatter(
                Formatter::new(alert)
                    .with_timestamp_format(self.timestamp_format)
                    .with_colors(self.colors),
            );

        let logger = registry.get_logger(name);
        logger.set_min_level(LogLevel::Debug);
        for handler in [informational_handler, alert_handler] {
            if let Some(mut previous) = logger.replace_handler(handler) {
                if let Err(e) = previous.flush() {
                    eprintln!(
                        "[LOGGER ERROR] Failed to flush replaced handler '{}': {}",
                        previous.name(),
                        e
                    );
                }
            }
        }

        Ok(logger)
    }
}

/// Serializable form of [`ChannelsBuilder`]
///
/// ```
/// use channel_logger::config::ChannelConfig;
///
/// let config = ChannelConfig::from_json_str(r#"{ "log_file": "app.log", "colors": false }"#)?;
/// assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("app.log")));
/// # Ok::<(), channel_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelConfig {
    /// File to append to; stderr when absent
    pub log_file: Option<PathBuf>,
    pub timestamp_format: TimestampFormat,
    pub colors: bool,
    pub informational_template: Option<String>,
    pub alert_template: Option<String>,
}

impl ChannelConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading channel config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&json)
    }

    pub fn into_builder(self) -> ChannelsBuilder {
        let mut builder = ChannelsBuilder::new()
            .destination(Destination::from_path(self.log_file))
            .timestamp_format(self.timestamp_format)
            .colors(self.colors);
        if let Some(template) = self.informational_template {
            builder = builder.informational_template(template);
        }
        if let Some(template) = self.alert_template {
            builder = builder.alert_template(template);
        }
        builder
    }
}

/// Configure `name` in `registry` with both channels writing to
/// `destination`, or to stderr when it is `None`.
pub fn configure(
    registry: &LoggerRegistry,
    name: &str,
    destination: Option<&Path>,
) -> Result<Arc<Logger>> {
    ChannelsBuilder::new()
        .destination(Destination::from_path(destination))
        .build(registry, name)
}

/// [`configure`] against the process-wide registry
pub fn setup(name: &str, destination: Option<&Path>) -> Result<Arc<Logger>> {
    configure(registry::global(), name, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination_is_stderr() {
        let registry = LoggerRegistry::new();
        let logger = configure(&registry, "stderr-test", None).unwrap();

        let sinks = logger.with_handlers(|handlers| {
            handlers
                .iter()
                .map(|h| (h.name().to_string(), h.destination().to_string(), h.level()))
                .collect::<Vec<_>>()
        });
        assert_eq!(
            sinks,
            vec![
                (INFORMATIONAL_HANDLER.to_string(), "stderr".to_string(), LogLevel::Debug),
                (ALERT_HANDLER.to_string(), "stderr".to_string(), LogLevel::Warning),
            ]
        );
        assert_eq!(logger.min_level(), LogLevel::Debug);
    }

    #[test]
    fn test_invalid_template_rejected_before_configuring() {
        let registry = LoggerRegistry::new();
        let result = ChannelsBuilder::new()
            .alert_template("{message} {nope}")
            .build(&registry, "bad");

        assert!(matches!(result, Err(LoggerError::FormatterError { .. })));
        assert!(!registry.contains("bad"));
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let registry = LoggerRegistry::new();
        let result = ChannelsBuilder::new()
            .timestamp_format(TimestampFormat::Custom("%Q".into()))
            .build(&registry, "bad-ts");
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_config_json_round_trip_into_builder() {
        let config = ChannelConfig::from_json_str(
            r#"{ "timestamp_format": "Rfc3339", "informational_template": "{level} {message}" }"#,
        )
        .unwrap();
        assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
        assert!(config.log_file.is_none());

        let buffer = SharedBuffer::new();
        let registry = LoggerRegistry::new();
        let logger = config
            .into_builder()
            .destination(Destination::Buffer(buffer.clone()))
            .build(&registry, "json")
            .unwrap();
        logger.debug("tuned");

        assert_eq!(buffer.contents(), "DEBUG tuned\n");
    }

    #[test]
    fn test_unknown_config_key_rejected() {
        let err = ChannelConfig::from_json_str(r#"{ "rotate": true }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_setup_uses_global_registry() {
        let name = "config-tests.setup-global";
        let logger = setup(name, None).unwrap();

        assert!(registry::global().contains(name));
        assert!(Arc::ptr_eq(&logger, &registry::global().get_logger(name)));
        assert_eq!(
            logger.handler_names(),
            vec![INFORMATIONAL_HANDLER, ALERT_HANDLER]
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(Destination::from_path(None::<PathBuf>).describe(), "standard error");
        assert_eq!(
            Destination::from_path(Some("logs/app.log")).describe(),
            "logs/app.log"
        );
    }
}

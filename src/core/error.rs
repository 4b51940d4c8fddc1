//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Template error
    #[error("Formatter error ({template}): {message}")]
    FormatterError { template: String, message: String },

    /// `log` facade bridge could not be installed
    #[error("Failed to install log bridge: {0}")]
    BridgeError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Kind of the underlying filesystem error, if this error came from IO.
    pub fn io_error_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LoggerError::IoOperation { source, .. } => Some(source.kind()),
            LoggerError::IoError(source) => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("ChannelsBuilder", "empty logger name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::other("stream closed");
        assert!(matches!(err, LoggerError::Other(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("ChannelsBuilder", "empty logger name");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for ChannelsBuilder: empty logger name"
        );

        let err = LoggerError::formatter("{levle}", "unknown field 'levle'");
        assert_eq!(
            err.to_string(),
            "Formatter error ({levle}): unknown field 'levle'"
        );
    }

    #[test]
    fn test_io_operation_error_keeps_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "/var/log/app.log", io_err);

        assert!(err.to_string().contains("opening log file"));
        assert_eq!(err.io_error_kind(), Some(std::io::ErrorKind::PermissionDenied));
        assert_eq!(LoggerError::other("x").io_error_kind(), None);
    }
}

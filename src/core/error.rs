//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The secondary network sink could not be set up
    #[error("secondary sink '{address}' unavailable while {operation}: {source}")]
    SecondarySinkUnavailable {
        address: String,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An appender panicked while handling a record
    #[error("Appender '{appender}' panicked: {message}")]
    AppenderPanicked { appender: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a secondary sink error for the given address and failed step
    pub fn secondary_sink(
        address: impl Into<String>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::SecondarySinkUnavailable {
            address: address.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create an appender panic error
    pub fn appender_panicked(appender: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderPanicked {
            appender: appender.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error came from secondary sink setup
    pub fn is_secondary_sink_unavailable(&self) -> bool {
        matches!(self, LoggerError::SecondarySinkUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::other("sink closed");
        assert!(matches!(err, LoggerError::Other(_)));

        let err = LoggerError::appender_panicked("udp", "boom");
        assert!(matches!(err, LoggerError::AppenderPanicked { .. }));
        assert!(!err.is_secondary_sink_unavailable());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::appender_panicked("stdout", "poisoned");
        assert_eq!(err.to_string(), "Appender 'stdout' panicked: poisoned");

        let err = LoggerError::other("datagram truncated");
        assert_eq!(err.to_string(), "datagram truncated");
    }

    #[test]
    fn test_secondary_sink_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such host");
        let err = LoggerError::secondary_sink("logstash:5000", "resolving address", io_err);

        assert!(err.is_secondary_sink_unavailable());
        let message = err.to_string();
        assert!(message.contains("logstash:5000"));
        assert!(message.contains("resolving address"));
        assert!(message.contains("no such host"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

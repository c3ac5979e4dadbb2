//! Error types for the log handler

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Subsystem or category rejected by the native facility
    #[error("Invalid {field} identifier {value:?}: {reason}")]
    InvalidIdentifier {
        field: String,
        value: String,
        reason: String,
    },

    /// Unknown severity name
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A global logger was already installed
    #[error("Failed to install log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl HandlerError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HandlerError::InvalidIdentifier {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        HandlerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HandlerError::invalid_identifier("subsystem", "a\0b", "contains NUL");
        assert!(matches!(err, HandlerError::InvalidIdentifier { .. }));

        let err = HandlerError::config("HandlerConfig", "label must not be empty");
        assert!(matches!(err, HandlerError::InvalidConfiguration { .. }));

        let err = HandlerError::invalid_level("loud");
        assert!(matches!(err, HandlerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = HandlerError::config("HandlerConfig", "label must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for HandlerConfig: label must not be empty"
        );

        let err = HandlerError::invalid_level("loud");
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");

        let err = HandlerError::invalid_identifier("category", "net\0", "contains NUL byte");
        assert_eq!(
            err.to_string(),
            "Invalid category identifier \"net\\0\": contains NUL byte"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HandlerError = json_err.into();
        assert!(matches!(err, HandlerError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}

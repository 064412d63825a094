use std::fmt;
use thiserror::Error;

/// The base error type for all GoBarber errors.
///
/// Each crate keeps its own error enum and implements
/// `From<SpecificError> for GoBarberError` to surface a common classification.
#[derive(Error, Debug)]
pub enum GoBarberError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GoBarberError {
    /// Whether the error is a precondition/configuration problem the caller must fix,
    /// as opposed to a transient failure of a single request.
    pub fn is_config_error(&self) -> bool {
        matches!(self, GoBarberError::ConfigError(_))
    }
}

// Common error conversions
impl From<reqwest::Error> for GoBarberError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GoBarberError::ParseError(err.to_string())
        } else {
            GoBarberError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GoBarberError {
    fn from(err: serde_json::Error) -> Self {
        GoBarberError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> GoBarberError {
    GoBarberError::ConfigError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> GoBarberError {
    GoBarberError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_pick_the_right_variant() {
        assert!(config_error("missing providerID").is_config_error());
        assert!(!GoBarberError::ValidationError("bad hour".into()).is_config_error());

        let err = external_service_error("gobarber-api", "status 503");
        assert_eq!(
            err.to_string(),
            "External service error: gobarber-api - status 503"
        );
    }

    #[test]
    fn test_serde_errors_are_parse_errors() {
        let err: GoBarberError = serde_json::from_str::<u8>("\"nine\"").unwrap_err().into();
        assert!(matches!(err, GoBarberError::ParseError(_)));
    }
}

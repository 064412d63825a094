use gobarber_common::GoBarberError;
use thiserror::Error;

/// Errors raised by the scheduling core and its gateways.
#[derive(Error, Debug)]
pub enum SchedulingError {
    /// The screen was opened without the `providerID` navigation parameter
    #[error("Missing provider id: the booking screen requires a providerID")]
    MissingProvider,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<SchedulingError> for GoBarberError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::MissingProvider => gobarber_common::config_error(err),
            SchedulingError::Config(message) => GoBarberError::ConfigError(message),
            SchedulingError::Request(e) => GoBarberError::from(e),
            SchedulingError::UnexpectedStatus { .. } => {
                gobarber_common::external_service_error("gobarber-api", err)
            }
            SchedulingError::MalformedResponse(message) => GoBarberError::ParseError(message),
        }
    }
}

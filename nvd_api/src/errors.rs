//! Error types for the API client.

/// Errors that can occur while building or sending a CVE query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller used a logical parameter name that is not in the registry.
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),
    /// The value given for a parameter does not satisfy its validation rule.
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameterValue { name: String, value: String },
    /// The client configuration cannot be used (bad URL, timeout or key).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// An HTTP request failed (network error, timeout, or unparseable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// True for errors raised before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownParameter(_) | Error::InvalidParameterValue { .. }
        )
    }
}

/// Error types for the Lotacor API client
use thiserror::Error;

/// Main error type for Lotacor query operations.
///
/// Every variant collapses into one user-facing "request failed" message;
/// the `Display` text is what the error view shows.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The request never produced a response (network, CORS, DNS, timeout)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The configured endpoint is not a usable URL
    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            QueryError::Status(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            QueryError::Body(err.to_string())
        } else {
            QueryError::Transport(err.to_string())
        }
    }
}

/// Type alias for Results using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

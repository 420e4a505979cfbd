//! Error types for monster searches.

/// Result type for searches.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while fetching or reading monster records.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The payload was not valid JSON or did not hold monster records.
    #[error("failed to parse monsters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A creature type name that is not one of the searchable types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown monster type: \"{0}\"")]
pub struct ParseMonsterTypeError(pub String);

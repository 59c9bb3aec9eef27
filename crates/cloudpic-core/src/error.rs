//! Error types for cloudpic-core

use thiserror::Error;

use crate::media::ApiError;

/// Result type alias using cloudpic-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cloudpic-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network or connection failure reported by the HTTP client
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The media API answered with an `error.message`
    #[error("API error: {}", .0.message)]
    Api(ApiError),

    /// Response body was not JSON or lacked required fields
    #[error("Malformed {operation} response: {source}")]
    MalformedResponse {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success HTTP status without a decodable error payload
    #[error("Request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid or incomplete client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the remote error message when the failure came from the API.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api(error) => Some(error.message.as_str()),
            _ => None,
        }
    }
}

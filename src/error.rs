//! Unified error types for the CLI.

use thiserror::Error;

/// Unified error type. Every failure is terminal to the process; there is a
/// single top-level catch in `main` and no retry or recovery anywhere.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading error (missing or malformed environment value).
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Invalid argument supplied to a constructor or operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The exchange returned a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Api {
        /// Endpoint path that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },

    /// Failed to interpret an exchange response.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Signing error (bad key material or signature failure).
    #[error("signing error: {0}")]
    Signing(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

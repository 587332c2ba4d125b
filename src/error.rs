//! Error types for the stream rules client.
//!
//! All operations in this crate return [`Result`], with a single [`Error`]
//! enum covering credential loading, the token exchange, and the rule
//! endpoints.

use thiserror::Error;

/// A specialized `Result` type for stream rules operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all stream rules operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The token endpoint rejected the client-credentials exchange, or its
    /// response could not be parsed as a bearer token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The HTTP transport failed (DNS, TCP, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A response body or credentials file could not be decoded.
    #[error("failed to deserialize: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// An endpoint URL could not be constructed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Local configuration problem (unreadable credentials file, invalid
    /// header material).
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error came from the token exchange.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error is a JSON encode or decode failure.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Serialization(_) | Error::Deserialization(_))
    }
}

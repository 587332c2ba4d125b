//! API credentials loaded from a local JSON file.

use std::fs;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// Consumer key and secret for the OAuth2 client-credentials exchange.
///
/// Loaded once at startup from a JSON file of the form:
///
/// ```json
/// { "consumer_key": "...", "consumer_secret": "..." }
/// ```
///
/// Both fields are required; a file missing either is a decode error.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    #[serde(rename = "consumer_key")]
    key: String,
    #[serde(rename = "consumer_secret")]
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from a key and secret directly.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Load credentials from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read and
    /// [`Error::Deserialization`] if it is not valid credentials JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| {
            Error::Config(format!("failed to read credentials file {}: {e}", path.display()))
        })?;

        serde_json::from_slice(&raw).map_err(Error::Deserialization)
    }

    /// The consumer key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The consumer secret.
    pub fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

//! OAuth2 client-credentials session for the streaming API.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::auth::Credentials;
use crate::{Error, Result};

const TOKEN_PATH: &str = "/oauth2/token";

/// An authenticated session holding the bearer token obtained from the
/// token endpoint.
///
/// The token is acquired once during client construction and reused for all
/// subsequent calls; it is never persisted. Client-credentials bearer
/// tokens are long-lived, so no refresh is performed. When the endpoint
/// reports `expires_in`, [`Session::expires_at`] exposes the computed expiry
/// so callers can decide to reconnect.
#[derive(Clone)]
pub struct Session {
    access_token: SecretString,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Perform the client-credentials token exchange.
    ///
    /// Issues exactly one `POST {base}/oauth2/token` with HTTP basic auth
    /// and a `grant_type=client_credentials` form body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the endpoint responds with a
    /// non-200 status or a body that is not a bearer token, and
    /// [`Error::Network`] on transport failure.
    pub async fn client_credentials(
        http: &reqwest::Client,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Self> {
        let url = Url::parse(base_url)?.join(TOKEN_PATH)?;

        tracing::debug!(%url, "exchanging client credentials for a bearer token");

        let response = http
            .post(url)
            .basic_auth(credentials.key(), Some(credentials.secret()))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body("grant_type=client_credentials")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(Error::Authentication(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Authentication(format!("token endpoint returned an unparseable body: {e}"))
        })?;

        // An out-of-range expires_in cannot be represented as an instant;
        // treat it as a token without a known expiry.
        let expires_at = token
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|delta| Utc::now().checked_add_signed(delta));

        tracing::debug!(expires_at = ?expires_at, "bearer token acquired");

        Ok(Self {
            access_token: SecretString::from(token.access_token),
            expires_at,
        })
    }

    /// The instant the token expires, if the endpoint reported one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if the token has a known expiry in the past.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    /// The bearer token for the `Authorization` header.
    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

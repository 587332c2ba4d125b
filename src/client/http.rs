//! HTTP client for the stream rules API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::api::RulesService;
use crate::auth::{Credentials, Session};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The client for the filtered-stream rules API.
///
/// Construction performs the OAuth2 client-credentials token exchange; the
/// resulting bearer token is bound to this client for all subsequent calls.
/// The client is cheap to clone and may be reused for multiple sequential
/// calls.
///
/// # Example
///
/// ```no_run
/// use twitter_stream_rules::TwitterClient;
///
/// # async fn example() -> twitter_stream_rules::Result<()> {
/// let client = TwitterClient::connect("consumer-key", "consumer-secret").await?;
/// let rules = client.rules().list().await?;
/// println!("{rules}");
/// # Ok(())
/// # }
/// ```
pub struct TwitterClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl TwitterClient {
    /// Connect with a consumer key and secret, using the default
    /// configuration.
    pub async fn connect(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(key, secret);
        Self::connect_with_config(&credentials, ClientConfig::default()).await
    }

    /// Connect with explicit credentials and configuration.
    pub async fn connect_with_config(
        credentials: &Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let session = Session::client_credentials(&http, &config.base_url, credentials).await?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Get the stream filter rules service.
    pub fn rules(&self) -> RulesService {
        RulesService::new(self.inner.clone())
    }

    /// Get a reference to the authenticated session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

impl ClientInner {
    /// Build the full URL for an API path.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.config.base_url)?.join(path)?)
    }

    /// Build request headers with bearer authentication.
    pub(crate) fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let bearer = format!("Bearer {}", self.session.access_token());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|_| Error::Config("bearer token is not valid header material".into()))?,
        );

        Ok(headers)
    }
}

impl Clone for TwitterClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}

//! Stream filter rules service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Rule, RulePayload, RuleResponse};
use crate::{Error, Result};

const RULES_PATH: &str = "/labs/1/tweets/stream/filter/rules";

/// Service for stream filter rule operations.
///
/// # Example
///
/// ```no_run
/// use twitter_stream_rules::Rule;
///
/// # async fn example(client: twitter_stream_rules::TwitterClient) -> twitter_stream_rules::Result<()> {
/// // Validate a rule without installing it.
/// let rule = Rule::new("cat has:media").with_tag("cats with media");
/// let validated = client.rules().add(vec![rule], true).await?;
///
/// // Inspect the currently installed rules.
/// let raw = client.rules().list().await?;
/// # Ok(())
/// # }
/// ```
pub struct RulesService {
    inner: Arc<ClientInner>,
}

impl RulesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the currently installed stream filter rules.
    ///
    /// Returns the response body as raw JSON text, unparsed. This mirrors
    /// the upstream surface: listing exposes whatever the server sends,
    /// while [`add`](Self::add) decodes the response envelope into typed
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the endpoint URL cannot be constructed,
    /// [`Error::Config`] if the bearer token is not valid header material,
    /// and [`Error::Network`] on transport failure.
    pub async fn list(&self) -> Result<String> {
        let url = self.inner.endpoint(RULES_PATH)?;
        let headers = self.inner.build_headers()?;

        tracing::debug!(%url, "listing stream filter rules");

        let response = self.inner.http.get(url).headers(headers).send().await?;
        let body = response.text().await?;

        Ok(body)
    }

    /// Add stream filter rules, optionally as a dry run.
    ///
    /// With `dry_run` set, the server validates the rules without
    /// installing them; the `dry_run=true` query parameter is appended only
    /// in that case and omitted entirely otherwise.
    ///
    /// Returns the rules the server acted on, with server-assigned ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the request body cannot be
    /// encoded, [`Error::Url`] if the endpoint URL cannot be constructed,
    /// [`Error::Config`] if the bearer token is not valid header material,
    /// [`Error::Network`] on transport failure, and
    /// [`Error::Deserialization`] if the response does not decode as a rule
    /// envelope.
    pub async fn add(&self, rules: Vec<Rule>, dry_run: bool) -> Result<Vec<Rule>> {
        let payload = RulePayload { add: rules };
        let body = serde_json::to_vec(&payload).map_err(Error::Serialization)?;

        let mut url = self.inner.endpoint(RULES_PATH)?;
        if dry_run {
            url.query_pairs_mut().append_pair("dry_run", "true");
        }

        let headers = self.inner.build_headers()?;

        tracing::debug!(%url, count = payload.add.len(), dry_run, "adding stream filter rules");

        let response = self
            .inner
            .http
            .post(url)
            .headers(headers)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let raw = response.bytes().await?;
        let envelope: RuleResponse =
            serde_json::from_slice(&raw).map_err(Error::Deserialization)?;

        Ok(envelope.data)
    }
}

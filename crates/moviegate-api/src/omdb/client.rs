//! `OmdbClient` - OMDb API client implementation.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::instrument;
use url::Url;

use super::api::LocalOmdbApi;
use super::error::OmdbError;
use super::imdb_id::ImdbId;
use super::types::{OmdbRecord, OmdbSearchResponse, PlotLength};

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "apikey";

/// OMDb API client.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key sent as the `apikey` query parameter.
    api_key: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for `OmdbClient`.
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for OmdbClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-request timeout (default: 15s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or blank.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Configured per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a GET request with the API key and query params.
    ///
    /// Each call carries its own timeout; expiry aborts only this request.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<T, OmdbError> {
        let request = self
            .http_client
            .get(self.base_url.clone())
            .header(ACCEPT, "application/json")
            .query(query)
            .query(&[(API_KEY_PARAM, self.api_key.as_str())])
            .timeout(self.timeout)
            .build()
            .map_err(|e| OmdbError::from_transport(e, self.timeout))?;

        tracing::debug!(url = %redact_api_key(request.url()), "OMDb API request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| OmdbError::from_transport(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => {
                    return Err(OmdbError::from_transport(e, self.timeout));
                }
                Err(_) => String::from("<failed to read body>"),
            };
            return Err(OmdbError::Http { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OmdbError::from_transport(e, self.timeout))?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

/// Copies `url` with the `apikey` value masked, for logging.
fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                String::from("***")
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

impl LocalOmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn title(&self, title: &str) -> Result<OmdbRecord, OmdbError> {
        let query = [("t", String::from(title))];
        self.get_json(&query).await
    }

    #[instrument(skip_all, fields(imdb_id = %imdb_id, plot = ?plot))]
    async fn by_id(&self, imdb_id: &ImdbId, plot: PlotLength) -> Result<OmdbRecord, OmdbError> {
        let mut query = vec![("i", String::from(imdb_id.as_str()))];
        if plot == PlotLength::Full {
            query.push(("plot", String::from("full")));
        }
        self.get_json(&query).await
    }

    #[instrument(skip_all)]
    async fn search(&self, query: &str, page: u32) -> Result<OmdbSearchResponse, OmdbError> {
        let params = [("s", String::from(query)), ("page", page.to_string())];
        self.get_json(&params).await
    }
}

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::{config, error::FetchError, info, utils};

/// Attempts per request unless the caller asks for a different count.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Fixed wait between two attempts of the same request.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Minimum time between two pagination progress lines.
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(15);

/// Bearer-authenticated Spotify Web API client.
///
/// Requests are sent one at a time. A failed request (network error, non-2xx
/// status or a body that is not JSON) is retried after [`RETRY_DELAY`]. When
/// every attempt fails the call returns [`FetchError::RetriesExhausted`] and
/// no partial result.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    token: String,
    base_url: String,
    pub(crate) retry_delay: Duration,
    pub(crate) progress_interval: Duration,
}

impl SpotifyClient {
    /// Creates a client for the configured API base (`SPOTIFY_API_URL`).
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, config::spotify_apiurl())
    }

    /// Creates a client for an explicit API base. Relative request paths are
    /// appended to `base_url`, so it should end in `/`.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: base_url.into(),
            retry_delay: RETRY_DELAY,
            progress_interval: PROGRESS_INTERVAL,
        }
    }

    #[must_use]
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    #[must_use]
    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `url` with `params` appended to its query.
    pub fn request_url(&self, url: &str, params: &[(&str, String)]) -> String {
        utils::append_query(&utils::resolve_url(&self.base_url, url), params)
    }

    /// GETs `url` as JSON with [`DEFAULT_MAX_ATTEMPTS`] attempts.
    pub async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        self.get_with_attempts(url, params, DEFAULT_MAX_ATTEMPTS)
            .await
    }

    /// GETs `url` as JSON, trying at most `max_attempts` times (at least once).
    pub async fn get_with_attempts(
        &self,
        url: &str,
        params: &[(&str, String)],
        max_attempts: u32,
    ) -> Result<Value, FetchError> {
        let url = self.request_url(url, params);
        let attempts = max_attempts.max(1);
        let mut reason = String::new();

        for attempt in 1..=attempts {
            match self.try_get(&url).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    info!("Couldn't load URL: {} ({})", url, err);
                    reason = err.to_string();
                    if attempt < attempts {
                        sleep(self.retry_delay).await;
                        info!("Trying again...");
                    }
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            url,
            attempts,
            reason,
        })
    }

    /// GETs `url` and decodes the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let value = self.get(url, params).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            url: self.request_url(url, params),
            reason: e.to_string(),
        })
    }

    async fn try_get(&self, url: &str) -> Result<Value, reqwest::Error> {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

//! HTTP client for the shortener and analytics services
//!
//! All responses arrive wrapped in the [`ApiResponse`] envelope. The client
//! unwraps it and maps every failure mode onto [`ApiError`] so callers can
//! distinguish "not found" from transport trouble and from a well-formed
//! response that simply carries no data.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::models::{ApiResponse, LinkAnalytics, ShortenedUrl};
use crate::config::Config;

/// Errors from a shortener/analytics API call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("short link not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response contained no data")]
    EmptyPayload,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Async seam over the shortener/analytics API
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Fetch the click history for a short link
    async fn fetch_analytics(&self, short_link: &str) -> ApiResult<LinkAnalytics>;

    /// Submit a URL for shortening
    async fn shorten(&self, url: &str) -> ApiResult<ShortenedUrl>;
}

/// Reduce user input to a bare short code.
///
/// A pasted full short URL (`https://host/abc12345`) is reduced to its
/// trailing path segment; bare codes pass through unchanged.
pub fn normalize_short_link(input: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .rsplit('/')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

#[derive(Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
}

/// `reqwest`-backed implementation of [`AnalyticsApi`]
pub struct HttpApiClient {
    http: reqwest::Client,
    analytics_base: String,
    shortener_base: String,
}

impl HttpApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            analytics_base: config.analytics_url.trim_end_matches('/').to_string(),
            shortener_base: config.shortener_url.trim_end_matches('/').to_string(),
        })
    }

    /// Unwrap an envelope body, surfacing `success: false` and absent data
    /// as [`ApiError::EmptyPayload`].
    fn unwrap_envelope<T>(body: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let envelope: ApiResponse<T> = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "failed to parse API response body");
            ApiError::from(e)
        })?;

        if !envelope.success {
            return Err(ApiError::EmptyPayload);
        }
        envelope.data.ok_or(ApiError::EmptyPayload)
    }
}

#[async_trait]
impl AnalyticsApi for HttpApiClient {
    async fn fetch_analytics(&self, short_link: &str) -> ApiResult<LinkAnalytics> {
        let url = format!("{}/{}", self.analytics_base, short_link);
        debug!(%short_link, "fetching analytics");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        Self::unwrap_envelope(&body)
    }

    async fn shorten(&self, url: &str) -> ApiResult<ShortenedUrl> {
        let endpoint = format!("{}/", self.shortener_base);
        debug!(%url, "submitting URL for shortening");

        let response = self
            .http
            .post(&endpoint)
            .json(&ShortenRequest { url })
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        Self::unwrap_envelope(&body)
    }
}

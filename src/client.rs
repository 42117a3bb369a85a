use std::time::{Duration, Instant};

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::TargetConfig;
use crate::types::BatchRequest;

const USER_AGENT: &str = concat!("airwatch-smoke/", env!("CARGO_PKG_VERSION"));

/// Transport-level failure taxonomy for one request attempt.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot connect to {url} ({source})")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Raw observation of one HTTP exchange. The client reports, the check judges.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
    pub duration: Duration,
}

/// Typed wrapper around the backend's wire surface.
pub struct BackendClient {
    http: reqwest::Client,
    config: TargetConfig,
}

impl BackendClient {
    pub fn new(config: TargetConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET /health with the quick timeout.
    pub async fn get_health(&self) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/health", self.config.base_url);
        let request = self.http.get(&url).timeout(self.config.quick_timeout);
        self.send(request, &url, self.config.quick_timeout).await
    }

    /// GET /api/air-quality with the full parameter set and the fetch timeout.
    pub async fn get_air_quality(
        &self,
        lat: f64,
        lng: f64,
        city: &str,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/air-quality", self.config.base_url);
        let request = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("city", city.to_string()),
            ])
            .timeout(self.config.fetch_timeout);
        self.send(request, &url, self.config.fetch_timeout).await
    }

    /// POST /api/air-quality/batch with the fetch timeout.
    pub async fn post_air_quality_batch(
        &self,
        batch: &BatchRequest,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/air-quality/batch", self.config.base_url);
        let request = self
            .http
            .post(&url)
            .json(batch)
            .timeout(self.config.fetch_timeout);
        self.send(request, &url, self.config.fetch_timeout).await
    }

    /// GET /api/air-quality without the required parameters, on purpose.
    pub async fn get_air_quality_unparameterized(&self) -> Result<ApiResponse, ClientError> {
        let url = format!("{}/api/air-quality", self.config.base_url);
        let request = self.http.get(&url).timeout(self.config.quick_timeout);
        self.send(request, &url, self.config.quick_timeout).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
        timeout: Duration,
    ) -> Result<ApiResponse, ClientError> {
        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| classify(e, url, timeout))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, url, timeout))?;
        Ok(ApiResponse {
            status,
            body,
            duration: start.elapsed(),
        })
    }
}

fn classify(source: reqwest::Error, url: &str, timeout: Duration) -> ClientError {
    if source.is_timeout() {
        ClientError::Timeout {
            url: url.to_string(),
            timeout,
        }
    } else if source.is_connect() {
        ClientError::Connect {
            url: url.to_string(),
            source,
        }
    } else {
        ClientError::Request {
            url: url.to_string(),
            source,
        }
    }
}

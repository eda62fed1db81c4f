//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Single-shot requests: every resolution issues exactly one GET,
//!   and failures map straight to FetchError

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("jitver/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                FetchError::network(
                    String::new(),
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        coordinate: &Coordinate,
    ) -> Result<T, FetchError> {
        debug!(url = %url, coordinate = %coordinate, "issuing GET request");
        self.execute(self.client.get(url), coordinate).await
    }

    /// Perform a GET request with query parameters and parse the JSON response
    ///
    /// Query values are percent-encoded by reqwest, so callers can pass
    /// them raw.
    pub async fn get_json_with_query<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        coordinate: &Coordinate,
    ) -> Result<T, FetchError> {
        debug!(url = %url, coordinate = %coordinate, "issuing GET request with query");
        self.execute(self.client.get(url).query(query), coordinate)
            .await
    }

    /// Send a request once and map transport/status/body failures
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
        coordinate: &Coordinate,
    ) -> Result<T, FetchError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(coordinate.to_string())
            } else {
                FetchError::network(coordinate.to_string(), e.to_string())
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::not_found(coordinate.to_string()));
        }

        if !status.is_success() {
            return Err(FetchError::http(coordinate.to_string(), status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            FetchError::invalid_response(
                coordinate.to_string(),
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("failed to create default HTTP client")
    }
}

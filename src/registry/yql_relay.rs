//! Legacy YQL relay source
//!
//! JSONP-era transport that proxied the build API through a YQL relay.
//! The relay fetches the target URL server-side and re-serves the JSON
//! wrapped in an envelope: `{query: {results: {json: {...}}}}`.
//!
//! The public Yahoo endpoint was discontinued; this source remains for
//! deployments running a compatible relay and is opt-in.

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// Historical YQL relay base URL
const YQL_RELAY_URL: &str = "https://query.yahooapis.com";

/// Default target the relay is asked to fetch
const JITPACK_API_URL: &str = "https://jitpack.io";

/// Proxied source going through a YQL-compatible relay
pub struct YqlRelaySource {
    client: HttpClient,
    relay_url: String,
    target_url: String,
}

/// Relay envelope: `query.results.json` wraps the proxied document
#[derive(Debug, Deserialize)]
struct YqlEnvelope {
    query: Option<YqlQuery>,
}

#[derive(Debug, Deserialize)]
struct YqlQuery {
    results: Option<YqlResults>,
}

#[derive(Debug, Deserialize)]
struct YqlResults {
    json: Option<ProxiedBuild>,
}

#[derive(Debug, Deserialize)]
struct ProxiedBuild {
    version: Option<String>,
}

impl YqlRelaySource {
    /// Create a new relay source with the historical defaults
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            relay_url: YQL_RELAY_URL.to_string(),
            target_url: JITPACK_API_URL.to_string(),
        }
    }

    /// Override the relay base URL
    pub fn with_relay_url(mut self, relay_url: &str) -> Self {
        self.relay_url = relay_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the target base URL the relay is asked to fetch
    pub fn with_target_url(mut self, target_url: &str) -> Self {
        self.target_url = target_url.trim_end_matches('/').to_string();
        self
    }

    /// YQL statement selecting the target build URL as JSON
    fn build_query(&self, coordinate: &Coordinate) -> String {
        format!(
            r#"SELECT * FROM json WHERE url="{}/api/builds/{}/{}/latest""#,
            self.target_url, coordinate.group, coordinate.artifact
        )
    }

    /// Relay endpoint the query is sent to
    fn endpoint(&self) -> String {
        format!("{}/v1/public/yql", self.relay_url)
    }
}

#[async_trait]
impl VersionSource for YqlRelaySource {
    fn source_name(&self) -> &'static str {
        "YQL relay"
    }

    async fn fetch_latest(&self, coordinate: &Coordinate) -> Result<String, FetchError> {
        let query = self.build_query(coordinate);
        let envelope: YqlEnvelope = self
            .client
            .get_json_with_query(
                &self.endpoint(),
                &[
                    ("q", query.as_str()),
                    ("format", "json"),
                    ("jsonCompat", "new"),
                ],
                coordinate,
            )
            .await?;

        // The relay reports its own fetch failures as a null `results`.
        let json = envelope
            .query
            .and_then(|q| q.results)
            .and_then(|r| r.json)
            .ok_or_else(|| {
                warn!(coordinate = %coordinate, "relay envelope missing query.results.json");
                FetchError::invalid_response(
                    coordinate.to_string(),
                    "relay envelope missing query.results.json",
                )
            })?;

        match json.version {
            Some(version) => Ok(version),
            None => {
                warn!(coordinate = %coordinate, "proxied build response has no version field");
                Err(FetchError::missing_version(coordinate.to_string()))
            }
        }
    }
}

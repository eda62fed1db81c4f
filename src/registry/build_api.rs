//! JitPack build API source
//!
//! Fetches the latest build version directly from the build index.
//! API endpoint: https://jitpack.io/api/builds/{group}/{artifact}/latest

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// JitPack build API base URL
const JITPACK_API_URL: &str = "https://jitpack.io";

/// Direct build API source
pub struct BuildApiSource {
    client: HttpClient,
    base_url: String,
}

/// Latest build response
///
/// The index returns additional fields (build status, timestamps); only
/// `version` is read.
#[derive(Debug, Deserialize)]
struct LatestBuildResponse {
    version: Option<String>,
}

impl BuildApiSource {
    /// Create a new build API source
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: JITPACK_API_URL.to_string(),
        }
    }

    /// Override the base URL (self-hosted index, or a test server)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the latest-build URL for a coordinate
    fn build_url(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}/api/builds/{}/{}/latest",
            self.base_url, coordinate.group, coordinate.artifact
        )
    }
}

#[async_trait]
impl VersionSource for BuildApiSource {
    fn source_name(&self) -> &'static str {
        "JitPack build API"
    }

    async fn fetch_latest(&self, coordinate: &Coordinate) -> Result<String, FetchError> {
        let url = self.build_url(coordinate);
        let response: LatestBuildResponse = self.client.get_json(&url, coordinate).await?;

        match response.version {
            Some(version) => Ok(version),
            None => {
                warn!(coordinate = %coordinate, "latest build response has no version field");
                Err(FetchError::missing_version(coordinate.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_source() -> BuildApiSource {
        BuildApiSource::new(HttpClient::new().unwrap())
    }

    #[test]
    fn test_source_name() {
        assert_eq!(test_source().source_name(), "JitPack build API");
    }

    #[test]
    fn test_build_url() {
        let coord = Coordinate::new("acme", "widget").unwrap();
        assert_eq!(
            test_source().build_url(&coord),
            "https://jitpack.io/api/builds/acme/widget/latest"
        );
    }

    #[test]
    fn test_build_url_with_custom_base() {
        let source = test_source().with_base_url("http://localhost:8080/");
        let coord = Coordinate::new("com.github.acme", "widget").unwrap();
        assert_eq!(
            source.build_url(&coord),
            "http://localhost:8080/api/builds/com.github.acme/widget/latest"
        );
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"{"version": "2.4", "status": "ok", "isTag": true}"#;
        let response: LatestBuildResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.version.as_deref(), Some("2.4"));
    }

    #[test]
    fn test_deserialize_response_without_version() {
        let json = r#"{"status": "error"}"#;
        let response: LatestBuildResponse = serde_json::from_str(json).unwrap();
        assert!(response.version.is_none());
    }

    #[test]
    fn test_deserialize_rejects_non_string_version() {
        let json = r#"{"version": 2.4}"#;
        let result = serde_json::from_str::<LatestBuildResponse>(json);
        assert!(result.is_err());
    }
}

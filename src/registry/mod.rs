//! Version sources for the JitPack build index
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Direct build API source
//! - Legacy YQL relay source (JSONP-era proxy transport)

mod build_api;
mod client;
mod yql_relay;

pub use build_api::BuildApiSource;
pub use client::HttpClient;
pub use yql_relay::YqlRelaySource;

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use async_trait::async_trait;

/// Trait for sources that resolve the latest published build version
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Get the source name for diagnostics
    fn source_name(&self) -> &'static str;

    /// Fetch the latest version for a coordinate
    ///
    /// Issues exactly one outbound request; all failures are terminal.
    async fn fetch_latest(&self, coordinate: &Coordinate) -> Result<String, FetchError>;
}

/// Transport variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Direct GET against the build API
    #[default]
    BuildApi,
    /// Proxied through a YQL-compatible relay
    YqlRelay,
}

/// Create a version source for the given transport variant
///
/// `api_url` overrides the build API base (also the relay's target);
/// `relay_url` overrides the relay base.
pub fn create_source(
    kind: SourceKind,
    client: HttpClient,
    api_url: Option<&str>,
    relay_url: Option<&str>,
) -> Box<dyn VersionSource> {
    match kind {
        SourceKind::BuildApi => {
            let mut source = BuildApiSource::new(client);
            if let Some(url) = api_url {
                source = source.with_base_url(url);
            }
            Box::new(source)
        }
        SourceKind::YqlRelay => {
            let mut source = YqlRelaySource::new(client);
            if let Some(url) = relay_url {
                source = source.with_relay_url(url);
            }
            if let Some(url) = api_url {
                source = source.with_target_url(url);
            }
            Box::new(source)
        }
    }
}

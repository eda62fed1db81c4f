//! jitver - JitPack latest-version resolver library
//!
//! This library resolves the latest published build version for a
//! Maven-style coordinate (group:artifact) from the JitPack build index:
//! - Direct build API transport
//! - Legacy YQL relay transport (JSONP-era proxy)

pub mod cli;
pub mod coordinate;
pub mod error;
pub mod output;
pub mod registry;

pub use coordinate::Coordinate;
pub use error::FetchError;

use registry::{BuildApiSource, HttpClient, VersionSource};

/// Resolve the latest published version for a group/artifact pair
///
/// Convenience entry point using the default build API transport with
/// default client settings. One outbound request per call; every failure
/// surfaces as a typed [`FetchError`].
///
/// ```no_run
/// # async fn example() -> Result<(), jitver::FetchError> {
/// let version = jitver::resolve_latest("com.github.acme", "widget").await?;
/// println!("{}", version);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_latest(group: &str, artifact: &str) -> Result<String, FetchError> {
    let coordinate = Coordinate::new(group, artifact)?;
    let client = HttpClient::new()?;
    BuildApiSource::new(client).fetch_latest(&coordinate).await
}

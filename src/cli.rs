//! CLI argument parsing module for jitver

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use crate::registry::SourceKind;
use clap::Parser;
use std::time::Duration;

/// Parse timeout string as whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Resolve the latest JitPack build version for a Maven coordinate
#[derive(Parser, Debug, Clone)]
#[command(
    name = "jitver",
    version,
    about = "Resolve the latest JitPack build version for a Maven coordinate"
)]
pub struct CliArgs {
    /// Coordinate as 'group:artifact', or just the group when ARTIFACT is given
    #[arg(value_name = "COORDINATE")]
    pub coordinate: String,

    /// Artifact id (when the first argument is only the group)
    #[arg(value_name = "ARTIFACT")]
    pub artifact: Option<String>,

    // Output options
    /// Output result in JSON format
    #[arg(long)]
    pub json: bool,

    /// Quiet mode - print only the version string
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(long)]
    pub verbose: bool,

    // Transport options
    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30", value_name = "SECS")]
    pub timeout: Duration,

    /// Resolve through the legacy YQL relay instead of the build API
    #[arg(long)]
    pub legacy_relay: bool,

    /// Override the build API base URL (self-hosted index)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the relay base URL (only used with --legacy-relay)
    #[arg(long, value_name = "URL")]
    pub relay_url: Option<String>,
}

impl CliArgs {
    /// Resolve the coordinate from the one- or two-argument form
    pub fn parse_coordinate(&self) -> Result<Coordinate, FetchError> {
        match &self.artifact {
            Some(artifact) => Coordinate::new(&self.coordinate, artifact),
            None => self.coordinate.parse(),
        }
    }

    /// Which transport variant to use
    pub fn source_kind(&self) -> SourceKind {
        if self.legacy_relay {
            SourceKind::YqlRelay
        } else {
            SourceKind::BuildApi
        }
    }
}

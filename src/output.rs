//! Output formatting for resolved versions
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Quiet output (bare version, for shell substitution)

use crate::coordinate::Coordinate;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Print only the version string
    pub quiet: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, quiet: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Self { format, quiet }
    }
}

/// A successfully resolved coordinate/version pair
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Group id
    pub group: String,
    /// Artifact id
    pub artifact: String,
    /// Latest published version
    pub version: String,
}

impl Resolution {
    /// Create a new resolution result
    pub fn new(coordinate: &Coordinate, version: impl Into<String>) -> Self {
        Self {
            group: coordinate.group.clone(),
            artifact: coordinate.artifact.clone(),
            version: version.into(),
        }
    }
}

/// Format and write a resolution according to the configuration
///
/// Quiet mode wins over the format selection.
pub fn write_resolution(
    config: &OutputConfig,
    resolution: &Resolution,
    writer: &mut dyn Write,
) -> io::Result<()> {
    if config.quiet {
        return writeln!(writer, "{}", resolution.version);
    }

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(resolution).map_err(io::Error::other)?;
            writeln!(writer, "{}", json)
        }
        OutputFormat::Text => {
            writeln!(
                writer,
                "{}:{} {}",
                resolution.group,
                resolution.artifact,
                resolution.version.green().bold()
            )
        }
    }
}

//! jitver - JitPack latest-version CLI
//!
//! Resolves the latest published build version for a Maven-style
//! coordinate (group:artifact) and prints it as text, JSON, or a bare
//! version string.

use clap::Parser;
use jitver::cli::CliArgs;
use jitver::output::{write_resolution, OutputConfig, Resolution};
use jitver::registry::{create_source, HttpClient};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.verbose {
        init_tracing();
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber for library diagnostics
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jitver=debug")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let coordinate = args.parse_coordinate()?;
    let client = HttpClient::with_timeout(args.timeout)?;

    let source = create_source(
        args.source_kind(),
        client,
        args.api_url.as_deref(),
        args.relay_url.as_deref(),
    );

    let version = source.fetch_latest(&coordinate).await?;

    let config = OutputConfig::from_cli(args.json, args.quiet);
    let resolution = Resolution::new(&coordinate, version);

    let mut stdout = io::stdout().lock();
    write_resolution(&config, &resolution, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

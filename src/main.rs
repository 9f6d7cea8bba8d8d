//! relnotes - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use relnotes::app::{Generation, exit_code};
use relnotes::cli::Cli;
use relnotes::config::load_config;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    let messages = &config.output_messages;

    // Step 1: Validate input, find a token and the repository
    let result = match Generation::prepare(&cli, &config, Path::new(".")) {
        // Step 2: Generate and write both documents
        Ok(generation) => {
            println!("{}", messages.generating_release_notes_message);
            generation.run().await
        }
        Err(e) => Err(e),
    };

    match &result {
        Ok(sink) => println!(
            "Release notes generated successfully, check {} and {}",
            sink.markdown_path().display(),
            sink.html_path().display()
        ),
        Err(e) => eprintln!("{}", messages.report(e)),
    }

    Ok(exit_code(&result))
}

/// Console logging to stderr, controlled by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use git2gpt::cli::Cli;
use git2gpt::config::ConfigBuilder;
use git2gpt::run;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to 'info' (or 'debug' with --debug) unless RUST_LOG says otherwise.
    let default_directive = if cli.debug || cfg!(debug_assertions) {
        "git2gpt=debug"
    } else {
        "git2gpt=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    log::debug!("Starting git2gpt v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Parsed arguments: {:?}", cli);

    let config = ConfigBuilder::from_cli(cli)
        .build()
        .context("Invalid command-line arguments")?;

    match run(&config) {
        Ok(Some(tokens)) => eprintln!("Estimated number of tokens: {}", tokens),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

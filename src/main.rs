use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use socialfeed::cli::{Cli, Commands};
use socialfeed::config::Config;
use socialfeed::services::{OutputSettings, RunService};
use socialfeed::sources::{FeedSource, SourceRegistry};
use socialfeed::storage::FsOutputStore;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Platform credentials may live in .env
    Config::load_env();

    match cli.command {
        Commands::Run { config, output } => cmd_run(&config, output),
        Commands::Sources { config } => cmd_sources(&config),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_example(path)
        .with_context(|| format!("could not load configuration from {}", path.display()))
}

fn cmd_run(config_path: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let source_registry = SourceRegistry::from_config(&config)?;

    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
    let store = FsOutputStore::new(&output_dir)
        .with_context(|| format!("could not create output directory {}", output_dir.display()))?;

    let service = RunService::new(
        source_registry,
        store,
        OutputSettings::from_config(&config),
        config.output_limit,
    );

    let summary = service.run().context("run aborted")?;

    println!(
        "Wrote {} items to {}",
        summary.metadata.total_items,
        output_dir.display()
    );
    for page in &summary.metadata.main_feed_pages {
        println!("  {}", page);
    }

    if !summary.warnings.is_empty() {
        println!("\n{} warnings:", summary.warnings.len());
        for warning in &summary.warnings {
            println!("  ! {}", warning);
        }
    }

    Ok(())
}

fn cmd_sources(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let source_registry = SourceRegistry::from_config(&config)?;

    println!("Enabled sources:\n");
    for (i, source) in source_registry.sources().iter().enumerate() {
        println!("  {}. {}", i + 1, source.describe());
    }

    Ok(())
}

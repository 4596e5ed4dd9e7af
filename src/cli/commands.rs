use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "socialfeed")]
#[command(about = "Aggregates social platform posts and RSS feeds into paginated JSON feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all enabled sources and write the aggregated feeds
    Run {
        /// Path to the TOML configuration file
        #[arg(short, long, env = "FEED_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Output directory (overrides output_dir from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List enabled sources in fetch order
    Sources {
        /// Path to the TOML configuration file
        #[arg(short, long, env = "FEED_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

//! Showcase CLI - index and screenshot preview generator for HTML demo folders.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Index and screenshot preview generator for HTML demo folders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to showcase.toml config file, relative to the root
    #[arg(short, long, default_value = "showcase.toml")]
    config: PathBuf,

    /// Project root containing the demo folders
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the list-view index page
    Index {
        /// Open the generated page
        #[arg(long)]
        open: bool,
    },

    /// Capture screenshots and generate the grid preview page
    Preview {
        /// Open the generated page
        #[arg(long)]
        open: bool,
    },

    /// Write a default showcase.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Index { open } => {
            let settings = commands::config::load(&cli.root, &cli.config)?;
            commands::index::run(settings.build, open)?;
        }
        Commands::Preview { open } => {
            let settings = commands::config::load(&cli.root, &cli.config)?;
            commands::preview::run(settings.build, settings.capture, open).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.root, &cli.config, yes)?;
        }
    }

    Ok(())
}

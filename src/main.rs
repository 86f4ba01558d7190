//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Content engine for a markdown-driven photo portfolio", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all photo collections, newest first
    #[command(alias = "ls")]
    List,

    /// Print the available collection slugs
    Slugs,

    /// Show a single collection
    Show {
        /// Slug of the collection to show
        slug: String,

        /// Print the full collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every collection file
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let folio = folio_rs::Folio::new(&base_dir)?;

    match cli.command {
        Commands::List => {
            folio_rs::commands::list::run(&folio).await?;
        }

        Commands::Slugs => {
            folio_rs::commands::list::slugs(&folio).await?;
        }

        Commands::Show { slug, json } => {
            folio_rs::commands::show::run(&folio, &slug, json).await?;
        }

        Commands::Check => {
            folio_rs::commands::check::run(&folio).await?;
        }
    }

    Ok(())
}

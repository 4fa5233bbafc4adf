// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! fontgrab CLI - fetch Google Fonts CSS and binaries for local serving.
//!
//! # Examples
//!
//! ```bash
//! # Fetch one family with defaults
//! fontgrab single "Roboto"
//!
//! # Specific weights, latin only, write style.css
//! fontgrab single "Open Sans" --weight 400 --weight 700 --subset latin --write-css
//!
//! # Several families with one merged stylesheet
//! fontgrab multiple "Roboto" "Lato" --write-css --merge
//!
//! # The entire catalog, 5 families per chunk
//! fontgrab all --chunk-size 5 --empty-dir
//!
//! # Refresh the metadata cache
//! fontgrab metadata --override
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{all, metadata, multiple, single};

// ============================================================================
// CLI Definition
// ============================================================================

/// fontgrab CLI - fetch Google Fonts for local serving.
#[derive(Parser)]
#[command(name = "fontgrab")]
#[command(about = "Fetch Google Fonts CSS and binaries for local serving")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Root output directory.
    #[arg(long, global = true)]
    pub out_dir: Option<String>,

    /// Public base prefix for rewritten font references.
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one family.
    #[command(visible_alias = "s")]
    Single(single::SingleArgs),

    /// Fetch several families concurrently.
    #[command(visible_alias = "m")]
    Multiple(multiple::MultipleArgs),

    /// Fetch the entire catalog in retrying chunks.
    #[command(visible_alias = "a")]
    All(all::AllArgs),

    /// Refresh the metadata cache.
    Metadata(metadata::MetadataArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("fontgrab=debug,info")
    } else {
        EnvFilter::new("fontgrab=info,warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Single(args) => single::run(args, &cli).await,
        Commands::Multiple(args) => multiple::run(args, &cli).await,
        Commands::All(args) => all::run(args, &cli).await,
        Commands::Metadata(args) => metadata::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }

    Ok(())
}

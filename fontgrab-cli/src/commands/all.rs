//! All command - fetch the entire catalog.

use anyhow::Result;
use clap::Args;
use fontgrab::{ChunkOptions, CssOptions, FontFetcher};
use tracing::info;

use super::{build_options, FontArgs};
use crate::output;
use crate::Cli;

/// Arguments for the all command.
#[derive(Args)]
pub struct AllArgs {
    #[command(flatten)]
    pub font: FontArgs,

    /// Families per chunk.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Milliseconds to sleep between chunks.
    #[arg(long)]
    pub chunk_delay: Option<u64>,

    /// Retries per failed chunk (0 fails a chunk on its first error).
    #[arg(long)]
    pub retry: Option<u32>,

    /// Milliseconds to sleep between chunk retries.
    #[arg(long)]
    pub retry_delay: Option<u64>,

    /// Clear the output directory before the run.
    #[arg(long)]
    pub empty_dir: bool,

    /// Also write one merged stylesheet over the whole run.
    #[arg(long)]
    pub merge: bool,
}

/// Runs the all command.
///
/// Family-level failures do not fail the command; they are reported in the
/// output and the exit code stays zero.
pub async fn run(args: &AllArgs, cli: &Cli) -> Result<()> {
    info!("Fetching full catalog");

    let mut options = build_options(cli, &args.font);
    options.chunk = Some(ChunkOptions {
        size: args.chunk_size,
        delay: args.chunk_delay,
        retry: args.retry,
        retry_delay: args.retry_delay,
        empty_dir: args.empty_dir.then_some(true),
    });
    if args.merge {
        options.css = Some(CssOptions {
            write: Some(true),
            merge: Some(true),
        });
    }

    let fetcher = FontFetcher::new(Some(&options))?;
    let result = fetcher.all(None).await?;

    output::print_all(&result, cli)?;
    Ok(())
}

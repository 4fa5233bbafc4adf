//! Metadata command - refresh the catalog cache.

use anyhow::Result;
use clap::Args;
use fontgrab::{FetcherOptions, FontFetcher};
use tracing::info;

use crate::Cli;

/// Arguments for the metadata command.
#[derive(Args)]
pub struct MetadataArgs {
    /// Re-fetch even if a cache file already exists.
    #[arg(long = "override")]
    pub override_existing: bool,
}

/// Runs the metadata command.
pub async fn run(args: &MetadataArgs, cli: &Cli) -> Result<()> {
    info!("Refreshing metadata cache");

    let options = FetcherOptions {
        base: cli.base.clone(),
        out_dir: cli.out_dir.clone(),
        ..FetcherOptions::default()
    };
    let fetcher = FontFetcher::new(Some(&options))?;
    fetcher.metadata(args.override_existing).await?;

    if !cli.quiet {
        println!("Metadata cache is up to date");
    }
    Ok(())
}

//! Multiple command - fetch several families concurrently.

use anyhow::Result;
use clap::Args;
use fontgrab::{CssOptions, FontFetcher, FontRequest};
use tracing::info;

use super::{build_options, FontArgs};
use crate::output;
use crate::Cli;

/// Arguments for the multiple command.
#[derive(Args)]
pub struct MultipleArgs {
    /// Family names.
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub font: FontArgs,

    /// Also write one merged stylesheet for the whole batch.
    #[arg(long)]
    pub merge: bool,
}

/// Runs the multiple command.
pub async fn run(args: &MultipleArgs, cli: &Cli) -> Result<()> {
    info!(count = args.names.len(), "Fetching families");

    let mut options = build_options(cli, &args.font);
    if args.merge {
        options.css = Some(CssOptions {
            write: Some(true),
            merge: Some(true),
        });
    }

    let fetcher = FontFetcher::new(Some(&options))?;
    let requests: Vec<FontRequest> = args.names.iter().map(FontRequest::new).collect();
    let result = fetcher.multiple(&requests, None).await?;

    output::print_batch(&result, cli)?;
    Ok(())
}

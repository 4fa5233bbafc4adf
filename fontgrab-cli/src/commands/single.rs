//! Single command - fetch one family.

use anyhow::Result;
use clap::Args;
use fontgrab::FontFetcher;
use tracing::info;

use super::{build_options, FontArgs};
use crate::output;
use crate::Cli;

/// Arguments for the single command.
#[derive(Args)]
pub struct SingleArgs {
    /// Family name, e.g. "Roboto".
    pub name: String,

    #[command(flatten)]
    pub font: FontArgs,
}

/// Runs the single command.
pub async fn run(args: &SingleArgs, cli: &Cli) -> Result<()> {
    info!(family = %args.name, "Fetching single family");

    let options = build_options(cli, &args.font);
    let fetcher = FontFetcher::new(Some(&options))?;
    let fonts = fetcher.single(&args.name, None, None).await?;

    output::print_single(&args.name, &fonts, cli)?;
    Ok(())
}

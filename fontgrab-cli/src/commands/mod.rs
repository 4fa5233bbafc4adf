//! CLI command implementations.

pub mod all;
pub mod metadata;
pub mod multiple;
pub mod single;

use clap::Args;
use fontgrab::{CssOptions, FetcherOptions, FontOptions};

use crate::Cli;

/// Font selection flags shared by the fetch commands.
#[derive(Args, Debug, Default)]
pub struct FontArgs {
    /// Weight filter; repeatable. Empty derives weights from the catalog.
    #[arg(long)]
    pub weight: Vec<u32>,

    /// Style filter; repeatable (normal, italic).
    #[arg(long)]
    pub style: Vec<String>,

    /// Subset filter; repeatable (latin, cyrillic, ...).
    #[arg(long)]
    pub subset: Vec<String>,

    /// font-display strategy sent to the CSS endpoint.
    #[arg(long)]
    pub display: Option<String>,

    /// Font binary output directory.
    #[arg(long)]
    pub font_out_dir: Option<String>,

    /// Write a style.css per family.
    #[arg(long)]
    pub write_css: bool,
}

/// Builds the option tree from the global and font-level flags.
pub fn build_options(cli: &Cli, font: &FontArgs) -> FetcherOptions {
    FetcherOptions {
        base: cli.base.clone(),
        out_dir: cli.out_dir.clone(),
        css: Some(CssOptions {
            write: font.write_css.then_some(true),
            merge: None,
        }),
        font: Some(FontOptions {
            weight: (!font.weight.is_empty()).then(|| font.weight.clone()),
            style: (!font.style.is_empty()).then(|| font.style.clone()),
            subset: (!font.subset.is_empty()).then(|| font.subset.clone()),
            display: font.display.clone(),
            out_dir: font.font_out_dir.clone(),
        }),
        ..FetcherOptions::default()
    }
}

//! Output formatting for fetch results.

use anyhow::Result;
use fontgrab::{FetchAllResult, FetchFontResult, FetchFontsResult};

use crate::{Cli, OutputFormat};

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

/// Prints the result of a single-family fetch.
pub fn print_single(name: &str, fonts: &FetchFontResult, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            if fonts.is_empty() {
                println!("{name}: no variants fetched");
            } else {
                let variants: Vec<&str> = fonts.keys().map(String::as_str).collect();
                println!("{name}: {}", variants.join(", "));
            }
        }
        OutputFormat::Json => print_json(fonts, cli.pretty)?,
    }
    Ok(())
}

/// Prints the result of a batch fetch.
pub fn print_batch(result: &FetchFontsResult, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            for family in result {
                let variants: Vec<&str> = family.fonts.keys().map(String::as_str).collect();
                println!("{}: {}", family.name, variants.join(", "));
            }
            println!();
            println!("Fetched {} families", result.len());
        }
        OutputFormat::Json => print_json(result, cli.pretty)?,
    }
    Ok(())
}

/// Prints the outcome of a whole-catalog run, failures included.
pub fn print_all(result: &FetchAllResult, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            println!("Fetched {} families", result.success.len());
            if !result.errors.is_empty() {
                println!("Failed {} families:", result.errors.len());
                for family in &result.errors {
                    println!("  {}", family.family);
                }
            }
        }
        OutputFormat::Json => print_json(result, cli.pretty)?,
    }
    Ok(())
}

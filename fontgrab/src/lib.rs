// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # fontgrab
//!
//! Batch fetcher for Google Fonts: resolves the remote family catalog,
//! fetches the variant CSS per family, downloads the referenced font
//! binaries, rewrites the CSS to local references, and optionally persists
//! the result.
//!
//! The entry point is [`FontFetcher`]:
//!
//! ```ignore
//! use fontgrab::{FetcherOptions, FontFetcher};
//!
//! let fetcher = FontFetcher::new(None)?;
//!
//! // One family.
//! let fonts = fetcher.single("Roboto", None, None).await?;
//!
//! // The whole catalog, chunked and retrying; failures come back as data.
//! let outcome = fetcher.all(None).await?;
//! println!("fetched {}, failed {}", outcome.success.len(), outcome.errors.len());
//! ```

pub mod batch;
pub mod error;
pub mod fetcher;

pub use error::Error;
pub use fetcher::{FontFetcher, FontRequest};

// Re-export the types callers interact with.
pub use fontgrab_core::models::{
    Family, FamilyFonts, FetchAllResult, FetchFontResult, FetchFontsResult, FontMetadata,
    Metadata, VariantKey,
};
pub use fontgrab_core::options::{
    ChunkOptions, CssOptions, FetcherOptions, FontOptions, MetadataOptions, ResolvedOptions,
};
pub use fontgrab_fetch::HttpClient;
pub use fontgrab_store::MetadataCache;

// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # fontgrab Core
//!
//! Core types, options, and pure helpers for fontgrab.
//!
//! This crate holds everything the other fontgrab crates share and performs
//! no I/O of its own:
//!
//! - The remote catalog model ([`Metadata`], [`Family`], [`FontMetadata`])
//! - Parsed-CSS and fetch-result shapes ([`ParsedCss`], [`FetchFontResult`],
//!   [`FetchAllResult`])
//! - The option tree: partial user-facing [`FetcherOptions`] resolved into a
//!   complete [`ResolvedOptions`] by deep-merging over defaults
//! - Variant selection ([`build_variables`]) deciding which upright and
//!   italic weight tokens to request for a family
//! - List helpers ([`chunk`], [`normalize_name`])

pub mod error;
pub mod models;
pub mod options;
pub mod util;
pub mod variables;

pub use error::CoreError;

pub use models::{
    Family, FamilyFonts, FetchAllResult, FetchFontResult, FetchFontsResult, FontFace,
    FontMetadata, Metadata, ParsedCss, VariantKey,
};

pub use options::{
    merge_deep, ChunkOptions, CssOptions, FetcherOptions, FontOptions, MetadataOptions,
    ResolvedChunk, ResolvedCss, ResolvedFont, ResolvedMetadata, ResolvedOptions,
};

pub use util::{chunk, normalize_name};
pub use variables::{build_variables, Variables};

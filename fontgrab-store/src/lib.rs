// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # fontgrab Store
//!
//! Filesystem persistence for fontgrab:
//!
//! - [`metadata::MetadataCache`] - the on-disk catalog cache with its
//!   reuse-vs-override policy
//! - [`css`] - per-family `style.css` writing, cross-family merging, and
//!   output directory clearing

pub mod css;
pub mod error;
pub mod metadata;

pub use css::{clear_output_dir, merge_font_css, write_font_css};
pub use error::StoreError;
pub use metadata::MetadataCache;

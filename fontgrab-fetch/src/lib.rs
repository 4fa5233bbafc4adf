// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # fontgrab Fetch
//!
//! The network-facing half of fontgrab: a retrying HTTP client, the Google
//! Fonts CSS URL builder, the stylesheet block parser, and the binary font
//! downloader.
//!
//! - [`client::HttpClient`] - reqwest wrapper with a fixed-interval retry
//!   budget and a browser user-agent (the CSS endpoint serves
//!   format-reduced payloads to unknown clients)
//! - [`url::build_font_css_url`] - one request URL per variant group;
//!   upright and italic axes are never mixed in a single request
//! - [`css`] - comment-delimited block parsing, minification, URL
//!   collection, and local-reference rewriting
//! - [`download`] - per-family binary downloads and the metadata endpoint

pub mod client;
pub mod css;
pub mod download;
pub mod error;
pub mod retry;
pub mod url;

pub use client::HttpClient;
pub use css::{collect_font_urls, minify_css, parse_font_css, parse_font_url, rewrite_css};
pub use download::{
    download_font, fetch_metadata, local_reference, DownloadFontOptions, METADATA_URL,
};
pub use error::FetchError;
pub use retry::RetryStrategy;
pub use url::{build_font_css_url, CSS_BASE_URL};

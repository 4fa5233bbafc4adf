//! Parsed CSS tables and fetch results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::family::Family;

/// One subset's parsed `@font-face` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFace {
    /// Remote URL of the binary asset referenced by the block.
    pub url: String,
    /// Minified CSS text of the block.
    pub css: String,
}

/// A parsed stylesheet: variant key -> subset -> face.
///
/// `BTreeMap` keeps variant keys in a stable order so concatenated output
/// is deterministic.
pub type ParsedCss = BTreeMap<String, BTreeMap<String, FontFace>>;

/// Final CSS per variant key, with remote URLs rewritten to local
/// references.
pub type FetchFontResult = BTreeMap<String, String>;

/// One family's fetch outcome within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyFonts {
    /// The family name as requested.
    pub name: String,
    /// Rewritten CSS per variant key.
    pub fonts: FetchFontResult,
}

/// Ordered batch outcome, one entry per successfully fetched family.
pub type FetchFontsResult = Vec<FamilyFonts>;

/// Outcome of a whole-catalog run.
///
/// Family-level failures never abort the run; the families of every chunk
/// that exhausted its retries are returned in `errors` with their full
/// catalog entries so a caller can retry or report on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchAllResult {
    /// Families fetched successfully, in catalog order.
    pub success: FetchFontsResult,
    /// Families whose chunk permanently failed.
    pub errors: Vec<Family>,
}

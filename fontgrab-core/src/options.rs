//! Option resolution.
//!
//! Callers hand in a partial [`FetcherOptions`] tree; every top-level call
//! deep-merges it over the built-in defaults (or over the already resolved
//! base options for nested calls) to produce a fresh [`ResolvedOptions`].
//! Nothing is validated here; a malformed value surfaces where it is
//! consumed.
//!
//! The merge itself works on `serde_json::Value` so one function covers
//! every nesting level: `null` overrides are ignored, arrays concatenate
//! (defaults first), objects merge recursively, and otherwise the override
//! wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ============================================================================
// Deep Merge
// ============================================================================

/// Deep-merges `overrides` onto `defaults` and returns the merged value.
///
/// Neither input is mutated. A `null` override keeps the default; arrays
/// concatenate with the default items first (scalars are arraified when the
/// other side is an array); plain objects merge recursively; any other
/// pairing is won by the override.
pub fn merge_deep(defaults: &Value, overrides: &Value) -> Value {
    let (Value::Object(base), Value::Object(over)) = (defaults, overrides) else {
        return if overrides.is_null() {
            defaults.clone()
        } else {
            overrides.clone()
        };
    };

    let mut merged = base.clone();
    for (key, value) in over {
        if value.is_null() {
            continue;
        }

        let existing = merged.get(key).cloned();
        let next = match existing {
            None | Some(Value::Null) => value.clone(),
            Some(existing) if existing.is_array() || value.is_array() => {
                let mut items = arraify(&existing);
                items.extend(arraify(value));
                Value::Array(items)
            }
            Some(existing) if existing.is_object() && value.is_object() => {
                merge_deep(&existing, value)
            }
            Some(_) => value.clone(),
        };
        merged.insert(key.clone(), next);
    }

    Value::Object(merged)
}

fn arraify(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

// ============================================================================
// Partial Options
// ============================================================================

/// User-facing options; every field is optional.
///
/// Absent fields keep their defaults (see [`ResolvedOptions`]). The same
/// type serves construction-time configuration and per-call overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetcherOptions {
    /// Public base prefix for rewritten font references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Root output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Metadata cache policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataOptions>,
    /// Chunking policy for whole-catalog runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk: Option<ChunkOptions>,
    /// CSS persistence policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<CssOptions>,
    /// Font selection policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
}

/// Partial metadata cache policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataOptions {
    /// Cache file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cache directory; falls back to the root output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Whether to re-fetch a cache file that already exists.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_existing: Option<bool>,
}

/// Partial chunking policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkOptions {
    /// Families per chunk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Milliseconds to sleep between chunks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    /// Retries per failed chunk; 0 means a failed chunk fails permanently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
    /// Milliseconds to sleep between chunk retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_delay: Option<u64>,
    /// Whether to clear the output directory before a whole-catalog run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<bool>,
}

/// Partial CSS persistence policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CssOptions {
    /// Whether to write a `style.css` per family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write: Option<bool>,
    /// Whether to also write one merged stylesheet per batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<bool>,
}

/// Partial font selection policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontOptions {
    /// Subset filter; empty keeps every subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<Vec<String>>,
    /// `font-display` strategy sent to the CSS endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Weight filter; empty derives weights from the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Vec<u32>>,
    /// Style filter; italic variants are fetched only when it contains
    /// "italic".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<String>>,
    /// Font binary output directory; falls back to the root output
    /// directory when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

// ============================================================================
// Resolved Options
// ============================================================================

/// Fully resolved configuration tree.
///
/// Built once per call level and never mutated afterwards; nested calls get
/// a fresh copy via [`ResolvedOptions::merged_with`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedOptions {
    /// Public base prefix for rewritten font references.
    #[serde(default)]
    pub base: String,
    /// Root output directory.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Metadata cache policy.
    #[serde(default)]
    pub metadata: ResolvedMetadata,
    /// Chunking policy.
    #[serde(default)]
    pub chunk: ResolvedChunk,
    /// CSS persistence policy.
    #[serde(default)]
    pub css: ResolvedCss,
    /// Font selection policy.
    #[serde(default)]
    pub font: ResolvedFont,
}

/// Resolved metadata cache policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMetadata {
    /// Cache file name.
    #[serde(default = "default_metadata_name")]
    pub name: String,
    /// Cache directory.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Whether to re-fetch an existing cache file.
    #[serde(rename = "override", default)]
    pub override_existing: bool,
}

/// Resolved chunking policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedChunk {
    /// Families per chunk.
    #[serde(default = "default_chunk_size")]
    pub size: usize,
    /// Milliseconds between chunks.
    #[serde(default = "default_chunk_delay")]
    pub delay: u64,
    /// Retries per failed chunk.
    #[serde(default = "default_chunk_retry")]
    pub retry: u32,
    /// Milliseconds between chunk retries.
    #[serde(default = "default_chunk_retry_delay")]
    pub retry_delay: u64,
    /// Whether to clear the output directory first.
    #[serde(default)]
    pub empty_dir: bool,
}

/// Resolved CSS persistence policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedCss {
    /// Write a `style.css` per family.
    #[serde(default)]
    pub write: bool,
    /// Also write one merged stylesheet per batch.
    #[serde(default)]
    pub merge: bool,
}

/// Resolved font selection policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedFont {
    /// Subset filter; empty keeps every subset.
    #[serde(default)]
    pub subset: Vec<String>,
    /// `font-display` strategy.
    #[serde(default = "default_display")]
    pub display: String,
    /// Weight filter; empty derives weights from the catalog.
    #[serde(default)]
    pub weight: Vec<u32>,
    /// Style filter.
    #[serde(default = "default_styles")]
    pub style: Vec<String>,
    /// Font binary output directory.
    #[serde(default = "default_font_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "./output".to_string()
}

fn default_metadata_name() -> String {
    "metadata.json".to_string()
}

fn default_chunk_size() -> usize {
    3
}

fn default_chunk_delay() -> u64 {
    200
}

fn default_chunk_retry() -> u32 {
    5
}

fn default_chunk_retry_delay() -> u64 {
    1000
}

fn default_display() -> String {
    "swap".to_string()
}

fn default_styles() -> Vec<String> {
    vec!["normal".to_string(), "italic".to_string()]
}

fn default_font_out_dir() -> String {
    "./output/fonts".to_string()
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            base: String::new(),
            out_dir: default_out_dir(),
            metadata: ResolvedMetadata::default(),
            chunk: ResolvedChunk::default(),
            css: ResolvedCss::default(),
            font: ResolvedFont::default(),
        }
    }
}

impl Default for ResolvedMetadata {
    fn default() -> Self {
        Self {
            name: default_metadata_name(),
            out_dir: default_out_dir(),
            override_existing: false,
        }
    }
}

impl Default for ResolvedChunk {
    fn default() -> Self {
        Self {
            size: default_chunk_size(),
            delay: default_chunk_delay(),
            retry: default_chunk_retry(),
            retry_delay: default_chunk_retry_delay(),
            empty_dir: false,
        }
    }
}

impl Default for ResolvedFont {
    fn default() -> Self {
        Self {
            subset: Vec::new(),
            display: default_display(),
            weight: Vec::new(),
            style: default_styles(),
            out_dir: default_font_out_dir(),
        }
    }
}

impl ResolvedOptions {
    /// Resolves user options over the built-in defaults.
    pub fn resolve(overrides: Option<&FetcherOptions>) -> Result<Self, CoreError> {
        Self::default().merged_with(overrides)
    }

    /// Returns a fresh copy with `overrides` deep-merged on top.
    ///
    /// The receiver is left untouched; call levels never share a mutable
    /// options object.
    pub fn merged_with(&self, overrides: Option<&FetcherOptions>) -> Result<Self, CoreError> {
        let Some(overrides) = overrides else {
            return Ok(self.clone());
        };
        let base = serde_json::to_value(self)?;
        let over = serde_json::to_value(overrides)?;
        Ok(serde_json::from_value(merge_deep(&base, &over))?)
    }

    /// The directory font binaries land in: the font-level directory when
    /// set, otherwise the root output directory.
    pub fn font_out_dir(&self) -> &str {
        if self.font.out_dir.is_empty() {
            &self.out_dir
        } else {
            &self.font.out_dir
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_deep_objects() {
        let merged = merge_deep(&json!({"a": {"x": 1}}), &json!({"a": {"y": 2}}));
        assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_merge_deep_arrays_concatenate() {
        let merged = merge_deep(&json!({"a": [1]}), &json!({"a": [2]}));
        assert_eq!(merged, json!({"a": [1, 2]}));

        // A scalar facing an array is arraified.
        let merged = merge_deep(&json!({"a": 1}), &json!({"a": [2]}));
        assert_eq!(merged, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_merge_deep_null_keeps_default() {
        let merged = merge_deep(&json!({"a": 1, "b": {"c": 2}}), &json!({"a": null, "b": null}));
        assert_eq!(merged, json!({"a": 1, "b": {"c": 2}}));
    }

    #[test]
    fn test_merge_deep_scalar_override_wins() {
        let merged = merge_deep(&json!({"a": 1, "b": "x"}), &json!({"a": 2, "c": true}));
        assert_eq!(merged, json!({"a": 2, "b": "x", "c": true}));
    }

    #[test]
    fn test_resolve_defaults() {
        let options = ResolvedOptions::resolve(None).expect("resolves");
        assert_eq!(options.out_dir, "./output");
        assert_eq!(options.metadata.name, "metadata.json");
        assert_eq!(options.chunk.size, 3);
        assert_eq!(options.chunk.retry, 5);
        assert_eq!(options.font.display, "swap");
        assert_eq!(options.font.style, vec!["normal", "italic"]);
        assert!(!options.css.write);
    }

    #[test]
    fn test_resolve_nested_override() {
        let overrides = FetcherOptions {
            out_dir: Some("./fonts".to_string()),
            chunk: Some(ChunkOptions {
                size: Some(10),
                ..ChunkOptions::default()
            }),
            ..FetcherOptions::default()
        };
        let options = ResolvedOptions::resolve(Some(&overrides)).expect("resolves");

        assert_eq!(options.out_dir, "./fonts");
        assert_eq!(options.chunk.size, 10);
        // Untouched siblings keep their defaults.
        assert_eq!(options.chunk.delay, 200);
        assert_eq!(options.metadata.out_dir, "./output");
    }

    #[test]
    fn test_merged_with_leaves_parent_untouched() {
        let base = ResolvedOptions::resolve(None).expect("resolves");
        let overrides = FetcherOptions {
            css: Some(CssOptions {
                write: Some(true),
                merge: None,
            }),
            ..FetcherOptions::default()
        };
        let child = base.merged_with(Some(&overrides)).expect("merges");

        assert!(child.css.write);
        assert!(!base.css.write);
    }

    #[test]
    fn test_weight_filter_concatenates() {
        let base = ResolvedOptions::resolve(Some(&FetcherOptions {
            font: Some(FontOptions {
                weight: Some(vec![400]),
                ..FontOptions::default()
            }),
            ..FetcherOptions::default()
        }))
        .expect("resolves");

        let child = base
            .merged_with(Some(&FetcherOptions {
                font: Some(FontOptions {
                    weight: Some(vec![700]),
                    ..FontOptions::default()
                }),
                ..FetcherOptions::default()
            }))
            .expect("merges");

        assert_eq!(child.font.weight, vec![400, 700]);
    }

    #[test]
    fn test_font_out_dir_fallback() {
        let mut options = ResolvedOptions::default();
        assert_eq!(options.font_out_dir(), "./output/fonts");

        options.font.out_dir = String::new();
        assert_eq!(options.font_out_dir(), "./output");
    }
}

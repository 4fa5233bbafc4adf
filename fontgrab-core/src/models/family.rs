//! The remote catalog shape.
//!
//! The metadata endpoint returns a `familyMetadataList` of families, each
//! with its supported subsets and a map of variant key ("400", "400i") to
//! per-variant metrics. The catalog carries more fields than these; serde
//! ignores what we do not model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::variant::VariantKey;

/// Per-variant metrics from the catalog.
///
/// Live catalog entries carry `null` for some of these, so every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetadata {
    /// Stroke thickness rating.
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Slant rating.
    #[serde(default)]
    pub slant: Option<f64>,
    /// Width rating.
    #[serde(default)]
    pub width: Option<f64>,
    /// Line height in em.
    #[serde(default)]
    pub line_height: Option<f64>,
}

/// One catalog entry: a named family with its subsets and variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Family name, e.g. "Roboto".
    pub family: String,
    /// Character-range subsets the family ships, e.g. "latin", "cyrillic".
    #[serde(default)]
    pub subsets: Vec<String>,
    /// Available variants keyed by variant key ("400", "400i", ...).
    #[serde(default)]
    pub fonts: BTreeMap<String, FontMetadata>,
}

impl Family {
    /// Returns the non-italic weights of this family, ascending.
    pub fn upright_weights(&self) -> Vec<u32> {
        let mut weights: Vec<u32> = self
            .fonts
            .keys()
            .filter_map(|key| key.parse::<VariantKey>().ok())
            .filter(|key| !key.italic)
            .map(|key| key.weight)
            .collect();
        weights.sort_unstable();
        weights
    }
}

/// The full remote catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// All known families.
    #[serde(default)]
    pub family_metadata_list: Vec<Family>,
}

impl Metadata {
    /// Looks up a family by exact name.
    pub fn find_family(&self, name: &str) -> Option<&Family> {
        self.family_metadata_list
            .iter()
            .find(|entry| entry.family == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_family() -> Family {
        serde_json::from_value(serde_json::json!({
            "family": "Roboto",
            "subsets": ["latin", "cyrillic"],
            "fonts": {
                "100": { "thickness": 2, "slant": 1, "width": 7, "lineHeight": 1.17 },
                "400": { "thickness": 4, "slant": 1, "width": 7, "lineHeight": 1.17 },
                "400i": { "thickness": null, "slant": 3, "width": 7, "lineHeight": 1.17 },
                "700": { "thickness": 6, "slant": 1, "width": 7, "lineHeight": 1.17 }
            }
        }))
        .expect("valid family")
    }

    #[test]
    fn test_upright_weights_sorted() {
        let family = sample_family();
        assert_eq!(family.upright_weights(), vec![100, 400, 700]);
    }

    #[test]
    fn test_catalog_decode() {
        let metadata: Metadata = serde_json::from_value(serde_json::json!({
            "familyMetadataList": [
                { "family": "Roboto", "subsets": [], "fonts": {} },
                { "family": "Open Sans", "subsets": [], "fonts": {} }
            ],
            "promotedScript": null
        }))
        .expect("valid catalog");

        assert_eq!(metadata.family_metadata_list.len(), 2);
        assert!(metadata.find_family("Open Sans").is_some());
        assert!(metadata.find_family("open sans").is_none());
    }
}

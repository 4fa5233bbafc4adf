//! Variant selection.
//!
//! Given the resolved font policy and a family's catalog entry, decide
//! which weight tokens to request, split into the upright and italic
//! groups. Pure; malformed inputs just produce empty output.

use std::collections::BTreeMap;

use crate::models::{FontMetadata, VariantKey};
use crate::options::ResolvedFont;

/// The weight tokens to request for one family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    /// Upright weights, ascending, as request tokens ("400").
    pub weight_variables: Vec<String>,
    /// Italic weights, ascending, as request tokens ("400i").
    pub italic_variables: Vec<String>,
}

/// Computes the upright and italic weight tokens for a family.
///
/// Candidate weights are the configured filter when non-empty, otherwise
/// every non-italic key of the catalog entry; either way sorted ascending
/// and deduplicated. A candidate makes it into `weight_variables` only if
/// the family actually has that upright variant, and into
/// `italic_variables` only if the style filter asks for italic and the
/// `"{weight}i"` variant exists.
pub fn build_variables(
    font: &ResolvedFont,
    metadata: &BTreeMap<String, FontMetadata>,
) -> Variables {
    let has_italic = font.style.iter().any(|style| style == "italic");

    let mut weights: Vec<u32> = if font.weight.is_empty() {
        metadata
            .keys()
            .filter_map(|key| key.parse::<VariantKey>().ok())
            .filter(|key| !key.italic)
            .map(|key| key.weight)
            .collect()
    } else {
        font.weight.clone()
    };
    weights.sort_unstable();
    weights.dedup();

    let weight_variables = weights
        .iter()
        .filter(|weight| metadata.contains_key(&weight.to_string()))
        .map(ToString::to_string)
        .collect();

    let italic_variables = if has_italic {
        weights
            .iter()
            .filter(|weight| metadata.contains_key(&format!("{weight}i")))
            .map(|weight| format!("{weight}i"))
            .collect()
    } else {
        Vec::new()
    };

    Variables {
        weight_variables,
        italic_variables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(keys: &[&str]) -> BTreeMap<String, FontMetadata> {
        keys.iter()
            .map(|key| {
                (
                    (*key).to_string(),
                    FontMetadata {
                        thickness: None,
                        slant: None,
                        width: None,
                        line_height: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_derives_weights_from_metadata() {
        let font = ResolvedFont::default();
        let vars = build_variables(&font, &metadata(&["700", "100", "400", "400i", "700i"]));

        assert_eq!(vars.weight_variables, vec!["100", "400", "700"]);
        assert_eq!(vars.italic_variables, vec!["400i", "700i"]);
    }

    #[test]
    fn test_explicit_weights_intersect_available() {
        let font = ResolvedFont {
            weight: vec![900, 400, 100],
            ..ResolvedFont::default()
        };
        let vars = build_variables(&font, &metadata(&["400", "700", "900"]));

        // Sorted ascending, limited to what the family ships.
        assert_eq!(vars.weight_variables, vec!["400", "900"]);
    }

    #[test]
    fn test_no_italic_without_style() {
        let font = ResolvedFont {
            style: vec!["normal".to_string()],
            ..ResolvedFont::default()
        };
        let vars = build_variables(&font, &metadata(&["400", "400i"]));

        assert_eq!(vars.weight_variables, vec!["400"]);
        assert!(vars.italic_variables.is_empty());
    }

    #[test]
    fn test_duplicate_weights_collapse() {
        let font = ResolvedFont {
            weight: vec![400, 400, 700],
            ..ResolvedFont::default()
        };
        let vars = build_variables(&font, &metadata(&["400", "700"]));

        assert_eq!(vars.weight_variables, vec!["400", "700"]);
    }

    #[test]
    fn test_empty_metadata_yields_empty() {
        let vars = build_variables(&ResolvedFont::default(), &BTreeMap::new());
        assert!(vars.weight_variables.is_empty());
        assert!(vars.italic_variables.is_empty());
    }
}

//! CSS persistence.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::StoreError;
use fontgrab_core::models::FetchFontsResult;
use fontgrab_core::normalize_name;

/// Writes `out_dir/<normalized name>/style.css` containing the
/// concatenation of `fonts`' values in key order.
///
/// Works for a single family (variant key -> css) and for merged bundles
/// (family name -> css) alike.
pub async fn write_font_css(
    name: &str,
    fonts: &BTreeMap<String, String>,
    out_dir: &str,
) -> Result<(), StoreError> {
    let font_dir = Path::new(out_dir).join(normalize_name(name));
    tokio::fs::create_dir_all(&font_dir).await?;

    let content: String = fonts.values().map(String::as_str).collect();
    let target = font_dir.join("style.css");
    tokio::fs::write(&target, content).await?;

    debug!(path = %target.display(), "Wrote stylesheet");
    Ok(())
}

/// Collapses a batch result into one CSS string per family name.
pub fn merge_font_css(fonts: &FetchFontsResult) -> BTreeMap<String, String> {
    fonts
        .iter()
        .map(|family| {
            let css: String = family.fonts.values().map(String::as_str).collect();
            (family.name.clone(), css)
        })
        .collect()
}

/// Recursively removes the output directory. A missing directory is fine.
pub async fn clear_output_dir(path: &str) -> Result<(), StoreError> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => {
            info!(path = %path, "Cleared output directory");
            Ok(())
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontgrab_core::models::FamilyFonts;
    use tempfile::tempdir;

    fn fonts(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, css)| ((*key).to_string(), (*css).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_write_font_css() {
        let dir = tempdir().expect("temp dir");
        let out_dir = dir.path().to_string_lossy().into_owned();

        write_font_css(
            "Open Sans",
            &fonts(&[("400", "@font-face{a}"), ("700", "@font-face{b}")]),
            &out_dir,
        )
        .await
        .expect("writes");

        let written = std::fs::read_to_string(dir.path().join("opensans").join("style.css"))
            .expect("read");
        assert_eq!(written, "@font-face{a}@font-face{b}");
    }

    #[test]
    fn test_merge_font_css() {
        let batch: FetchFontsResult = vec![
            FamilyFonts {
                name: "Roboto".to_string(),
                fonts: fonts(&[("400", "r4"), ("700", "r7")]),
            },
            FamilyFonts {
                name: "Lato".to_string(),
                fonts: fonts(&[("400", "l4")]),
            },
        ];

        let merged = merge_font_css(&batch);
        assert_eq!(merged["Roboto"], "r4r7");
        assert_eq!(merged["Lato"], "l4");
    }

    #[tokio::test]
    async fn test_clear_output_dir() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("output");
        std::fs::create_dir_all(target.join("roboto")).expect("mkdir");
        std::fs::write(target.join("roboto").join("1.woff2"), b"x").expect("write");

        let path = target.to_string_lossy().into_owned();
        clear_output_dir(&path).await.expect("clears");
        assert!(!target.exists());

        // Clearing again is a no-op.
        clear_output_dir(&path).await.expect("missing dir ok");
    }
}

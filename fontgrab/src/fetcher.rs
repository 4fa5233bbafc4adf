//! The fetch orchestrator.
//!
//! [`FontFetcher`] drives the whole pipeline: variant selection, CSS
//! fetch + parse, concurrent binary downloads, local-reference rewriting,
//! and optional persistence, at three call levels:
//!
//! - [`FontFetcher::single`] - one family
//! - [`FontFetcher::multiple`] - a concurrent batch, fail-fast
//! - [`FontFetcher::all`] - the full catalog, chunked and retrying, where
//!   failure is returned as data instead of an error

use futures::future::try_join_all;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

use crate::batch::drain_chunks;
use crate::error::Error;
use fontgrab_core::models::{
    FamilyFonts, FetchAllResult, FetchFontResult, FetchFontsResult, FontMetadata,
};
use fontgrab_core::options::{CssOptions, FetcherOptions, FontOptions, ResolvedOptions};
use fontgrab_core::{build_variables, chunk};
use fontgrab_fetch::{
    build_font_css_url, collect_font_urls, download_font, parse_font_css, rewrite_css,
    DownloadFontOptions, HttpClient, CSS_BASE_URL,
};
use fontgrab_store::{clear_output_dir, merge_font_css, write_font_css, MetadataCache};

/// Bundle name for the merged stylesheet of a `multiple` batch.
const MULTIPLE_BUNDLE: &str = "multiple";

/// Bundle name for the merged stylesheet of a whole-catalog run.
const ALL_BUNDLE: &str = "all";

/// One entry of a `multiple` batch.
#[derive(Debug, Clone, Default)]
pub struct FontRequest {
    /// Family name.
    pub name: String,
    /// Per-family option overrides.
    pub options: Option<FetcherOptions>,
    /// Explicit variant metadata; when set, the cache lookup inside
    /// `single` is bypassed.
    pub metadata: Option<BTreeMap<String, FontMetadata>>,
}

impl FontRequest {
    /// Creates a request for a family with no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
            metadata: None,
        }
    }
}

/// The font fetch orchestrator.
///
/// Base options are resolved once at construction; every call level merges
/// its own overrides onto them and works with the fresh copy. The metadata
/// cache path is fixed at construction from the base options.
#[derive(Debug, Clone)]
pub struct FontFetcher {
    options: ResolvedOptions,
    cache: MetadataCache,
    client: HttpClient,
}

impl FontFetcher {
    /// Creates a fetcher, resolving `options` over the defaults.
    pub fn new(options: Option<&FetcherOptions>) -> Result<Self, Error> {
        let options = ResolvedOptions::resolve(options)?;
        let metadata_dir = if options.metadata.out_dir.is_empty() {
            &options.out_dir
        } else {
            &options.metadata.out_dir
        };
        let cache = MetadataCache::new(Path::new(metadata_dir).join(&options.metadata.name));
        let client = HttpClient::new()?;

        Ok(Self {
            options,
            cache,
            client,
        })
    }

    /// The resolved base options.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Ensures the metadata cache is populated, re-fetching when
    /// `override_existing` is set.
    pub async fn metadata(&self, override_existing: bool) -> Result<(), Error> {
        info!("Refreshing metadata cache");
        self.cache.refresh(&self.client, override_existing).await?;
        Ok(())
    }

    /// Fetches one family.
    ///
    /// A family absent from the catalog, or one with no usable variants,
    /// yields an empty result rather than an error. Network, parse, and
    /// filesystem failures propagate.
    pub async fn single(
        &self,
        name: &str,
        overrides: Option<&FetcherOptions>,
        metadata: Option<&BTreeMap<String, FontMetadata>>,
    ) -> Result<FetchFontResult, Error> {
        info!(family = %name, "Fetching font");
        let options = self.options.merged_with(overrides)?;

        let font_metadata = match metadata {
            Some(metadata) => metadata.clone(),
            None => {
                self.cache.refresh(&self.client, false).await?;
                let catalog = self.cache.load().await?;
                catalog
                    .find_family(name)
                    .map(|family| family.fonts.clone())
                    .unwrap_or_default()
            }
        };

        let variables = build_variables(&options.font, &font_metadata);

        // Upright and italic groups go out as separate requests; the CSS
        // endpoint rejects mixed ital axis values.
        let mut css = String::new();
        if !variables.weight_variables.is_empty() {
            let url = build_font_css_url(
                CSS_BASE_URL,
                name,
                &variables.weight_variables,
                &options.font.display,
            );
            css.push_str(&self.client.get_text(&url).await?);
        }
        if !variables.italic_variables.is_empty() {
            let url = build_font_css_url(
                CSS_BASE_URL,
                name,
                &variables.italic_variables,
                &options.font.display,
            );
            css.push_str(&self.client.get_text(&url).await?);
        }

        if css.is_empty() {
            debug!(family = %name, "No matching variants, returning empty result");
            return Ok(FetchFontResult::new());
        }

        let parsed = parse_font_css(&css, &options.font.subset);
        let urls = collect_font_urls(&parsed);
        if urls.is_empty() {
            return Ok(FetchFontResult::new());
        }

        let out_dir = options.font_out_dir();
        let downloads = urls.iter().enumerate().map(|(index, url)| {
            let download = DownloadFontOptions {
                url: url.clone(),
                name: name.to_string(),
                base: options.base.clone(),
                filename: format!("{}.woff2", index + 1),
                out_dir: out_dir.to_string(),
            };
            async move {
                let local = download_font(&self.client, &download).await?;
                Ok::<_, Error>((download.url, local))
            }
        });
        let downloaded: HashMap<String, String> =
            try_join_all(downloads).await?.into_iter().collect();

        let fonts = rewrite_css(&parsed, &downloaded);
        if options.css.write {
            write_font_css(name, &fonts, out_dir).await?;
        }

        info!(family = %name, variants = fonts.len(), "Fetched font");
        Ok(fonts)
    }

    /// Fetches a batch of families concurrently.
    ///
    /// Fail-fast: the first family that errors rejects the whole call, and
    /// results of the other in-flight families are discarded at this level
    /// (the tasks themselves run to completion). `all` compensates for
    /// this at the chunk boundary; direct callers get the documented
    /// all-or-nothing behavior.
    pub async fn multiple(
        &self,
        requests: &[FontRequest],
        overrides: Option<&FetcherOptions>,
    ) -> Result<FetchFontsResult, Error> {
        info!(count = requests.len(), "Fetching font batch");
        let options = self.options.merged_with(overrides)?;

        let tasks = requests.iter().map(|request| async move {
            let fonts = self
                .single(&request.name, request.options.as_ref(), request.metadata.as_ref())
                .await?;
            Ok::<_, Error>(FamilyFonts {
                name: request.name.clone(),
                fonts,
            })
        });
        let result = try_join_all(tasks).await?;

        if options.css.write && options.css.merge {
            let merged = merge_font_css(&result);
            write_font_css(MULTIPLE_BUNDLE, &merged, &options.out_dir).await?;
        }

        Ok(result)
    }

    /// Fetches the entire catalog in sequential, retrying chunks.
    ///
    /// Family- and chunk-level failures never reject this call; the
    /// affected families come back in [`FetchAllResult::errors`] with
    /// their full catalog entries. Failures before the chunk loop (output
    /// clearing, catalog fetch/decode) still propagate.
    pub async fn all(&self, overrides: Option<&FetcherOptions>) -> Result<FetchAllResult, Error> {
        let options = self.options.merged_with(overrides)?;

        if options.chunk.empty_dir {
            clear_output_dir(&options.out_dir).await?;
        }

        self.cache.refresh(&self.client, false).await?;
        let catalog = self.cache.load().await?;

        let chunks = chunk(&catalog.family_metadata_list, options.chunk.size);
        info!(
            families = catalog.family_metadata_list.len(),
            chunks = chunks.len(),
            "Fetching full catalog"
        );

        // Sub-calls must not write per-chunk stylesheets; the one merged
        // bundle is written after the loop over the accumulated successes.
        let mut chunk_overrides = overrides.cloned().unwrap_or_default();
        chunk_overrides.css = Some(CssOptions {
            write: Some(false),
            merge: Some(false),
        });
        let chunk_overrides = &chunk_overrides;

        let result = drain_chunks(&chunks, &options.chunk, |families| async move {
            let requests: Vec<FontRequest> = families
                .iter()
                .map(|family| {
                    let mut request_options = chunk_overrides.clone();
                    let font = request_options.font.get_or_insert_with(FontOptions::default);
                    font.weight = Some(family.upright_weights());
                    FontRequest {
                        name: family.family.clone(),
                        options: Some(request_options),
                        metadata: Some(family.fonts.clone()),
                    }
                })
                .collect();
            self.multiple(&requests, Some(chunk_overrides)).await
        })
        .await;

        if options.css.write && options.css.merge {
            let merged = merge_font_css(&result.success);
            write_font_css(ALL_BUNDLE, &merged, &options.out_dir).await?;
        }

        info!(
            success = result.success.len(),
            errors = result.errors.len(),
            "Catalog fetch finished"
        );
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fontgrab_core::options::MetadataOptions;
    use tempfile::tempdir;

    // A fetcher whose metadata cache file already exists; the cache is
    // reused as-is, so no request ever goes out.
    fn cache_backed_fetcher(dir: &Path, catalog: &str) -> FontFetcher {
        let out_dir = dir.to_string_lossy().into_owned();
        std::fs::write(dir.join("metadata.json"), catalog).expect("write cache");

        let options = FetcherOptions {
            out_dir: Some(out_dir.clone()),
            metadata: Some(MetadataOptions {
                out_dir: Some(out_dir),
                ..MetadataOptions::default()
            }),
            ..FetcherOptions::default()
        };
        FontFetcher::new(Some(&options)).expect("fetcher")
    }

    #[tokio::test]
    async fn test_single_unknown_family_is_empty() {
        let dir = tempdir().expect("temp dir");
        let fetcher = cache_backed_fetcher(dir.path(), r#"{"familyMetadataList": []}"#);

        let fonts = fetcher.single("Roboto", None, None).await.expect("fetches");
        assert!(fonts.is_empty());
    }

    #[tokio::test]
    async fn test_single_with_empty_metadata_is_empty() {
        let dir = tempdir().expect("temp dir");
        let fetcher = cache_backed_fetcher(dir.path(), r#"{"familyMetadataList": []}"#);

        // Explicit metadata bypasses the cache lookup entirely.
        let fonts = fetcher
            .single("Roboto", None, Some(&BTreeMap::new()))
            .await
            .expect("fetches");
        assert!(fonts.is_empty());
    }

    #[tokio::test]
    async fn test_multiple_preserves_request_order() {
        let dir = tempdir().expect("temp dir");
        let fetcher = cache_backed_fetcher(dir.path(), r#"{"familyMetadataList": []}"#);

        let requests = vec![
            FontRequest {
                metadata: Some(BTreeMap::new()),
                ..FontRequest::new("Roboto")
            },
            FontRequest {
                metadata: Some(BTreeMap::new()),
                ..FontRequest::new("Lato")
            },
        ];
        let result = fetcher.multiple(&requests, None).await.expect("fetches");

        let names: Vec<&str> = result.iter().map(|family| family.name.as_str()).collect();
        assert_eq!(names, ["Roboto", "Lato"]);
        assert!(result.iter().all(|family| family.fonts.is_empty()));
    }

    #[tokio::test]
    async fn test_multiple_fails_fast_on_family_error() {
        let dir = tempdir().expect("temp dir");

        // A directory at the cache path makes the catalog unreadable, so
        // any request without explicit metadata errors.
        std::fs::create_dir_all(dir.path().join("metadata.json")).expect("mkdir");
        let options = FetcherOptions {
            metadata: Some(MetadataOptions {
                out_dir: Some(dir.path().to_string_lossy().into_owned()),
                ..MetadataOptions::default()
            }),
            ..FetcherOptions::default()
        };
        let fetcher = FontFetcher::new(Some(&options)).expect("fetcher");

        let requests = vec![
            FontRequest {
                metadata: Some(BTreeMap::new()),
                ..FontRequest::new("Roboto")
            },
            FontRequest::new("Lato"),
        ];

        // One bad family rejects the whole batch.
        assert!(fetcher.multiple(&requests, None).await.is_err());
    }
}

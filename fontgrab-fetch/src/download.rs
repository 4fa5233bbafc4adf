//! Binary font downloads and the metadata endpoint.

use std::path::Path;
use tracing::debug;

use crate::client::HttpClient;
use crate::error::FetchError;
use fontgrab_core::normalize_name;

/// Public metadata endpoint listing every known family.
pub const METADATA_URL: &str = "https://fonts.google.com/metadata/fonts";

/// Parameters for one binary download.
#[derive(Debug, Clone, Default)]
pub struct DownloadFontOptions {
    /// Remote asset URL.
    pub url: String,
    /// Family name; normalized into the path and reference.
    pub name: String,
    /// Public base prefix for the returned reference.
    pub base: String,
    /// Target file name, e.g. "1.woff2".
    pub filename: String,
    /// Root directory binaries are written under.
    pub out_dir: String,
}

/// The public reference a downloaded file is addressed by:
/// `<base>/<normalized family>/<filename>`.
pub fn local_reference(base: &str, name: &str, filename: &str) -> String {
    format!("{base}/{}/{filename}", normalize_name(name))
}

/// Downloads one binary asset to `out_dir/<normalized family>/<filename>`
/// and returns its public reference.
///
/// The family directory is created as needed; an empty response body maps
/// to [`FetchError::NotFound`].
pub async fn download_font(
    client: &HttpClient,
    options: &DownloadFontOptions,
) -> Result<String, FetchError> {
    let name = normalize_name(&options.name);
    let font_dir = Path::new(&options.out_dir).join(&name);
    tokio::fs::create_dir_all(&font_dir).await?;

    let bytes = client.get_bytes(&options.url).await?;
    let target = font_dir.join(&options.filename);
    tokio::fs::write(&target, &bytes).await?;

    debug!(
        url = %options.url,
        path = %target.display(),
        size = bytes.len(),
        "Downloaded font binary"
    );

    Ok(local_reference(&options.base, &options.name, &options.filename))
}

/// Fetches the raw metadata catalog body.
pub async fn fetch_metadata(client: &HttpClient) -> Result<String, FetchError> {
    client.get_text(METADATA_URL).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_reference() {
        assert_eq!(
            local_reference("/assets/fonts", "Open Sans", "1.woff2"),
            "/assets/fonts/opensans/1.woff2"
        );
        // An empty base yields a root-relative reference.
        assert_eq!(local_reference("", "Roboto", "2.woff2"), "/roboto/2.woff2");
    }
}

//! Stylesheet parsing and rewriting.
//!
//! Stylesheets from the CSS endpoint are organized as comment-delimited
//! blocks, one `@font-face` rule per subset:
//!
//! ```css
//! /* latin */
//! @font-face {
//!   font-family: 'Roboto';
//!   font-style: normal;
//!   font-weight: 400;
//!   src: url(https://fonts.gstatic.com/...) format('woff2');
//! }
//! ```
//!
//! Parsing splits on the comment delimiter and pattern-matches the weight,
//! style, and asset URL out of each block. Blocks missing a weight or
//! style are dropped silently; that tolerance is deliberate.

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use fontgrab_core::models::{FetchFontResult, FontFace, ParsedCss};

// ============================================================================
// Regex Patterns
// ============================================================================

static FONT_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-weight:\s*(\d+)").expect("Invalid regex"));

static FONT_STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-style:\s*(\w+)").expect("Invalid regex"));

static FONT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\((.*?)\)").expect("Invalid regex"));

static AROUND_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,])\s*").expect("Invalid regex"));

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("Invalid regex"));

static SPACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("Invalid regex"));

// ============================================================================
// Parsing
// ============================================================================

/// Extracts the first `url(...)` reference from a rule, quotes stripped.
/// Returns an empty string when the rule has none.
pub fn parse_font_url(css: &str) -> String {
    FONT_URL_RE
        .captures(css)
        .and_then(|captures| captures.get(1))
        .map(|url| url.as_str().replace(['\'', '"'], ""))
        .unwrap_or_default()
}

/// Minifies a rule: whitespace around punctuation collapsed, comments
/// stripped, superfluous semicolons and newlines dropped.
pub fn minify_css(css: &str) -> String {
    let css = AROUND_PUNCT_RE.replace_all(css, "$1");
    let css = css.replace(";}", "}");
    let css = COMMENT_RE.replace_all(&css, "");
    let css = SPACES_RE.replace_all(&css, " ");
    css.replace('\n', "").trim().to_string()
}

/// Parses a fetched stylesheet into a variant-keyed table.
///
/// Each `/* subset */` block contributes one [`FontFace`] under
/// `[weight + italic marker][subset]`, subject to the subset filter (an
/// empty filter keeps everything). Blocks without a recognizable weight or
/// style are skipped.
pub fn parse_font_css(css: &str, subsets: &[String]) -> ParsedCss {
    let mut content = ParsedCss::new();

    for block in css.split("/* ").skip(1) {
        let Some((subset, rule)) = block.split_once(" */") else {
            continue;
        };
        let rule = rule.trim();

        let weight = FONT_WEIGHT_RE
            .captures(rule)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str());
        let style = FONT_STYLE_RE
            .captures(rule)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str());

        let (Some(weight), Some(style)) = (weight, style) else {
            continue;
        };
        if subset.is_empty() {
            continue;
        }

        let marker = if style == "normal" { "" } else { "i" };
        let key = format!("{weight}{marker}");

        if subsets.is_empty() || subsets.iter().any(|wanted| wanted == subset) {
            content.entry(key).or_insert_with(BTreeMap::new).insert(
                subset.to_string(),
                FontFace {
                    url: parse_font_url(rule),
                    css: minify_css(rule),
                },
            );
        }
    }

    content
}

// ============================================================================
// URL Collection & Rewriting
// ============================================================================

/// Returns the unique asset URLs referenced by a parsed table, in
/// first-seen order. A binary shared by several subsets appears once.
pub fn collect_font_urls(content: &ParsedCss) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for faces in content.values() {
        for face in faces.values() {
            if seen.insert(face.url.clone()) {
                urls.push(face.url.clone());
            }
        }
    }
    urls
}

/// Rebuilds per-variant CSS with remote URLs substituted by their local
/// references. Faces whose URL has no entry in `downloaded` are skipped.
pub fn rewrite_css(content: &ParsedCss, downloaded: &HashMap<String, String>) -> FetchFontResult {
    let mut bundle = FetchFontResult::new();
    for (key, faces) in content {
        let mut css = String::new();
        for face in faces.values() {
            if let Some(local) = downloaded.get(&face.url) {
                css.push_str(&face.css.replace(&face.url, local));
            }
        }
        bundle.insert(key.clone(), css);
    }
    bundle
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSS: &str = r"/* cyrillic */
@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/s/roboto/v30/cyr.woff2) format('woff2');
  unicode-range: U+0400-045F;
}
/* latin */
@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/s/roboto/v30/lat.woff2) format('woff2');
}
/* latin */
@font-face {
  font-family: 'Roboto';
  font-style: italic;
  font-weight: 700;
  font-display: swap;
  src: url(https://fonts.gstatic.com/s/roboto/v30/lat-it.woff2) format('woff2');
}
";

    #[test]
    fn test_parse_groups_by_variant_and_subset() {
        let parsed = parse_font_css(SAMPLE_CSS, &[]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["400"].len(), 2);
        assert_eq!(
            parsed["400"]["latin"].url,
            "https://fonts.gstatic.com/s/roboto/v30/lat.woff2"
        );
        assert_eq!(
            parsed["700i"]["latin"].url,
            "https://fonts.gstatic.com/s/roboto/v30/lat-it.woff2"
        );
    }

    #[test]
    fn test_parse_applies_subset_filter() {
        let parsed = parse_font_css(SAMPLE_CSS, &["latin".to_string()]);

        assert!(parsed["400"].contains_key("latin"));
        assert!(!parsed["400"].contains_key("cyrillic"));
    }

    #[test]
    fn test_parse_drops_blocks_without_weight() {
        let css = "/* latin */\n@font-face { font-style: normal; src: url(a.woff2); }\n\
            /* latin-ext */\n@font-face { font-style: normal; font-weight: 400; src: url(b.woff2); }\n\
            /* greek */\n@font-face { font-style: italic; font-weight: 400; src: url(c.woff2); }\n";
        let parsed = parse_font_css(css, &[]);

        // One unparseable block between two valid ones is silently dropped.
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains_key("400"));
        assert!(parsed.contains_key("400i"));
    }

    #[test]
    fn test_minify() {
        let minified =
            minify_css("@font-face {\n  font-style: normal;\n  font-weight: 400;\n}\n");
        assert_eq!(minified, "@font-face{font-style:normal;font-weight:400}");
    }

    #[test]
    fn test_minify_strips_comments() {
        assert!(!minify_css("a { /* note */ color: red; }").contains("note"));
    }

    #[test]
    fn test_parse_font_url_strips_quotes() {
        assert_eq!(parse_font_url("src: url('a.woff2')"), "a.woff2");
        assert_eq!(parse_font_url("src: url(\"b.woff2\")"), "b.woff2");
        assert_eq!(parse_font_url("no url here"), "");
    }

    #[test]
    fn test_collect_urls_deduplicates_in_order() {
        let css = "/* latin */\n@font-face { font-style: normal; font-weight: 400; src: url(shared.woff2); }\n\
            /* latin-ext */\n@font-face { font-style: normal; font-weight: 400; src: url(shared.woff2); }\n\
            /* greek */\n@font-face { font-style: normal; font-weight: 700; src: url(bold.woff2); }\n";
        let parsed = parse_font_css(css, &[]);

        assert_eq!(collect_font_urls(&parsed), vec!["shared.woff2", "bold.woff2"]);
    }

    #[test]
    fn test_rewrite_replaces_every_remote_url() {
        let parsed = parse_font_css(SAMPLE_CSS, &[]);
        let downloaded: HashMap<String, String> = collect_font_urls(&parsed)
            .into_iter()
            .enumerate()
            .map(|(index, url)| (url, format!("/fonts/roboto/{}.woff2", index + 1)))
            .collect();

        let bundle = rewrite_css(&parsed, &downloaded);

        assert_eq!(bundle.len(), 2);
        for css in bundle.values() {
            assert!(!css.contains("fonts.gstatic.com"));
        }
        assert!(bundle["400"].contains("/fonts/roboto/"));
    }

    #[test]
    fn test_rewrite_skips_missing_downloads() {
        let parsed = parse_font_css(SAMPLE_CSS, &[]);
        let bundle = rewrite_css(&parsed, &HashMap::new());

        // Variants are present but carry no CSS when nothing was downloaded.
        assert!(bundle.values().all(String::is_empty));
    }
}

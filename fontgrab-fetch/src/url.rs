//! Request URL building for the CSS endpoint.

/// Public CSS endpoint.
pub const CSS_BASE_URL: &str = "https://fonts.googleapis.com/css2";

/// Builds the CSS request URL for one family and one variant group.
///
/// The endpoint does not accept mixed `ital` axis values in a single
/// request, so a group containing any italic-marked token is requested
/// entirely on the italic axis: every token is rewritten to
/// `1,<weight>` and the axis list gains the `ital,` prefix. The family
/// spec is sent unencoded; the endpoint expects the raw `:`/`@`/`;`
/// syntax.
pub fn build_font_css_url(base: &str, family: &str, variables: &[String], display: &str) -> String {
    let italic = variables.iter().any(|token| token.ends_with('i'));
    let axis: Vec<String> = variables
        .iter()
        .map(|token| {
            if italic {
                format!("1,{}", token.strip_suffix('i').unwrap_or(token))
            } else {
                token.clone()
            }
        })
        .collect();

    let ital = if italic { "ital," } else { "" };
    let spec = format!("{family}:{ital}wght@{}", axis.join(";"));
    format!("{base}?display={display}&family={spec}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_upright_url() {
        let url = build_font_css_url(CSS_BASE_URL, "Roboto", &tokens(&["400", "700"]), "swap");
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?display=swap&family=Roboto:wght@400;700"
        );
    }

    #[test]
    fn test_italic_url() {
        let url = build_font_css_url(CSS_BASE_URL, "Roboto", &tokens(&["400i", "700i"]), "swap");
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?display=swap&family=Roboto:ital,wght@1,400;1,700"
        );
    }

    #[test]
    fn test_mixed_group_promotes_whole_list_to_italic() {
        let url = build_font_css_url(CSS_BASE_URL, "Lato", &tokens(&["400", "700i"]), "swap");

        assert!(url.contains("ital,"));
        // No token keeps a trailing italic marker.
        assert!(url.ends_with("wght@1,400;1,700"));
    }

    #[test]
    fn test_display_strategy_in_query() {
        let url = build_font_css_url(CSS_BASE_URL, "Roboto", &tokens(&["400"]), "block");
        assert!(url.contains("display=block"));
    }
}

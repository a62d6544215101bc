// src/crawl/sanitize.rs
// =============================================================================
// Turns a URL into the name used both as the dedup key and as the file name.
//
// Rules:
// - one leading "https://" is removed ("http://" is kept)
// - every character outside [A-Za-z0-9-] becomes '_', one for one
//
// Different URLs can map to the same name (https vs. no scheme, '?' vs. '/').
// Those are treated as the same page.
// =============================================================================

const STRIPPED_PREFIX: &str = "https://";

pub fn sanitize(url: &str) -> String {
    url.strip_prefix(STRIPPED_PREFIX)
        .unwrap_or(url)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_https_url() {
        assert_eq!(
            sanitize("https://www.example.com/path?query=string#fragment"),
            "www_example_com_path_query_string_fragment"
        );
    }

    #[test]
    fn test_http_prefix_is_kept() {
        assert_eq!(sanitize("http://example.com"), "http___example_com");
    }

    #[test]
    fn test_only_one_leading_prefix_is_stripped() {
        assert_eq!(
            sanitize("https://https://example.com"),
            "https___example_com"
        );
        assert_eq!(
            sanitize("http://example.com/?next=https://other.com"),
            "http___example_com__next_https___other_com"
        );
    }

    #[test]
    fn test_hyphens_and_digits_survive() {
        assert_eq!(sanitize("https://my-site.io/v2"), "my-site_io_v2");
    }

    #[test]
    fn test_non_ascii_maps_to_single_underscore() {
        assert_eq!(sanitize("https://café.fr"), "caf__fr");
    }

    #[test]
    fn test_length_is_preserved_after_prefix() {
        let url = "https://a.b/c?d=e&f#g";
        assert_eq!(sanitize(url).chars().count(), url.chars().count() - STRIPPED_PREFIX.len());
    }

    #[test]
    fn test_collisions() {
        assert_eq!(sanitize("https://example.com/a?b"), sanitize("example.com/a/b"));
    }

    #[test]
    fn test_deterministic() {
        let url = "https://example.com/x y";
        assert_eq!(sanitize(url), sanitize(url));
    }
}

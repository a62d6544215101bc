// src/page/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Validate URLs
// - Resolve relative hrefs against the document base
//
// Unlike a link checker, we keep every link that is a well-formed absolute
// URL, whatever its host. Filtering is the crawler's business.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   page_url: the URL the HTML was downloaded from
//
// The document base is the first <base href> element if it resolves to a
// URL, otherwise page_url itself.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Both selectors are constants, so parsing them cannot fail in practice
    let (Ok(anchors), Ok(base_tag)) = (Selector::parse("a[href]"), Selector::parse("base[href]"))
    else {
        return links;
    };

    let document = Html::parse_document(html);
    let page_base = Url::parse(page_url).ok();

    let declared_base = document
        .select(&base_tag)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| resolve_base(page_base.as_ref(), href));
    let base = declared_base.or(page_base);

    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // An empty href has nothing to resolve
        if href.trim().is_empty() {
            continue;
        }

        if let Some(absolute) = absolute_link(base.as_ref(), href) {
            if !absolute.is_empty() && is_valid_link(&absolute) {
                links.push(absolute);
            }
        }
    }

    links
}

/// Checks that a string is a well-formed absolute URL with a hierarchical
/// (`scheme://...`) form.
///
/// `mailto:`, `javascript:`, `data:` and similar links are rejected, as is
/// anything without a scheme.
pub fn is_valid_link(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => !parsed.cannot_be_a_base(),
        Err(_) => false,
    }
}

// Turns an href into the link text the crawler sees
//
// An href that is already a valid absolute URL comes back as written, so
// "http://example.com" stays without a trailing slash and spaces stay
// unescaped. Only relative hrefs go through the base, and without a base
// they are dropped.
fn absolute_link(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if is_valid_link(href) {
        return Some(href.to_string());
    }
    base?.join(href).ok().map(String::from)
}

// Resolves the <base href> value itself
fn resolve_base(page_base: Option<&Url>, href: &str) -> Option<Url> {
    let href = href.trim();
    match page_base {
        Some(page_base) => page_base.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_links_in_order() {
        let html = r#"<html><body><a href="http://example.com/page1">Link 1</a><a href="http://example.com/page2">Link 2</a></body></html>"#;
        let links = extract_links(html, "http://example.com");
        assert_eq!(
            links,
            vec!["http://example.com/page1", "http://example.com/page2"]
        );
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a><a href="../about">About</a>"#;
        let links = extract_links(html, "https://example.com/page/sub/");
        assert_eq!(
            links,
            vec!["https://example.com/docs", "https://example.com/page/about"]
        );
    }

    #[test]
    fn test_base_element_overrides_page_url() {
        let html = r#"<head><base href="https://cdn.example.org/root/"></head>
                      <body><a href="file.html">File</a></body>"#;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://cdn.example.org/root/file.html"]);
    }

    #[test]
    fn test_relative_links_dropped_without_base() {
        let html = r#"<a href="/docs">Docs</a><a href="https://other.com/">Other</a>"#;
        let links = extract_links(html, "not a url");
        assert_eq!(links, vec!["https://other.com/"]);
    }

    #[test]
    fn test_skip_empty_and_non_hierarchical_links() {
        let html = r#"
            <a href="">Empty</a>
            <a href="   ">Blank</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">Script</a>
            <a>No href</a>
            <a href="https://www.rust-lang.org">Rust</a>
        "#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_absolute_links_come_back_as_written() {
        let html = r#"
            <a href="http://example.com">Home</a>
            <a href="http://example.com/a b">Spaced</a>
            <a href=" https://example.com/x?y=1 ">Padded</a>
        "#;
        let links = extract_links(html, "http://example.com");
        assert_eq!(
            links,
            vec![
                "http://example.com",
                "http://example.com/a b",
                "https://example.com/x?y=1"
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_empty_document_has_no_links() {
        assert!(extract_links("", "https://example.com").is_empty());
    }

    #[test]
    fn test_is_valid_link() {
        assert!(is_valid_link("https://www.example.com"));
        assert!(is_valid_link("http://example.com"));
        assert!(!is_valid_link("not a valid url"));
        assert!(!is_valid_link(""));
        assert!(!is_valid_link("mailto:test@example.com"));
    }
}

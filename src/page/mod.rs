// src/page/mod.rs
// =============================================================================
// Everything the crawler does with a single page, apart from deciding where
// to go next.
//
// Submodules:
// - http: Downloads a page body (the Fetcher trait and its reqwest version)
// - links: Pulls absolute URLs out of an HTML document
// - store: Writes a page body to <depth>/<name>.html on disk
//
// None of these keep any state between calls; the crawl module owns all of
// the bookkeeping.
// =============================================================================

mod http;
mod links;
mod store;

pub use http::{FetchError, Fetcher, HttpFetcher};
pub use links::{extract_links, is_valid_link};
pub use store::PageStore;

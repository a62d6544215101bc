// src/crawl/mod.rs
// =============================================================================
// This module handles the depth-by-depth crawl.
//
// Features:
// - Breadth-first: every page of depth N is done before depth N+1 starts
// - Per-page link cap taken in document order
// - Optional uniqueness filter on sanitized URL names
// - One output directory per depth, one file per page
//
// Submodules:
// - crawler: The level loop and the per-page link step
// - sanitize: URL -> file name / dedup key
// - visited: The set of names seen so far
// - report: Per-level counters returned by a crawl
// =============================================================================

mod crawler;
mod report;
mod sanitize;
mod visited;

// Re-export the pieces main.rs needs
pub use crawler::Crawler;
pub use report::CrawlReport;

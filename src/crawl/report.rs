// src/crawl/report.rs
// =============================================================================
// Counters collected while crawling, one entry per depth level.
//
// The report is what `--json` prints; in the normal mode main.rs turns it
// into a short summary.
// =============================================================================

use serde::Serialize;

/// What happened at one depth level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub depth: usize,
    /// Frontier entries processed at this level.
    pub pages: usize,
    pub saved: usize,
    pub fetch_failures: usize,
    pub save_failures: usize,
    /// Links accepted into the next level's frontier.
    pub links_queued: usize,
}

impl LevelReport {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Summary of a whole crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    pub start_url: String,
    pub levels: Vec<LevelReport>,
    /// Size of the visited set when the crawl ended.
    pub visited: usize,
}

impl CrawlReport {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            ..Self::default()
        }
    }

    pub fn pages(&self) -> usize {
        self.levels.iter().map(|level| level.pages).sum()
    }

    pub fn saved(&self) -> usize {
        self.levels.iter().map(|level| level.saved).sum()
    }

    pub fn fetch_failures(&self) -> usize {
        self.levels.iter().map(|level| level.fetch_failures).sum()
    }

    pub fn save_failures(&self) -> usize {
        self.levels.iter().map(|level| level.save_failures).sum()
    }

    /// Deepest level that was processed, if any.
    pub fn deepest(&self) -> Option<usize> {
        self.levels.last().map(|level| level.depth)
    }
}

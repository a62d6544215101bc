// src/crawl/crawler.rs
// =============================================================================
// This module implements the crawl itself, one depth level at a time.
//
// How it works:
// 1. Start with the seed URL as the only entry of the level-0 frontier
// 2. Download every frontier URL and save it as <depth>/<name>.html
// 3. If there is a deeper level left, take up to max_links new links from
//    each page and queue them for the next level
// 4. Replace the frontier with the new one and repeat until the depth limit
//    is passed or nothing new was found
//
// Failures (download or disk) are printed and the crawl moves on; they
// never end the run.
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher (real HTTP or a test stub)
// - Streams: buffered() keeps a few downloads in flight but hands back the
//   results in frontier order
// - &mut borrows: the visited set is lent to each page's link step
// =============================================================================

use std::pin::pin;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::config::CrawlConfig;
use crate::crawl::report::{CrawlReport, LevelReport};
use crate::crawl::sanitize::sanitize;
use crate::crawl::visited::VisitedSet;
use crate::page::{extract_links, Fetcher, PageStore};

pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    store: PageStore,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let store = PageStore::new(config.output_dir.clone());
        Self {
            config,
            fetcher,
            store,
        }
    }

    // Runs the whole crawl
    //
    // Returns: a CrawlReport with per-level counters. All the real output is
    // already on disk (and on stdout) by the time this returns.
    pub async fn run(&self) -> CrawlReport {
        info!(
            start_url = %self.config.start_url,
            max_links = self.config.max_links,
            max_depth = self.config.max_depth,
            unique = self.config.unique,
            output_dir = %self.store.root().display(),
            "crawl starting"
        );

        let mut report = CrawlReport::new(&self.config.start_url);
        let mut visited = VisitedSet::with_seed(sanitize(&self.config.start_url));
        let mut frontier = vec![self.config.start_url.clone()];
        let mut depth = 0;

        while depth <= self.config.max_depth && !frontier.is_empty() {
            debug!(depth, pages = frontier.len(), "crawling level");
            let (next, level) = self.crawl_level(depth, &frontier, &mut visited).await;
            report.levels.push(level);
            frontier = next;
            depth += 1;
        }

        report.visited = visited.len();
        info!(
            pages = report.pages(),
            levels = report.levels.len(),
            visited = report.visited,
            "crawl finished"
        );
        report
    }

    // Downloads, saves and (maybe) expands every page of one level
    //
    // Returns the next level's frontier along with this level's counters.
    async fn crawl_level(
        &self,
        depth: usize,
        frontier: &[String],
        visited: &mut VisitedSet,
    ) -> (Vec<String>, LevelReport) {
        let mut next = Vec::new();
        let mut level = LevelReport::new(depth);
        let expand = depth < self.config.max_depth;

        // buffered (not buffer_unordered): pages come back in frontier order,
        // so saving and link bookkeeping happen in the same order as a
        // one-at-a-time crawl would do them
        let mut pages = pin!(stream::iter(frontier)
            .map(|url| async move { (url, self.fetcher.fetch(url).await) })
            .buffered(self.config.concurrency.max(1)));

        while let Some((url, fetched)) = pages.next().await {
            level.pages += 1;

            let html = match fetched {
                Ok(html) => html,
                Err(e) => {
                    println!("Failed to download {}: {}", url, e);
                    warn!(url = %url, error = %e, "download failed");
                    level.fetch_failures += 1;
                    String::new()
                }
            };

            let key = sanitize(url);
            let file_name = PageStore::file_name(depth, &key);
            match self.store.persist(&html, depth, &key).await {
                Ok(path) => {
                    println!("Saved {}", file_name);
                    debug!(path = %path.display(), bytes = html.len(), "page saved");
                    level.saved += 1;
                }
                Err(e) => {
                    println!("Failed to save {}: {}", file_name, e);
                    warn!(file = %file_name, error = %e, "save failed");
                    level.save_failures += 1;
                }
            }

            if expand {
                let links = extract_links(&html, url);
                let queued = queue_links(
                    links,
                    self.config.max_links,
                    self.config.unique,
                    visited,
                    &mut next,
                );
                debug!(url = %url, queued, "links queued");
                level.links_queued += queued;
            }
        }

        (next, level)
    }
}

// Moves up to `max_links` of one page's links into the next frontier
//
// Rules, in order, for each link:
// - with `unique` set, a link whose name is already visited is skipped
//   without using up any of the page's quota
// - otherwise its name is recorded as visited
// - then, if the quota is already used up, the page is done: the remaining
//   links are not looked at
//
// Returns the number of links queued.
pub(crate) fn queue_links(
    links: Vec<String>,
    max_links: usize,
    unique: bool,
    visited: &mut VisitedSet,
    next: &mut Vec<String>,
) -> usize {
    let mut queued = 0;

    for link in links {
        let key = sanitize(&link);
        if unique && visited.contains(&key) {
            continue;
        }

        visited.insert(key);

        if queued >= max_links {
            break;
        }
        next.push(link);
        queued += 1;
    }

    queued
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec for the frontier instead of a VecDeque?
//    - Each level is processed front to back and then thrown away whole
//    - New links go into a separate Vec for the next level
//    - So we never pop from the front while pushing to the back
//
// 2. Why is the visited set passed as &mut instead of stored in self?
//    - run() owns it for exactly one crawl
//    - crawl_level() only borrows it, so `self` can stay immutable
//    - That also lets the download stream borrow `self` at the same time
//
// 3. What does pin! do?
//    - StreamExt::next() needs a pinned stream
//    - std::pin::pin! pins it on the stack, no Box needed
//
// 4. Why still record visited names when uniqueness is off?
//    - The set is only consulted when uniqueness is on
//    - Keeping it up to date either way makes the report's `visited` count
//      mean the same thing in both modes
// -----------------------------------------------------------------------------

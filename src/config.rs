// src/config.rs
// =============================================================================
// Turns the raw command-line strings into a validated CrawlConfig.
//
// Validation runs in a fixed order: URL syntax, then the two integers, then
// the boolean, then the range checks. The first failure wins, and the crawl
// never starts when any of them fails.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::Cli;
use crate::page::is_valid_link;

/// Startup validation failures. The Display text is what the user sees after
/// "Error: ".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Arguments 2 and 3 must be integers")]
    NotAnInteger,
    #[error("Argument 4 must be a boolean")]
    NotABoolean,
    #[error("Number of maxUrls must be a positive number")]
    NonPositiveMaxUrls,
    #[error("Number of depth must be 0 or bigger")]
    NegativeDepth,
    #[error("Concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Everything the crawler needs to know, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL, exactly as given on the command line.
    pub start_url: String,
    /// Per-page link cap.
    pub max_links: usize,
    /// Last depth level that gets downloaded.
    pub max_depth: usize,
    /// Whether already-visited sanitized names are filtered out.
    pub unique: bool,
    /// Root directory for the `<depth>/` folders.
    pub output_dir: PathBuf,
    /// Fetches in flight within one level.
    pub concurrency: usize,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CrawlConfig {
    /// A config with the default run options (current directory, one fetch
    /// at a time, 10 second timeout).
    pub fn new(start_url: impl Into<String>, max_links: usize, max_depth: usize, unique: bool) -> Self {
        Self {
            start_url: start_url.into(),
            max_links,
            max_depth,
            unique,
            output_dir: PathBuf::from("."),
            concurrency: 1,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validates the parsed command line.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if !is_valid_link(&cli.start_url) {
            return Err(ConfigError::InvalidUrl);
        }

        let max_urls = parse_integer(&cli.max_urls)?;
        let depth = parse_integer(&cli.depth)?;
        let unique = parse_boolean(&cli.uniqueness)?;

        if max_urls <= 0 {
            return Err(ConfigError::NonPositiveMaxUrls);
        }
        if depth < 0 {
            return Err(ConfigError::NegativeDepth);
        }
        if cli.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if cli.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        // Both values are known to be non-negative here.
        let max_links = usize::try_from(max_urls).map_err(|_| ConfigError::NotAnInteger)?;
        let max_depth = usize::try_from(depth).map_err(|_| ConfigError::NotAnInteger)?;

        Ok(Self {
            start_url: cli.start_url.clone(),
            max_links,
            max_depth,
            unique,
            output_dir: cli.output_dir.clone(),
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout),
        })
    }
}

// Plain 32-bit decimal with an optional sign; surrounding whitespace and
// out-of-range values are rejected.
fn parse_integer(raw: &str) -> Result<i32, ConfigError> {
    raw.parse::<i32>().map_err(|_| ConfigError::NotAnInteger)
}

// Only the literals true/false are accepted, in any letter case.
fn parse_boolean(raw: &str) -> Result<bool, ConfigError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::NotABoolean)
    }
}

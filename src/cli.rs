// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The four crawl parameters are positional and are kept as raw strings here.
// Turning them into numbers and booleans happens in config.rs, so that a bad
// value produces one of our own error messages (and exit code 1) instead of
// clap's generic usage error.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Usage line printed when the wrong number of positionals is given.
pub const USAGE_HINT: &str =
    "You must enter 4 arguments: <start_url> <max_urls> <depth> <uniqueness>";

// This struct represents our entire CLI application
//
// allow_negative_numbers lets "-1" reach our validation as a depth value
// instead of being rejected as an unknown flag.
#[derive(Parser, Debug)]
#[command(
    name = "depth-mirror",
    version,
    about = "Mirror a website breadth-first, one directory per crawl depth",
    long_about = "depth-mirror downloads a start page, follows its links breadth-first up to a \
                  maximum depth and saves every page as <depth>/<sanitized-url>.html.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// URL of the first page to download (e.g., https://example.com)
    pub start_url: String,

    /// Maximum number of links taken from each page (positive integer)
    pub max_urls: String,

    /// Maximum crawl depth; 0 downloads only the start page
    pub depth: String,

    /// Skip links whose sanitized name was already visited (true/false)
    pub uniqueness: String,

    /// Directory the depth folders are created in
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of pages of the same depth downloaded at once
    #[arg(short, long, default_value_t = 1)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Print a JSON crawl report instead of the summary
    #[arg(long)]
    pub json: bool,

    /// More diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positionals_are_kept_raw() {
        let cli = Cli::try_parse_from(["depth-mirror", "http://example.com", "2", "1", "true"])
            .unwrap();
        assert_eq!(cli.start_url, "http://example.com");
        assert_eq!(cli.max_urls, "2");
        assert_eq!(cli.depth, "1");
        assert_eq!(cli.uniqueness, "true");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.concurrency, 1);
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn test_negative_depth_reaches_validation() {
        let cli = Cli::try_parse_from(["depth-mirror", "http://example.com", "2", "-1", "true"])
            .unwrap();
        assert_eq!(cli.depth, "-1");
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        let result = Cli::try_parse_from(["depth-mirror", "http://example.com", "2", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "depth-mirror",
            "http://example.com",
            "3",
            "2",
            "false",
            "--output-dir",
            "mirror",
            "-c",
            "4",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("mirror"));
        assert_eq!(cli.concurrency, 4);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}

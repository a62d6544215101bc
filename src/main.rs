// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them into a CrawlConfig (bad input = exit code 1, no crawl)
// 3. Set up diagnostic logging on stderr
// 4. Run the crawl and print a summary (or a JSON report)
// 5. Exit with code 0 once the crawl has started, whatever the page failures
//
// Rust concepts used:
// - async/await: The HTTP client and file writes are async
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on clap's error kinds
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;    // src/cli.rs - command-line parsing
mod config; // src/config.rs - argument validation
mod crawl;  // src/crawl/ - the level-by-level crawl
mod page;   // src/page/ - fetch, link extraction, saving

use clap::error::ErrorKind;
use clap::Parser; // Parser trait enables the try_parse() method

use cli::{Cli, USAGE_HINT};
use config::CrawlConfig;
use crawl::{CrawlReport, Crawler};
use page::HttpFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = the crawl ran (individual page failures don't matter)
//   Ok(1) = the arguments were rejected, nothing was crawled
//   Err   = unexpected error before the crawl could start
async fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => {
                    eprintln!("{}", USAGE_HINT);
                    1
                }
            });
        }
    };

    init_tracing(cli.verbose, cli.quiet);
    debug!(?cli, "CLI arguments parsed");

    let config = match CrawlConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let fetcher = HttpFetcher::new(config.timeout)?;
    let report = Crawler::new(config, fetcher).run().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(0)
}

// Diagnostics go to stderr so stdout only carries the crawl's own messages
//
// Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Prints a short human-readable summary after the per-page lines
fn print_summary(report: &CrawlReport) {
    println!();
    println!("📊 Summary:");
    println!(
        "   📄 Pages: {} (deepest level: {})",
        report.pages(),
        report.deepest().unwrap_or(0)
    );
    println!("   ✅ Saved: {}", report.saved());
    println!("   ❌ Download failures: {}", report.fetch_failures());
    println!("   💾 Save failures: {}", report.save_failures());
    println!("   🔗 Unique names seen: {}", report.visited);
}

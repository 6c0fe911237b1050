// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (env_logger, -v / RUST_LOG)
// 3. Work out which domains to scan (-d or -D)
// 4. Scan them one after another
// 5. Exit with proper code (0 = done, 1 = bad input, 2 = internal error)
//
// A domain whose scan fails (missing wordlist, empty wordlist...) does NOT
// stop the run. Only bad flags and an unreadable domain list do.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod error;   // src/error.rs - our error type
mod input;   // src/input/ - wordlist and domain-list files
mod probe;   // src/probe/ - requesting and classifying one URL
mod report;  // src/report.rs - everything printed to stdout
mod scan;    // src/scan/ - scanning a whole domain

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, DomainSource};
use colored::Colorize;
use scan::{ScanOptions, ScanReport, Tally};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG, if set, wins over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Something we did not expect, e.g. the HTTP client could not be built
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The multi-domain driver
// Returns:
//   Ok(0) = every domain was handled (some may have been skipped)
//   Ok(1) = no usable domain source, or the domain list could not be read
//   Err   = unexpected error
async fn run(cli: Cli) -> Result<i32> {
    let source = match cli.domain_source() {
        Ok(source) => source,
        Err(e) => {
            report::print_problem(&format!("Error: {}", e));
            return Ok(1);
        }
    };

    let domains = match source {
        DomainSource::Single(domain) => vec![domain],
        DomainSource::List(path) => match input::load_domains(&path) {
            Ok(domains) => domains,
            Err(e) => {
                log::error!("Cannot read domain list {}: {}", path.display(), e);
                report::print_problem(&format!("Error: {}", e));
                return Ok(1);
            }
        },
    };

    let options = cli.scan_options();
    let reports = scan_domains(&domains, &cli.list, &options, cli.json).await?;

    // Each scan reports its own numbers; add them up for the run-wide table
    if reports.len() > 1 {
        let mut total = Tally::default();
        for scan_report in &reports {
            total.merge(&scan_report.tally);
        }
        report::print_aggregate(&total, reports.len());
    }

    Ok(0)
}

// Scans the domains one after another
//
// Returns the reports of the domains that were actually scanned; skipped
// domains (bad or empty wordlist) have already printed why.
async fn scan_domains(
    domains: &[String],
    wordlist: &Path,
    options: &ScanOptions,
    json: bool,
) -> Result<Vec<ScanReport>> {
    let mut reports = Vec::new();

    for domain in domains {
        let scan_report = scan::scan(domain, wordlist, options)
            .await
            .with_context(|| format!("scan of {} failed", domain))?;

        if let Some(scan_report) = scan_report {
            if json {
                report::print_json(&scan_report)?;
            }
            reports.push(scan_report);
        }
    }

    Ok(reports)
}

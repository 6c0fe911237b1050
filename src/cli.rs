// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the struct below IS the list of flags.
//
//   dirsweep -d example.com -l words.txt
//   dirsweep -D domains.txt -l words.txt -t 50
//
// clap only checks each flag on its own. Whether the user gave us a usable
// domain source (-d OR -D, exactly one) is checked by domain_source() so that
// we control the message and the exit code.
// =============================================================================

use crate::error::ScanError;
use crate::scan::ScanOptions;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "dirsweep",
    version = "0.1.0",
    about = "Check directories for given domain(s)",
    long_about = "dirsweep requests every path from a wordlist on one or more domains and \
                  sorts the answers into 200 OK, 3xx redirects, 4xx errors and everything else."
)]
pub struct Cli {
    /// The domain to check (e.g., http://example.com)
    ///
    /// Domains without a scheme get https://
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Path to a file containing a list of domains, one per line
    #[arg(short = 'D', long = "domains-list")]
    pub domains_list: Option<PathBuf>,

    /// Path to the file containing the list of directories
    #[arg(short = 'l', long = "list")]
    pub list: PathBuf,

    /// Number of concurrent requests
    #[arg(short = 't', long, default_value_t = 10)]
    pub threads: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Follow redirects instead of reporting 3xx responses
    #[arg(long)]
    pub follow_redirects: bool,

    /// Also print each domain's results as JSON
    #[arg(long)]
    pub json: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// Where the domains to scan come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// -d example.com
    Single(String),
    /// -D domains.txt
    List(PathBuf),
}

impl Cli {
    /// Exactly one of -d / -D must be present
    pub fn domain_source(&self) -> Result<DomainSource, ScanError> {
        match (&self.domain, &self.domains_list) {
            (Some(domain), None) => Ok(DomainSource::Single(domain.clone())),
            (None, Some(path)) => Ok(DomainSource::List(path.clone())),
            (None, None) => Err(ScanError::Validation(
                "You must provide either a single domain with -d or a domains list with -D."
                    .to_string(),
            )),
            (Some(_), Some(_)) => Err(ScanError::Validation(
                "Use either -d or -D, not both.".to_string(),
            )),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        if self.threads == 0 {
            log::warn!("--threads 0 would never make progress, using 1");
        }

        ScanOptions {
            max_concurrency: self.threads,
            timeout: Duration::from_secs(self.timeout),
            follow_redirects: self.follow_redirects,
        }
    }

    /// Log level for env_logger, from the number of -v flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Option<String> vs String for a flag?
//    - Option: the flag may be left out (-d, -D)
//    - Plain type: clap makes it required (-l), unless it has a default (-t)
//
// 2. What is ArgAction::Count?
//    - Counts how often a flag was given: -vvv gives verbose = 3
// -----------------------------------------------------------------------------

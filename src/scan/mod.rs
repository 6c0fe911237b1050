// src/scan/mod.rs
// =============================================================================
// This module drives directory scans.
//
// Submodules:
// - orchestrator: scans one domain (load wordlist, fan out, collect, print)
// - tally: the per-scan counts and the list of 200 URLs
//
// ScanOptions lives here because both the CLI and the orchestrator need it.
// =============================================================================

mod orchestrator;
mod tally;

pub use orchestrator::scan;
pub use tally::{ScanReport, SuccessRecord, Tally};

use std::time::Duration;

/// Settings that apply to every domain scanned in a run
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of requests in flight at once
    pub max_concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Follow 3xx responses instead of reporting them
    pub follow_redirects: bool,
}

impl ScanOptions {
    /// The pool size actually used. A pool of 0 would never make progress.
    pub fn pool_size(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_concurrency: 10,
            timeout: Duration::from_secs(5),
            follow_redirects: false,
        }
    }
}

// src/input/wordlist.rs
// =============================================================================
// Loads the list of path segments to try on each domain.
//
// File format: one segment per line.
//   "admin"        -> "admin"
//   "  /admin/ "   -> "admin/"     (whitespace and LEADING slashes dropped)
//   "   "          -> skipped
//
// An empty result is not an error here. The orchestrator reports it as
// "nothing to test" and moves on to the next domain.
// =============================================================================

use super::read_file;
use crate::error::ScanError;
use std::path::Path;

/// Reads the wordlist at `path` and returns the cleaned segments in file order.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, ScanError> {
    let contents = read_file(path)?;
    Ok(parse_wordlist(&contents))
}

fn parse_wordlist(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().trim_start_matches('/'))
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

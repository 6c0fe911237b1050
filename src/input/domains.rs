// src/input/domains.rs
// =============================================================================
// Loads the domain-list file given with -D.
//
// One domain per line, surrounding whitespace ignored, blank lines skipped.
// Lines are NOT normalized here; each domain is normalized when its scan
// starts (see probe/target.rs).
// =============================================================================

use super::read_file;
use crate::error::ScanError;
use std::path::Path;

pub fn load_domains(path: &Path) -> Result<Vec<String>, ScanError> {
    let contents = read_file(path)?;

    let domains: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::info!("Loaded {} domain(s) from {}", domains.len(), path.display());

    Ok(domains)
}

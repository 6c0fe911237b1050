// src/input/mod.rs
// =============================================================================
// This module reads the two line-based input files.
//
// Submodules:
// - wordlist: path segments to try (-l)
// - domains: domains to scan (-D)
// =============================================================================

mod domains;
mod wordlist;

pub use domains::load_domains;
pub use wordlist::load_wordlist;

use crate::error::ScanError;
use std::path::Path;

// Reads a whole file, telling "missing" apart from "unreadable"
fn read_file(path: &Path) -> Result<String, ScanError> {
    if !path.is_file() {
        return Err(ScanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))
}

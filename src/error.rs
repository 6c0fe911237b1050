// src/error.rs
// =============================================================================
// Typed errors for the parts of the program that can fail in ways the caller
// wants to tell apart.
//
// Where they are handled:
// - FileNotFound / Io from the wordlist: abort only that domain's scan
// - FileNotFound / Io from the domain list: fatal, exit code 1
// - Validation: bad combination of CLI flags, exit code 1
// - Client: the HTTP client could not be built, exit code 2
//
// Per-request network failures are NOT errors here. They are recorded as data
// inside a FetchResult (see probe/http.rs) and never stop a scan.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The path does not point to an existing regular file
    #[error("The file '{}' was not found.", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be opened or read
    #[error("Error reading the file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid combination of command-line arguments
    #[error("{0}")]
    Validation(String),

    /// reqwest refused to build a client with our settings
    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

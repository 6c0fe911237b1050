// src/probe/mod.rs
// =============================================================================
// This module knows how to probe a single path on a web server.
//
// Submodules:
// - target: Normalizes domains and builds the URLs to request
// - http: Sends the GET request and classifies the response
//
// The scan module (src/scan/) decides WHAT to probe and how many at once;
// this module only knows how to probe ONE thing.
// =============================================================================

mod http;
mod target;

#[cfg(test)]
pub(crate) mod test_server;

pub use http::{build_client, fetch, FetchResult, Outcome};
pub use target::{normalize_domain, target_url};

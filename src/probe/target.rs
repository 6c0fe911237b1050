// src/probe/target.rs
// =============================================================================
// Turns what the user typed into URLs we can request.
//
//   "example.com"          -> "https://example.com"
//   "http://example.com//" -> "http://example.com"
//
// Normalization never fails. A domain that is still not a valid URL after
// normalization is logged and scanned anyway; every request for it will simply
// come back as a transport error.
// =============================================================================

use url::Url;

/// Makes sure the domain has a scheme and no trailing slash.
///
/// Domains without `http://` or `https://` get `https://`.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let normalized = with_scheme.trim_end_matches('/').to_string();

    if let Err(e) = Url::parse(&normalized) {
        log::warn!("'{}' does not look like a valid URL ({}), scanning anyway", normalized, e);
    }

    normalized
}

/// Joins a normalized domain and one wordlist segment.
pub fn target_url(domain: &str, segment: &str) -> String {
    format!("{}/{}", domain, segment)
}

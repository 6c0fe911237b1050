// src/probe/http.rs
// =============================================================================
// The fetch worker: one GET request in, one FetchResult out.
//
// Key functionality:
// - Builds the shared reqwest Client used for a whole domain scan
// - Makes a GET request and downloads the body to measure its size
// - Sorts the response into one of four outcome bands
// - Turns network failures (DNS, refused, timeout, TLS...) into data
//
// fetch() never returns an error. Whatever happens to the request, the caller
// gets exactly one FetchResult back, so the number of results always matches
// the number of URLs we sent out.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Enums: To represent the four outcome bands
// - Option<T>: status / size / error only exist in some cases
// =============================================================================

use crate::error::ScanError;
use reqwest::{redirect, Client};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// The four bands a response can fall into
//
// Order matters: this is the order rows appear in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Exactly 200
    Success,
    /// 300-399
    Redirect,
    /// 400-499
    ClientError,
    /// Everything else, including 5xx, non-200 2xx and transport errors
    Other,
}

impl Outcome {
    /// All outcomes in summary-table order
    pub const ALL: [Outcome; 4] = [
        Outcome::Success,
        Outcome::Redirect,
        Outcome::ClientError,
        Outcome::Other,
    ];

    /// Classifies an HTTP status code. Total over every u16.
    pub fn from_status(code: u16) -> Self {
        match code {
            200 => Outcome::Success,
            300..=399 => Outcome::Redirect,
            400..=499 => Outcome::ClientError,
            _ => Outcome::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "200 OK",
            Outcome::Redirect => "300 Redirect",
            Outcome::ClientError => "400 Error",
            Outcome::Other => "Other",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Everything we learned from requesting one URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// The full URL that was requested
    pub url: String,
    /// The wordlist entry the URL was built from
    pub segment: String,
    pub outcome: Outcome,
    /// HTTP status, None if no response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Body length in bytes, None if no response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Transport error message, only set when no response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    fn transport_error(segment: String, url: String, error: reqwest::Error) -> Self {
        FetchResult {
            url,
            segment,
            outcome: Outcome::Other,
            status: None,
            size: None,
            error: Some(error.to_string()),
        }
    }
}

// Builds the one client shared by every request of a domain scan
//
// reqwest::Client is an Arc internally, so clones are cheap and all of them
// share the same connection pool.
//
// Redirects are NOT followed unless asked to, otherwise we would never see a
// 3xx status and the "300 Redirect" band would always stay empty.
pub fn build_client(timeout: Duration, follow_redirects: bool) -> Result<Client, ScanError> {
    let policy = if follow_redirects {
        redirect::Policy::limited(10)
    } else {
        redirect::Policy::none()
    };

    let client = Client::builder()
        .timeout(timeout)
        .redirect(policy)
        .build()?;

    Ok(client)
}

// Requests a single URL and classifies the result
//
// Parameters:
//   client: the shared client (cloned per task, see build_client)
//   segment: the wordlist entry, kept for display
//   url: the full URL to request
pub async fn fetch(client: Client, segment: String, url: String) -> FetchResult {
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("GET {} failed: {}", url, e);
            return FetchResult::transport_error(segment, url, e);
        }
    };

    let status = response.status().as_u16();

    // The whole body has to arrive before we know its size
    match response.bytes().await {
        Ok(body) => {
            log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
            FetchResult {
                url,
                segment,
                outcome: Outcome::from_status(status),
                status: Some(status),
                size: Some(body.len()),
                error: None,
            }
        }
        Err(e) => {
            log::debug!("GET {} -> {} but body read failed: {}", url, status, e);
            FetchResult::transport_error(segment, url, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_server;

    #[test]
    fn test_classification_bands() {
        assert_eq!(Outcome::from_status(200), Outcome::Success);
        assert_eq!(Outcome::from_status(201), Outcome::Other);
        assert_eq!(Outcome::from_status(204), Outcome::Other);
        assert_eq!(Outcome::from_status(300), Outcome::Redirect);
        assert_eq!(Outcome::from_status(399), Outcome::Redirect);
        assert_eq!(Outcome::from_status(400), Outcome::ClientError);
        assert_eq!(Outcome::from_status(499), Outcome::ClientError);
        assert_eq!(Outcome::from_status(500), Outcome::Other);
        assert_eq!(Outcome::from_status(100), Outcome::Other);
    }

    #[test]
    fn test_labels_in_table_order() {
        let labels: Vec<_> = Outcome::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["200 OK", "300 Redirect", "400 Error", "Other"]);
    }

    #[tokio::test]
    async fn test_fetch_success_records_exact_size() {
        let base = test_server::spawn(vec![("/admin", 200, "hello world")]).await;
        let client = build_client(Duration::from_secs(5), false).unwrap();

        let result = fetch(client, "admin".to_string(), format!("{}/admin", base)).await;

        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.size, Some(11));
        assert!(result.error.is_none());
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_fetch_redirect_is_not_followed_by_default() {
        let base = test_server::spawn(vec![("/old", 301, "")]).await;
        let client = build_client(Duration::from_secs(5), false).unwrap();

        let result = fetch(client, "old".to_string(), format!("{}/old", base)).await;

        assert_eq!(result.outcome, Outcome::Redirect);
        assert_eq!(result.status, Some(301));
    }

    #[tokio::test]
    async fn test_fetch_follows_redirect_when_asked() {
        let base = test_server::spawn(vec![("/old", 301, ""), ("/moved", 200, "new home")]).await;
        let client = build_client(Duration::from_secs(5), true).unwrap();

        let result = fetch(client, "old".to_string(), format!("{}/old", base)).await;

        // The final answer is reported against the URL we asked for
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.size, Some(8));
        assert_eq!(result.url, format!("{}/old", base));
    }

    #[tokio::test]
    async fn test_fetch_client_and_server_errors() {
        let base = test_server::spawn(vec![("/boom", 500, "oops")]).await;
        let client = build_client(Duration::from_secs(5), false).unwrap();

        let missing = fetch(client.clone(), "nope".to_string(), format!("{}/nope", base)).await;
        assert_eq!(missing.outcome, Outcome::ClientError);
        assert_eq!(missing.status, Some(404));

        let boom = fetch(client, "boom".to_string(), format!("{}/boom", base)).await;
        assert_eq!(boom.outcome, Outcome::Other);
        assert_eq!(boom.status, Some(500));
        assert_eq!(boom.size, Some(4));
    }

    #[tokio::test]
    async fn test_transport_error_becomes_other() {
        let client = build_client(Duration::from_secs(5), false).unwrap();

        // Nothing listens on port 1
        let result = fetch(client, "x".to_string(), "http://127.0.0.1:1/x".to_string()).await;

        assert_eq!(result.outcome, Outcome::Other);
        assert!(result.status.is_none());
        assert!(result.size.is_none());
        assert!(result.error.is_some());
    }
}

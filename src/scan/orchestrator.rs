// src/scan/orchestrator.rs
// =============================================================================
// Runs a full directory scan against ONE domain.
//
// How it works:
// 1. Normalize the domain and print the header
// 2. Load the wordlist (missing / unreadable / empty => give up on this domain)
// 3. Build one HTTP client shared by every request of this scan
// 4. Turn every segment into a fetch future
// 5. Run them through buffer_unordered(n): at most n requests in flight, and
//    results come out in the order they FINISH, not the order we sent them
// 6. A single loop drains the results, updates the report and prints a line
//    for each one right away
// 7. Print the summary tables
//
// Only this one loop touches the ScanReport, so no Mutex is needed.
// =============================================================================

use super::{ScanOptions, ScanReport};
use crate::error::ScanError;
use crate::input::load_wordlist;
use crate::probe::{build_client, fetch, normalize_domain, target_url, FetchResult};
use crate::report;
use futures::stream::{self, StreamExt};
use std::path::Path;

// Scans one domain and prints everything as it goes
//
// Returns:
//   Ok(Some(report)) = the scan ran (even if every request failed)
//   Ok(None)         = the scan was skipped, a diagnostic was already printed
//   Err(_)           = something that should stop the whole run
pub async fn scan(
    domain: &str,
    wordlist_path: &Path,
    options: &ScanOptions,
) -> Result<Option<ScanReport>, ScanError> {
    let domain = normalize_domain(domain);
    report::print_header(&domain, wordlist_path, options);

    let segments = match load_wordlist(wordlist_path) {
        Ok(segments) => segments,
        Err(e) => {
            log::warn!("Skipping {}: {}", domain, e);
            report::print_problem(&format!("Error: {}", e));
            return Ok(None);
        }
    };

    if segments.is_empty() {
        report::print_problem("No directories found in the file.");
        return Ok(None);
    }

    report::print_testing(segments.len());

    let scan_report = sweep(&domain, segments, options, report::print_result).await?;

    report::print_finished();
    report::print_summary(&scan_report);

    Ok(Some(scan_report))
}

// The printing-free core of a scan
//
// Parameters:
//   domain: an already normalized domain
//   segments: the wordlist entries to try
//   options: pool size and client settings
//   on_result: called once per finished request with the running count
//
// Every segment produces exactly one call to on_result.
pub async fn sweep<F>(
    domain: &str,
    segments: Vec<String>,
    options: &ScanOptions,
    mut on_result: F,
) -> Result<ScanReport, ScanError>
where
    F: FnMut(usize, &FetchResult),
{
    let client = build_client(options.timeout, options.follow_redirects)?;
    let pool_size = options.pool_size();

    log::info!(
        "Scanning {} with {} segment(s), {} at a time",
        domain,
        segments.len(),
        pool_size
    );

    let requests = segments.into_iter().map(|segment| {
        let url = target_url(domain, &segment);
        fetch(client.clone(), segment, url)
    });

    let mut results = stream::iter(requests).buffer_unordered(pool_size);

    let mut scan_report = ScanReport::new(domain);
    let mut received = 0;

    while let Some(result) = results.next().await {
        received += 1;
        scan_report.record(&result);
        on_result(received, &result);
    }

    // Release the connection pool before the summary is printed
    drop(results);
    drop(client);

    log::info!("Finished {} after {} result(s)", domain, received);

    Ok(scan_report)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does buffer_unordered(n) do?
//    - It polls up to n futures from the stream at the same time
//    - As soon as ANY of them finishes, its output is handed to us
//    - So a slow request never holds back the ones behind it
//
// 2. Why is `on_result` generic (F: FnMut)?
//    - scan() passes report::print_result, tests pass a closure that
//      collects results into a Vec
//    - FnMut (not Fn) because the closure is allowed to mutate what it captures
//
// 3. Why drop() by hand?
//    - `results` borrows `client` through the map closure
//    - Dropping `results` first ends that borrow, then the client can go
// -----------------------------------------------------------------------------

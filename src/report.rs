// src/report.rs
// =============================================================================
// Everything the user sees on stdout.
//
// - A header when a domain scan starts
// - One colored line per finished request, printed the moment it finishes
// - A status summary table and a table of 200 URLs when the scan is done
// - Optionally the whole ScanReport as JSON (--json)
//
// Colors:
//   green  = 200 OK
//   yellow = 3xx redirect
//   red    = 4xx, anything else, and network errors
// =============================================================================

use crate::probe::{FetchResult, Outcome};
use crate::scan::{ScanOptions, ScanReport, SuccessRecord, Tally};
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::path::Path;
use tabled::{Table, Tabled};

// One row of the status summary table
#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

// One row of the 200 URLs table
#[derive(Tabled)]
struct SuccessRow<'a> {
    #[tabled(rename = "URL")]
    url: &'a str,
    #[tabled(rename = "Size (bytes)")]
    size: usize,
}

pub fn print_header(domain: &str, wordlist: &Path, options: &ScanOptions) {
    println!(
        "\n{} {}",
        "Checking directories for domain:".cyan().bold(),
        domain.yellow()
    );
    println!(
        "{} {}",
        "Using file:".cyan().bold(),
        wordlist.display().to_string().yellow()
    );
    println!(
        "{} {}\n",
        "Number of threads:".cyan().bold(),
        options.max_concurrency.to_string().yellow()
    );
}

pub fn print_testing(count: usize) {
    println!("{}\n", format!("Testing {} directories.", count).green().bold());
}

/// Prints a red diagnostic line (missing wordlist, nothing to test...)
pub fn print_problem(message: &str) {
    println!("{}", message.red());
}

pub fn print_result(received: usize, result: &FetchResult) {
    println!("{}", format_result(received, result));
}

// Builds the per-result line
//
// Example (colors omitted):
//   [3] admin -> Status 301: https://example.com/admin - Size: 0 bytes
fn format_result(received: usize, result: &FetchResult) -> String {
    let prefix = format!("[{}] {} ->", received, result.segment);

    // A FetchResult has either a response (status + size) or an error
    let body = match (&result.error, result.status, result.size) {
        (None, Some(status), Some(size)) => {
            let tag = if status == 200 {
                "200 OK:".to_string()
            } else {
                format!("Status {}:", status)
            };
            format!(
                "{} {} - Size: {} bytes",
                paint(result.outcome, &tag),
                result.url.white(),
                size
            )
        }
        (error, _, _) => format!(
            "{} {}",
            format!("Request error for {}:", result.url).red(),
            error.as_deref().unwrap_or("no response")
        ),
    };

    format!("{} {}", prefix.dimmed(), body)
}

fn paint(outcome: Outcome, text: &str) -> ColoredString {
    match outcome {
        Outcome::Success => text.green(),
        Outcome::Redirect => text.yellow(),
        Outcome::ClientError | Outcome::Other => text.red(),
    }
}

pub fn print_finished() {
    println!("\n{}", "Finished checking directories.".cyan());
}

/// The four-row status table, always in the same order
pub fn status_table(tally: &Tally) -> String {
    let rows: Vec<StatusRow> = tally
        .rows()
        .map(|(outcome, count)| StatusRow {
            status: outcome.label(),
            count,
        })
        .collect();

    Table::new(rows).to_string()
}

/// The 200 URLs table, in completion order
pub fn success_table(successes: &[SuccessRecord]) -> String {
    let rows: Vec<SuccessRow> = successes
        .iter()
        .map(|record| SuccessRow {
            url: &record.url,
            size: record.size,
        })
        .collect();

    Table::new(rows).to_string()
}

pub fn print_summary(report: &ScanReport) {
    println!("{}", status_table(&report.tally));

    if !report.successes.is_empty() {
        println!("\n{}", "200 OK URLs with Content Size:".green().bold());
        println!("{}", success_table(&report.successes));
    }
}

/// Run-wide totals, printed after the last domain of a multi-domain run
pub fn print_aggregate(tally: &Tally, domains: usize) {
    println!(
        "\n{}",
        format!("All domains ({} scanned):", domains).cyan().bold()
    );
    println!("{}", status_table(tally));
}

pub fn print_json(report: &ScanReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    println!("{}", json_output);
    Ok(())
}

// src/scan/tally.rs
// =============================================================================
// Running counts for one domain scan.
//
// A ScanReport is created fresh at the start of every domain scan and only
// ever touched by the single loop that drains finished requests, so it needs
// no locking. The driver in main.rs can merge reports if it wants run-wide
// totals.
// =============================================================================

use crate::probe::{FetchResult, Outcome};
use serde::{Deserialize, Serialize};

/// Number of results seen per outcome band
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub success: usize,
    pub redirect: usize,
    pub client_error: usize,
    pub other: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        *self.slot(outcome) += 1;
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Redirect => self.redirect,
            Outcome::ClientError => self.client_error,
            Outcome::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.redirect + self.client_error + self.other
    }

    /// Adds another tally's counts into this one
    pub fn merge(&mut self, other: &Tally) {
        for outcome in Outcome::ALL {
            *self.slot(outcome) += other.count(outcome);
        }
    }

    /// (outcome, count) pairs in summary-table order
    pub fn rows(&self) -> impl Iterator<Item = (Outcome, usize)> + '_ {
        Outcome::ALL.into_iter().map(move |o| (o, self.count(o)))
    }

    fn slot(&mut self, outcome: Outcome) -> &mut usize {
        match outcome {
            Outcome::Success => &mut self.success,
            Outcome::Redirect => &mut self.redirect,
            Outcome::ClientError => &mut self.client_error,
            Outcome::Other => &mut self.other,
        }
    }
}

/// A URL that answered 200, with its body size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRecord {
    pub url: String,
    pub size: usize,
}

/// Everything one finished domain scan produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// The normalized domain
    pub domain: String,
    pub tally: Tally,
    /// 200 responses in the order they completed
    pub successes: Vec<SuccessRecord>,
}

impl ScanReport {
    pub fn new(domain: &str) -> Self {
        ScanReport {
            domain: domain.to_string(),
            tally: Tally::default(),
            successes: Vec::new(),
        }
    }

    pub fn record(&mut self, result: &FetchResult) {
        self.tally.record(result.outcome);

        if result.is_success() {
            self.successes.push(SuccessRecord {
                url: result.url.clone(),
                // A 200 always comes with a body length
                size: result.size.unwrap_or(0),
            });
        }
    }
}

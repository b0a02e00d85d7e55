//! Validation results and summary statistics.
//!
//! These types carry everything the report generator needs once the
//! single validation pass is over.

use crate::UnexpectedValue;
use indexmap::IndexMap;
use std::fmt;

/// Occurrence counts of unexpected values, in first-encountered order.
pub type ValueCounts = IndexMap<UnexpectedValue, usize>;

/// Pass/fail status of a suite or a single expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Succeeded,
    Failed,
}

impl Status {
    /// `Failed` when `failed` is true.
    pub fn from_failed(failed: bool) -> Self {
        if failed { Status::Failed } else { Status::Succeeded }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Succeeded => f.write_str("Succeeded"),
            Status::Failed => f.write_str("Failed"),
        }
    }
}

/// Frequency tables of unexpected values: field → code → value → count.
///
/// Fields and codes are ordered by first encounter during the pass. An
/// entry exists for every (field, code) pair that was evaluated at least
/// once, even when no unexpected value was ever recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResults {
    fields: IndexMap<String, IndexMap<String, ValueCounts>>,
}

impl ValidationResults {
    /// Creates empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counts for `(field, code)`, creating an empty entry on
    /// first use.
    pub fn touch(&mut self, field: &str, code: &str) -> &mut ValueCounts {
        self.fields
            .entry(field.to_string())
            .or_default()
            .entry(code.to_string())
            .or_default()
    }

    /// Counts one occurrence of `value` for `(field, code)`.
    pub fn record(&mut self, field: &str, code: &str, value: UnexpectedValue) {
        *self.touch(field, code).entry(value).or_insert(0) += 1;
    }

    /// Returns true if nothing was evaluated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields with their per-code tables.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &IndexMap<String, ValueCounts>)> {
        self.fields.iter().map(|(field, codes)| (field.as_str(), codes))
    }

    /// Counts for one `(field, code)` pair.
    pub fn get(&self, field: &str, code: &str) -> Option<&ValueCounts> {
        self.fields.get(field)?.get(code)
    }

    /// Total unexpected values recorded for `(field, code)`.
    pub fn unexpected_count(&self, field: &str, code: &str) -> usize {
        self.get(field, code).map(total).unwrap_or(0)
    }
}

/// Sum of all counts in a table.
pub fn total(counts: &ValueCounts) -> usize {
    counts.values().sum()
}

/// Values sorted by descending count.
///
/// The sort is stable, so equal counts keep first-encountered order.
pub fn ranked(counts: &ValueCounts) -> Vec<(&UnexpectedValue, usize)> {
    let mut ranked: Vec<_> = counts.iter().map(|(value, count)| (value, *count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Suite-level counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Number of data rows read
    pub total_rows: usize,

    /// Expectations never violated
    pub successful: usize,

    /// Expectations violated at least once
    pub unsuccessful: usize,
}

impl ValidationSummary {
    /// Number of expectations evaluated.
    pub fn evaluated(&self) -> usize {
        self.successful + self.unsuccessful
    }

    /// Overall suite status.
    pub fn status(&self) -> Status {
        Status::from_failed(self.unsuccessful > 0)
    }

    /// Share of successful expectations, in percent.
    ///
    /// `None` when there is nothing to divide by: no expectations, or no
    /// rows for them to be applied to.
    pub fn success_percent(&self) -> Option<f64> {
        if self.evaluated() == 0 || self.total_rows == 0 {
            return None;
        }
        Some(self.successful as f64 / self.evaluated() as f64 * 100.0)
    }

    /// `count` as a percentage of total rows; 0 when no rows were read.
    pub fn row_percent(&self, count: usize) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        count as f64 / self.total_rows as f64 * 100.0
    }
}

/// Everything produced by one validation run.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Name of the validated suite
    pub suite_name: String,

    /// Suite-level counters
    pub summary: ValidationSummary,

    /// Unexpected-value frequency tables
    pub results: ValidationResults,

    /// Expectation descriptions keyed by code
    pub descriptions: IndexMap<String, String>,
}

impl ValidationOutcome {
    /// Whether every expectation succeeded.
    pub fn passed(&self) -> bool {
        self.summary.status() == Status::Succeeded
    }
}

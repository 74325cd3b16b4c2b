//! Query profiling log.
//!
//! Every executed statement appends one record, in execution order. When
//! query logging is disabled the text field is left empty but the elapsed
//! time is still recorded, so timing aggregates stay accurate without
//! retaining query text.

use std::collections::HashSet;
use std::time::Duration;

/// One executed statement: its display text and how long the driver took.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    /// Reconstructed query text; empty when query logging is disabled.
    pub text: String,
    pub elapsed: Duration,
}

/// Ordered, append-only record of executed queries.
#[derive(Debug, Default)]
pub struct QueryLog {
    records: Vec<QueryRecord>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: String, elapsed: Duration) {
        self.records.push(QueryRecord { text, elapsed });
    }

    /// Number of statements executed so far.
    pub fn query_count(&self) -> usize {
        self.records.len()
    }

    /// Number of distinct statements by exact text match.
    pub fn unique_query_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.text.as_str()))
            .count()
    }

    /// Total elapsed time across all statements, in seconds.
    pub fn total_query_time(&self) -> f64 {
        self.records.iter().map(|r| r.elapsed.as_secs_f64()).sum()
    }

    /// The recorded statements, oldest first.
    pub fn records(&self) -> &[QueryRecord] {
        &self.records
    }

    /// Drop all recorded statements.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

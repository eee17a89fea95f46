//! Bounded history of user-facing shell errors.

use std::collections::VecDeque;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::errors::ShellError;

/// How many records the journal keeps before evicting the oldest.
pub const JOURNAL_CAPACITY: usize = 50;

/// How many records `report()` includes.
const REPORT_TAIL: usize = 10;

/// One recorded error.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub code: u32,
    pub error: String,
    pub context: String,
}

impl ErrorRecord {
    fn new(error: &ShellError, context: &str) -> Self {
        Self {
            id: crate::id::new_id(),
            timestamp: Utc::now(),
            code: error.code(),
            error: error.to_string(),
            context: context.to_string(),
        }
    }
}

/// A bounded queue of error records plus the error currently on screen.
#[derive(Debug)]
pub struct ErrorJournal {
    records: VecDeque<ErrorRecord>,
    current: Option<ShellError>,
    capacity: usize,
}

impl ErrorJournal {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            current: None,
            capacity,
        }
    }

    /// Records an error and makes it the current one.
    /// At capacity, the oldest record is dropped.
    pub fn record(&mut self, error: ShellError, context: &str) {
        tracing::warn!(code = error.code(), context, "{error}");
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(ErrorRecord::new(&error, context));
        self.current = Some(error);
    }

    pub fn current(&self) -> Option<&ShellError> {
        self.current.as_ref()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.current = None;
    }

    pub fn records(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plain-text report of the most recent records.
    pub fn report(&self) -> String {
        let skip = self.records.len().saturating_sub(REPORT_TAIL);
        let recent: Vec<&ErrorRecord> = self.records.iter().skip(skip).collect();

        let mut out = String::from("Emberloom Error Report\n");
        out.push_str("======================\n");
        let _ = writeln!(out, "Recent Errors ({}):\n", recent.len());

        for record in recent {
            let _ = writeln!(
                out,
                "[{}] ({}) {}",
                record.timestamp.to_rfc3339(),
                record.code,
                record.error
            );
            if !record.context.is_empty() {
                let _ = writeln!(out, "Context: {}", record.context);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for ErrorJournal {
    fn default() -> Self {
        Self::new(JOURNAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sets_current() {
        let mut journal = ErrorJournal::default();
        journal.record(ShellError::NetworkUnavailable, "connectivity");
        assert_eq!(journal.current(), Some(&ShellError::NetworkUnavailable));
        assert_eq!(journal.len(), 1);

        journal.clear_current();
        assert!(journal.current().is_none());
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut journal = ErrorJournal::new(3);
        for i in 0..5 {
            journal.record(ShellError::Unexpected(format!("e{i}")), "");
        }
        assert_eq!(journal.len(), 3);
        let first = journal.records().next().unwrap();
        assert!(first.error.contains("e2"));
    }

    #[test]
    fn default_capacity_is_fifty() {
        let mut journal = ErrorJournal::default();
        for i in 0..60 {
            journal.record(ShellError::Unexpected(i.to_string()), "");
        }
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
    }

    #[test]
    fn report_covers_last_ten() {
        let mut journal = ErrorJournal::default();
        for i in 0..15 {
            journal.record(ShellError::WebViewLoadFailed(format!("fail-{i}")), "loader");
        }
        let report = journal.report();
        assert!(report.starts_with("Emberloom Error Report"));
        assert!(report.contains("Recent Errors (10)"));
        assert!(report.contains("fail-14"));
        assert!(report.contains("fail-5"));
        assert!(!report.contains("fail-4\n"));
        assert!(report.contains("Context: loader"));
        assert!(report.contains("(1004)"));
    }

    #[test]
    fn report_omits_empty_context() {
        let mut journal = ErrorJournal::default();
        journal.record(ShellError::NetworkUnavailable, "");
        assert!(!journal.report().contains("Context:"));
    }

    #[test]
    fn clear_empties_everything() {
        let mut journal = ErrorJournal::default();
        journal.record(ShellError::NetworkUnavailable, "x");
        journal.clear();
        assert!(journal.is_empty());
        assert!(journal.current().is_none());
    }
}

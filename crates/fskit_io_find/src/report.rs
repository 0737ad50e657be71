//! Find report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters for one `find_with_options` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportFind {
    /// Entries handed to the filter (walk errors excluded).
    pub cnt_scanned: u64,
    /// Entries whose basename matched the pattern.
    pub cnt_matched: u64,
    /// Directories whose subtree was skipped.
    pub cnt_pruned: u64,
}

impl ReportFind {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_pruned".to_string(), self.cnt_pruned);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} pruned={}",
            self.cnt_scanned, self.cnt_matched, self.cnt_pruned
        )
    }
}

impl fmt::Display for ReportFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[FIND]"))
    }
}

/// Mutable accumulator for find statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportFindBuilder {
    /// See [`ReportFind::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportFind::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportFind::cnt_pruned`].
    pub cnt_pruned: u64,
}

impl ReportFindBuilder {
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    pub fn add_pruned(&mut self) {
        self.cnt_pruned += 1;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportFind {
        ReportFind {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_pruned: self.cnt_pruned,
        }
    }
}

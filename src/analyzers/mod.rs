// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Audit passes over parsed directory entries

pub mod duplicates;
pub mod keywords;

use crate::parser::Entry;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single finding attached to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    /// The flagged entry
    #[serde(flatten)]
    pub entry: Entry,
    /// Why the entry was flagged
    pub note: String,
}

impl Flag {
    /// Create a new flag for an entry
    pub fn new(entry: &Entry, note: String) -> Self {
        Self {
            entry: entry.clone(),
            note,
        }
    }
}

/// Trait for all audit passes
pub trait AuditPass {
    /// Get pass name
    fn name(&self) -> &str;

    /// Run the pass over entries, returning flags in entry order
    fn run(&self, entries: &[Entry]) -> Vec<Flag>;
}

/// Combined results from all audit passes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    /// Number of entries analysed
    pub total_entries: usize,
    /// Entry count per section, ordered by section name
    pub sections: BTreeMap<String, usize>,
    /// Potential error indicators
    pub errors: Vec<Flag>,
    /// Potentially unnecessary entries
    pub unnecessary: Vec<Flag>,
    /// Sensitive or restricted entries
    pub sensitive: Vec<Flag>,
    /// Entries sharing a title
    pub duplicate_titles: Vec<Flag>,
    /// Entries sharing a URL
    pub duplicate_urls: Vec<Flag>,
}

impl AuditResult {
    /// Total number of flags across all passes
    pub fn total_flags(&self) -> usize {
        self.errors.len()
            + self.unnecessary.len()
            + self.sensitive.len()
            + self.duplicate_titles.len()
            + self.duplicate_urls.len()
    }

    /// Check if any pass raised a flag
    pub fn has_flags(&self) -> bool {
        self.total_flags() > 0
    }
}

/// Count entries per section, sections ordered lexicographically
pub fn section_summary(entries: &[Entry]) -> BTreeMap<String, usize> {
    let mut sections = BTreeMap::new();
    for entry in entries {
        *sections.entry(entry.section.clone()).or_insert(0) += 1;
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_summary_is_sorted_by_name() {
        let entries = vec![
            Entry::new("Zeta", "a", "http://a", ""),
            Entry::new("Alpha", "b", "http://b", ""),
            Entry::new("Zeta", "c", "http://c", ""),
        ];
        let summary = section_summary(&entries);
        let names: Vec<_> = summary.keys().cloned().collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert_eq!(summary["Zeta"], 2);
    }

    #[test]
    fn test_flag_serializes_flat() {
        let entry = Entry::new("Docs", "A", "http://a", "desc");
        let flag = Flag::new(&entry, "note".to_string());
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["section"], "Docs");
        assert_eq!(json["url"], "http://a");
        assert_eq!(json["note"], "note");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Duplicate title and URL detection

use super::{AuditPass, Flag};
use crate::parser::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Entry field a duplicate scan is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKey {
    Title,
    Url,
}

impl DuplicateKey {
    fn label(self) -> &'static str {
        match self {
            DuplicateKey::Title => "title",
            DuplicateKey::Url => "URL",
        }
    }

    fn of(self, entry: &Entry) -> String {
        match self {
            DuplicateKey::Title => entry.title.to_lowercase(),
            DuplicateKey::Url => entry.url.to_lowercase(),
        }
    }
}

/// Flags every entry whose key occurs more than once
pub struct DuplicatePass {
    key: DuplicateKey,
}

impl DuplicatePass {
    pub fn new(key: DuplicateKey) -> Self {
        Self { key }
    }

    /// Occurrence count per lowercased key
    pub fn counts(&self, entries: &[Entry]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for entry in entries {
            *counts.entry(self.key.of(entry)).or_insert(0) += 1;
        }
        counts
    }
}

impl AuditPass for DuplicatePass {
    fn name(&self) -> &str {
        match self.key {
            DuplicateKey::Title => "duplicate-titles",
            DuplicateKey::Url => "duplicate-urls",
        }
    }

    fn run(&self, entries: &[Entry]) -> Vec<Flag> {
        let counts = self.counts(entries);

        let flags: Vec<Flag> = entries
            .iter()
            .filter_map(|entry| {
                let count = counts.get(&self.key.of(entry)).copied().unwrap_or(0);
                (count > 1).then(|| {
                    Flag::new(
                        entry,
                        format!("Duplicate {} occurs {} times", self.key.label(), count),
                    )
                })
            })
            .collect();

        debug!(pass = self.name(), flags = flags.len(), "Duplicate scan complete");
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_duplicate_is_flagged_with_total() {
        let entries = vec![
            Entry::new("A", "Example", "http://1", ""),
            Entry::new("A", "other", "http://2", ""),
            Entry::new("B", "EXAMPLE", "http://3", ""),
            Entry::new("C", "example", "http://4", ""),
        ];
        let flags = DuplicatePass::new(DuplicateKey::Title).run(&entries);
        assert_eq!(flags.len(), 3);
        assert!(flags
            .iter()
            .all(|f| f.note == "Duplicate title occurs 3 times"));
        let sections: Vec<_> = flags.iter().map(|f| f.entry.section.as_str()).collect();
        assert_eq!(sections, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_url_duplicates_ignore_case() {
        let entries = vec![
            Entry::new("A", "One", "HTTP://Example.org", ""),
            Entry::new("A", "Two", "http://example.org", ""),
        ];
        let flags = DuplicatePass::new(DuplicateKey::Url).run(&entries);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0].note, "Duplicate URL occurs 2 times");
        assert_eq!(flags[0].entry.url, "HTTP://Example.org");
    }

    #[test]
    fn test_unique_entries_raise_nothing() {
        let entries = vec![
            Entry::new("A", "One", "http://1", ""),
            Entry::new("A", "Two", "http://2", ""),
        ];
        assert!(DuplicatePass::new(DuplicateKey::Title).run(&entries).is_empty());
        assert!(DuplicatePass::new(DuplicateKey::Url).run(&entries).is_empty());
    }
}

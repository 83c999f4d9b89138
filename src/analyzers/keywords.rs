// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Keyword scan pass

use super::{AuditPass, Flag};
use crate::parser::Entry;
use tracing::debug;

/// Flags entries whose title or description contains a keyword
///
/// At most one flag per entry: the first keyword in list order that occurs
/// in the lowercased `title + " " + description` is reported.
pub struct KeywordPass {
    name: String,
    keywords: Vec<String>,
}

impl KeywordPass {
    /// Create a pass over an ordered keyword list
    pub fn new(name: &str, keywords: &[String]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.to_vec(),
        }
    }

    /// First keyword contained in the entry, if any
    fn first_match(&self, entry: &Entry) -> Option<&str> {
        let haystack = format!("{} {}", entry.title, entry.description).to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| haystack.contains(&keyword.to_lowercase()))
            .map(String::as_str)
    }
}

impl AuditPass for KeywordPass {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, entries: &[Entry]) -> Vec<Flag> {
        let flags: Vec<Flag> = entries
            .iter()
            .filter_map(|entry| {
                self.first_match(entry)
                    .map(|keyword| Flag::new(entry, format!("Contains keyword '{}'", keyword)))
            })
            .collect();

        debug!(pass = %self.name, flags = flags.len(), "Keyword scan complete");
        flags
    }
}

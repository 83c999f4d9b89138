// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Entry parser for link directory files
//!
//! A directory file is line oriented. `## <name>` opens a section, and
//! `- [<title>](<url>)` or `- [<title>](<url>): <description>` adds an entry
//! to the current section. Anything else is ordinary text and is skipped.

use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Section assigned to entries that appear before any heading
pub const UNKNOWN_SECTION: &str = "Unknown";

/// Heading marker that opens a new section
const SECTION_MARKER: &str = "## ";

/// Line boundaries: `\n`, `\r` (alone or in `\r\n`) and the Unicode
/// separators that also end a line (VT, FF, FS/GS/RS, NEL, LS, PS)
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

const ENTRY_PATTERN: &str =
    r"(?i)^- \[(?P<title>[^\]]+)\]\((?P<url>[^)]+)\)(?:: (?P<description>.*))?";

/// One link record from the directory file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Enclosing section name
    pub section: String,
    /// Display title
    pub title: String,
    /// Link target
    pub url: String,
    /// Free text after the colon, empty when absent
    pub description: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(section: &str, title: &str, url: &str, description: &str) -> Self {
        Self {
            section: section.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

/// Line matcher for directory entries
pub struct EntryParser {
    pattern: Regex,
}

impl EntryParser {
    /// Compile the entry pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(ENTRY_PATTERN)?,
        })
    }

    /// Parse the full source text into entries, in source order
    pub fn parse(&self, text: &str) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut current_section = UNKNOWN_SECTION.to_string();

        for raw_line in text.split(is_line_break) {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix(SECTION_MARKER) {
                current_section = name.trim().to_string();
                continue;
            }

            if let Some(entry) = self.parse_line(line, &current_section) {
                entries.push(entry);
            }
        }

        debug!(entries = entries.len(), "Parsed directory entries");
        entries
    }

    /// Match a single trimmed line against the entry pattern
    fn parse_line(&self, line: &str, section: &str) -> Option<Entry> {
        let caps = self.pattern.captures(line)?;

        let title = caps.name("title").map(|m| m.as_str().trim())?;
        let url = caps.name("url").map(|m| m.as_str().trim())?;
        let description = caps
            .name("description")
            .map(|m| m.as_str().trim())
            .unwrap_or("");

        // `[ ]( )` matches the pattern but carries nothing to audit
        if title.is_empty() || url.is_empty() {
            return None;
        }

        Some(Entry::new(section, title, url, description))
    }
}

/// Parse directory text with a freshly compiled matcher
pub fn parse_entries(text: &str) -> Result<Vec<Entry>> {
    Ok(EntryParser::new()?.parse(text))
}

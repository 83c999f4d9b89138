// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! linkbot: Link Directory Auditor
//!
//! This crate audits a curated list of links (Markdown bullet entries grouped
//! under `## ` section headings) and writes a report flagging:
//!
//! - Entries that look like errors or dead pages
//! - Demo, test and placeholder entries
//! - Password protected or private content
//! - Duplicate titles and duplicate URLs
//!
//! The report is informational only; the directory file is never modified.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;

pub use analyzers::{
    duplicates::{DuplicateKey, DuplicatePass},
    keywords::KeywordPass,
    section_summary, AuditPass, AuditResult, Flag,
};
pub use config::Config;
pub use error::{LinkbotError, Result};
pub use parser::{parse_entries, Entry, EntryParser, UNKNOWN_SECTION};
pub use report::ReportFormat;

use std::path::PathBuf;
use tracing::{debug, info};

/// Run every audit pass over parsed entries
pub fn audit(entries: &[Entry], config: &Config) -> AuditResult {
    info!(entries = entries.len(), "Starting directory audit");

    let result = AuditResult {
        total_entries: entries.len(),
        sections: section_summary(entries),
        errors: KeywordPass::new("errors", &config.keywords.errors).run(entries),
        unnecessary: KeywordPass::new("unnecessary", &config.keywords.unnecessary).run(entries),
        sensitive: KeywordPass::new("sensitive", &config.keywords.sensitive).run(entries),
        duplicate_titles: DuplicatePass::new(DuplicateKey::Title).run(entries),
        duplicate_urls: DuplicatePass::new(DuplicateKey::Url).run(entries),
    };

    info!(
        sections = result.sections.len(),
        flags = result.total_flags(),
        "Directory audit complete"
    );

    result
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    /// Where the report was written
    pub report_path: PathBuf,
    /// The audit that was rendered
    pub result: AuditResult,
}

/// Read the source file, audit it and write the report
pub fn run(config: &Config) -> Result<RunOutcome> {
    let source_path = config.source_path();
    if !source_path.exists() {
        return Err(LinkbotError::SourceNotFound(source_path));
    }

    info!(path = %source_path.display(), "Reading directory file");
    let content = std::fs::read_to_string(&source_path)?;

    let entries = EntryParser::new()?.parse(&content);
    let result = audit(&entries, config);
    let rendered = report::render(config.format, &result, &config.paths.source)?;

    let report_path = config.report_path();
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&report_path, rendered)?;
    debug!(path = %report_path.display(), "Report written");

    Ok(RunOutcome {
        report_path,
        result,
    })
}

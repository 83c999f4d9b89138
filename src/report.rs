// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Report rendering
//!
//! The Markdown layout is fixed: header, source, totals, the per-section
//! bullet list, then the five findings tables in a stable order. Identical
//! input always renders byte-identical output.

use crate::analyzers::{AuditResult, Flag};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Report format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// JSON view of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    source: String,
    #[serde(flatten)]
    audit: &'a AuditResult,
}

/// Render an audit result in the requested format
pub fn render(format: ReportFormat, result: &AuditResult, source: &Path) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(result, source)),
        ReportFormat::Json => render_json(result, source),
    }
}

/// Render an audit result as JSON
pub fn render_json(result: &AuditResult, source: &Path) -> Result<String> {
    let report = JsonReport {
        source: source.display().to_string(),
        audit: result,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Render an audit result as a Markdown document
pub fn render_markdown(result: &AuditResult, source: &Path) -> String {
    let mut lines: Vec<String> = vec![
        "# Database Audit Report".to_string(),
        String::new(),
        format!("Source file: `{}`", source.display()),
        String::new(),
        format!("Total entries analysed: {}", result.total_entries),
        String::new(),
        "## Entries by section".to_string(),
    ];

    for (section, count) in &result.sections {
        lines.push(format!("- {}: {} entries", section, count));
    }
    lines.push(String::new());

    push_table(&mut lines, "Potential error indicators", &result.errors);
    push_table(&mut lines, "Potentially unnecessary entries", &result.unnecessary);
    push_table(&mut lines, "Sensitive or restricted entries", &result.sensitive);
    push_table(&mut lines, "Duplicate titles", &result.duplicate_titles);
    push_table(&mut lines, "Duplicate URLs", &result.duplicate_urls);

    let mut md = lines.join("\n").trim_end().to_string();
    md.push('\n');
    md
}

fn push_table(lines: &mut Vec<String>, heading: &str, flags: &[Flag]) {
    lines.push(format!("## {}", heading));

    if flags.is_empty() {
        lines.push("No issues detected.".to_string());
        lines.push(String::new());
        return;
    }

    lines.push("| Section | Title | Notes | URL |".to_string());
    lines.push("| --- | --- | --- | --- |".to_string());
    for flag in flags {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            flag.entry.section, flag.entry.title, flag.note, flag.entry.url
        ));
    }
    lines.push(String::new());
}

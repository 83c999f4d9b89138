// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration handling for linkbot

use crate::error::{LinkbotError, Result};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Report output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathConfig,

    /// Keyword lists for the keyword passes
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Source file resolved against the base directory
    pub fn source_path(&self) -> PathBuf {
        self.paths.base_dir.join(&self.paths.source)
    }

    /// Report file resolved against the base directory
    pub fn report_path(&self) -> PathBuf {
        let path = self.paths.base_dir.join(&self.paths.report);
        match self.format {
            ReportFormat::Markdown => path,
            ReportFormat::Json => path.with_extension("json"),
        }
    }
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    /// Directory the other paths are relative to
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Directory file to audit
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Where the report is written
    #[serde(default = "default_report")]
    pub report: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            source: default_source(),
            report: default_report(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_source() -> PathBuf {
    PathBuf::from("llms.txt")
}

fn default_report() -> PathBuf {
    PathBuf::from("reports/database_audit.md")
}

/// Keyword lists, checked in order (first match wins)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Words that suggest a broken or failing link
    #[serde(default = "default_error_keywords")]
    pub errors: Vec<String>,

    /// Words that suggest demo or placeholder content
    #[serde(default = "default_unnecessary_keywords")]
    pub unnecessary: Vec<String>,

    /// Phrases that suggest restricted content
    #[serde(default = "default_sensitive_keywords")]
    pub sensitive: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            errors: default_error_keywords(),
            unnecessary: default_unnecessary_keywords(),
            sensitive: default_sensitive_keywords(),
        }
    }
}

fn default_error_keywords() -> Vec<String> {
    vec![
        "error".to_string(),
        "failed".to_string(),
        "invalid".to_string(),
        "not found".to_string(),
        "unavailable".to_string(),
    ]
}

fn default_unnecessary_keywords() -> Vec<String> {
    vec![
        "demo".to_string(),
        "test".to_string(),
        "placeholder".to_string(),
        "sample".to_string(),
        "dummy".to_string(),
        "lorem".to_string(),
        "lipsum".to_string(),
    ]
}

fn default_sensitive_keywords() -> Vec<String> {
    vec!["password protected".to_string(), "private".to_string()]
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// On-disk syntax of a linkbot config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSyntax {
    Yaml,
    Toml,
}

impl ConfigSyntax {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => ConfigSyntax::Toml,
            _ => ConfigSyntax::Yaml,
        }
    }
}

/// Load the linkbot config, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.is_file() {
        debug!(path = %path.display(), "No linkbot config, auditing with defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = match ConfigSyntax::of(path) {
        ConfigSyntax::Toml => toml::from_str(&content)?,
        ConfigSyntax::Yaml => serde_yaml::from_str(&content)?,
    };

    debug!(
        path = %path.display(),
        source = %config.source_path().display(),
        report = %config.report_path().display(),
        "Loaded linkbot config"
    );
    Ok(config)
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".linkbot/config.yml")
}

/// Serialize the default config in the syntax the path's extension names
fn render_default_config(path: &Path) -> Result<String> {
    let config = Config::default();
    match ConfigSyntax::of(path) {
        ConfigSyntax::Toml => {
            toml::to_string_pretty(&config).map_err(|e| LinkbotError::Config(e.to_string()))
        }
        ConfigSyntax::Yaml => Ok(serde_yaml::to_string(&config)?),
    }
}

/// Write the default linkbot config, creating its directory
pub fn write_default_config(path: &Path) -> Result<()> {
    let content = render_default_config(path)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    debug!(path = %path.display(), "Wrote default linkbot config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_path(), PathBuf::from("./llms.txt"));
        assert_eq!(
            config.report_path(),
            PathBuf::from("./reports/database_audit.md")
        );
        assert_eq!(config.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_default_keyword_order() {
        let keywords = KeywordConfig::default();
        assert_eq!(
            keywords.errors,
            vec!["error", "failed", "invalid", "not found", "unavailable"]
        );
        assert_eq!(
            keywords.unnecessary,
            vec!["demo", "test", "placeholder", "sample", "dummy", "lorem", "lipsum"]
        );
        assert_eq!(keywords.sensitive, vec!["password protected", "private"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "paths:\n  source: links.md\nformat: json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.paths.source, PathBuf::from("links.md"));
        assert_eq!(config.paths.report, PathBuf::from("reports/database_audit.md"));
        assert_eq!(config.keywords.sensitive.len(), 2);
        assert_eq!(config.report_path(), PathBuf::from("./reports/database_audit.json"));
    }

    #[test]
    fn test_toml_round_trip_through_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");
        write_default_config(&path).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.keywords.errors, default_error_keywords());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_quiet_log_level_by_default() {
        assert_eq!(Config::default().log.level, "warn");
        let config: Config = serde_yaml::from_str("log:\n  level: debug\n").unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_syntax_follows_extension() {
        assert_eq!(ConfigSyntax::of(Path::new("a/config.toml")), ConfigSyntax::Toml);
        assert_eq!(ConfigSyntax::of(Path::new("a/config.yml")), ConfigSyntax::Yaml);
        assert_eq!(ConfigSyntax::of(Path::new("config")), ConfigSyntax::Yaml);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.yml")).unwrap();
        assert_eq!(config.paths.source, PathBuf::from("llms.txt"));
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! linkbot CLI - Link Directory Auditor

use clap::{Parser, Subcommand};
use linkbot::config::{self, Config};
use linkbot::ReportFormat;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// linkbot: Link Directory Auditor
///
/// Audits a curated link directory and writes a Markdown report of likely
/// errors, placeholder entries, sensitive content and duplicates.
#[derive(Parser)]
#[command(name = "linkbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory file to audit (overrides config)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Report output path (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Log level (trace, debug, info, warn, error); defaults to warn
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Audit the directory file and write the report
    Audit {
        /// Exit with status 2 when any entry is flagged
        #[arg(long)]
        strict: bool,
    },

    /// Initialize configuration file
    Init {
        /// Output format (yaml, toml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Show current configuration
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    let mut config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Apply CLI overrides
    if let Some(source) = cli.source {
        config.paths.source = source;
    }
    if let Some(output) = cli.output {
        config.paths.report = output;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    init_logging(&config.log.level);

    match cli.command {
        Some(Command::Audit { strict }) => handle_audit(&config, strict),
        Some(Command::Init { format }) => handle_init(&config_path, &format),
        Some(Command::Show) => handle_show(&config),
        None => handle_audit(&config, false),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the completion line
    let layer = fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}

fn handle_audit(config: &Config, strict: bool) -> ExitCode {
    match linkbot::run(config) {
        Ok(outcome) => {
            println!(
                "Audit complete. Report written to {}",
                outcome.report_path.display()
            );
            if strict && outcome.result.has_flags() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_init(config_path: &Path, format: &str) -> ExitCode {
    let path = if format == "toml" {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    match config::write_default_config(&path) {
        Ok(()) => {
            println!("Created configuration file: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error creating config: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_show(config: &Config) -> ExitCode {
    println!("\nCurrent Configuration:");
    println!("======================\n");

    println!("Paths:");
    println!("  Base dir: {}", config.paths.base_dir.display());
    println!("  Source: {}", config.source_path().display());
    println!("  Report: {}", config.report_path().display());
    println!();

    println!("Keywords:");
    println!("  Errors: {}", config.keywords.errors.join(", "));
    println!("  Unnecessary: {}", config.keywords.unnecessary.join(", "));
    println!("  Sensitive: {}", config.keywords.sensitive.join(", "));
    println!();

    println!("General:");
    println!("  Format: {:?}", config.format);
    println!("  Log level: {}", config.log.level);

    ExitCode::SUCCESS
}

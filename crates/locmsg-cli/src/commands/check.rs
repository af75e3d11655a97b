//! Implementation of the `locmsg check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use locmsg::loader::parse_bundle;
use locmsg::{Bundle, Message, PluralKey};
use miette::Report;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::BundleDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Bundle files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    messages: usize,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let report = check_file(path, args.json);
        failed |= report.error.is_some();
        reports.push(report);
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Failed to serialize report: {e}"))?;
        println!("{output}");
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Check one file, printing diagnostics unless JSON output was requested.
fn check_file(path: &Path, json: bool) -> FileReport {
    let file = path.display().to_string();
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if !json {
                eprintln!("{} {file}: {e}", "error:".red().bold());
            }
            return FileReport {
                file,
                messages: 0,
                error: Some(e.to_string()),
                warnings: Vec::new(),
            };
        }
    };

    match parse_bundle(&content) {
        Ok(bundle) => {
            let warnings = bundle_warnings(&bundle);
            if !json {
                for warning in &warnings {
                    eprintln!("{} {file}: {warning}", "warning:".yellow().bold());
                }
                println!("{} {file} ({} messages)", "ok".green(), bundle.messages.len());
            }
            FileReport {
                file,
                messages: bundle.messages.len(),
                error: None,
                warnings,
            }
        }
        Err(e) => {
            if !json {
                let diagnostic = BundleDiagnostic::from_load_error(path, &content, &e);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            FileReport {
                file,
                messages: 0,
                error: Some(e.to_string()),
                warnings: Vec::new(),
            }
        }
    }
}

/// Plural messages without a catch-all fail to resolve for unlisted amounts.
fn bundle_warnings(bundle: &Bundle) -> Vec<String> {
    let mut keys: Vec<&String> = bundle
        .messages
        .iter()
        .filter(|(_, message)| match message {
            Message::Plural(templates) => !templates.contains_key(&PluralKey::CatchAll),
            Message::Plain(_) => false,
        })
        .map(|(key, _)| key)
        .collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("plural message '{key}' has no catch-all \"n\" entry"))
        .collect()
}

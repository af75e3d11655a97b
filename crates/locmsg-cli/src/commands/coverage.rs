//! Coverage command implementation.

use std::collections::BTreeSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use locmsg::loader::parse_bundle;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_coverage_table, LanguageCoverage};
use crate::output::BundleDiagnostic;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source bundle file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Locale tags to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
}

/// Read a bundle file and return its message keys.
fn bundle_keys(path: &Path) -> Result<BTreeSet<String>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read bundle file {:?}: {}", path, e))?;
    match parse_bundle(&content) {
        Ok(bundle) => Ok(bundle.messages.into_keys().collect()),
        Err(e) => Err(BundleDiagnostic::from_load_error(path, &content, &e).into()),
    }
}

/// Compare one language's keys against the source keys.
fn language_coverage(
    language: &str,
    source: &BTreeSet<String>,
    translated: &BTreeSet<String>,
) -> LanguageCoverage {
    LanguageCoverage {
        language: language.to_string(),
        translated: source.intersection(translated).count(),
        missing: source.difference(translated).cloned().collect(),
        extra: translated.difference(source).cloned().collect(),
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_keys = bundle_keys(&args.source)?;
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{lang}.json"));
        let translated = if lang_file.exists() {
            bundle_keys(&lang_file)?
        } else {
            // File doesn't exist - all messages are missing
            BTreeSet::new()
        };
        coverage_data.push(language_coverage(lang, &source_keys, &translated));
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                extra: c.extra.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {}", name);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

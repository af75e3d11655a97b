//! Implementation of the `locmsg eval` command.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args};
use locmsg::formatters::register_standard_formatters;
use locmsg::loader::{
    BundleLoader, CascadingBundleLoader, DirectorySource, JsonBundleLoader, ObjectBundleLoader,
};
use locmsg::{
    default_locale, ErrorReporting, LoadError, Locale, MessageResolver, ResolveError,
    ResolvingContext, Value,
};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::debug;

/// Arguments for the eval command.
#[derive(Debug, Args)]
#[command(group = ArgGroup::new("input").required(true).args(["key", "template"]))]
pub struct EvalArgs {
    /// Locale tag (e.g., en, de-DE). Defaults to the environment's locale.
    #[arg(long, env = "LOCMSG_LOCALE")]
    pub locale: Option<String>,

    /// Directory with <tag>.json bundles (repeatable; later directories win)
    #[arg(long = "dir")]
    pub dirs: Vec<PathBuf>,

    /// Message key to resolve
    #[arg(long)]
    pub key: Option<String>,

    /// Template string to format
    #[arg(long)]
    pub template: Option<String>,

    /// Amount for plural messages and {{n}}
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<i64>,

    /// Positional arguments (repeatable): integers, floats, RFC 3339 timestamps, or text
    #[arg(short = 'a', long = "arg", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Fail on resolution errors instead of printing the error text
    #[arg(long)]
    pub exception: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub locale: String,
    pub result: String,
}

/// Parse a command-line argument into the most specific value.
fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Value::from(dt.with_timezone(&Utc)),
        Err(_) => Value::from(raw),
    }
}

/// Build the loader for the given bundle directories.
fn build_loader(dirs: &[PathBuf]) -> Result<Box<dyn BundleLoader>, LoadError> {
    let mut loaders: Vec<Box<dyn BundleLoader>> = dirs
        .iter()
        .map(|dir| -> Box<dyn BundleLoader> {
            Box::new(JsonBundleLoader::new(DirectorySource::new(dir)))
        })
        .collect();
    match loaders.len() {
        0 => Ok(Box::new(ObjectBundleLoader::new())),
        1 => Ok(loaders.remove(0)),
        _ => Ok(Box::new(CascadingBundleLoader::new(loaders)?)),
    }
}

/// Resolve the key or template requested by `args`.
fn evaluate(
    resolver: &MessageResolver,
    args: &EvalArgs,
    values: &[Value],
) -> Result<String, ResolveError> {
    match (&args.key, &args.template, args.amount) {
        (Some(key), _, Some(amount)) => resolver.mpl(key, amount, values),
        (Some(key), _, None) => resolver.m(key, values),
        (None, Some(template), amount) => resolver.format_message(template, values, amount),
        (None, None, _) => Ok(String::new()),
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let locale = match &args.locale {
        Some(tag) => Locale::new(tag.as_str()).into_diagnostic()?,
        None => default_locale(),
    };
    let loader = build_loader(&args.dirs).into_diagnostic()?;
    debug!(locale = %locale, dirs = args.dirs.len(), "evaluating");

    let runtime = Builder::new_current_thread()
        .build()
        .map_err(|e| miette!("Failed to start runtime: {e}"))?;
    let mut resolver = runtime
        .block_on(MessageResolver::create(&loader, Some(locale)))
        .into_diagnostic()?;
    register_standard_formatters(&mut resolver);
    if args.exception {
        resolver.set_error_reporting(ErrorReporting::Exception);
    }

    let values: Vec<Value> = args.args.iter().map(String::as_str).map(parse_value).collect();

    match evaluate(&resolver, &args, &values) {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    locale: resolver.locale().to_string(),
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_prefers_integers() {
        assert_eq!(parse_value("42"), Value::Number(42));
        assert_eq!(parse_value("-7"), Value::Number(-7));
        assert_eq!(parse_value("1.5"), Value::Float(1.5));
        assert_eq!(parse_value("John"), Value::from("John"));
        assert_eq!(parse_value("NaN"), Value::from("NaN"));
    }

    #[test]
    fn parse_value_reads_timestamps() {
        let value = parse_value("2006-01-02T15:04:05Z");
        assert_eq!(value.as_date_time().map(|dt| dt.timestamp()), Some(1_136_214_245));
    }

    #[test]
    fn loader_count_selects_loader_kind() {
        assert!(build_loader(&[]).is_ok());
        assert!(build_loader(&[PathBuf::from("a")]).is_ok());
        assert!(build_loader(&[PathBuf::from("a"), PathBuf::from("b")]).is_ok());
    }
}

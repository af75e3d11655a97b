//! locmsg CLI entry point.
//!
//! Provides command-line tools for working with JSON message bundles:
//! - `locmsg check` - Validate bundle files
//! - `locmsg coverage` - Compare message keys across languages
//! - `locmsg eval` - Resolve a message or template

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_eval, CheckArgs, CoverageArgs, EvalArgs};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

/// Message bundle tools.
#[derive(Debug, Parser)]
#[command(name = "locmsg")]
#[command(about = "Localized message bundle tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check JSON bundle files
    Check(CheckArgs),
    /// Report message coverage across languages
    Coverage(CoverageArgs),
    /// Resolve a message key or template
    Eval(EvalArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn setup_tracing(verbose: bool, color_when: ColorWhen) -> miette::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse().into_diagnostic()?)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .without_time()
        .init();
    Ok(())
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose, cli.color)?;

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

//! Miette diagnostic wrapper for bundle load errors.

use std::path::Path;

use locmsg::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for errors in a JSON bundle file.
///
/// Fields are read by the miette derive macros.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(locmsg::bundle))]
pub struct BundleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl BundleDiagnostic {
    /// Create a diagnostic from a bundle load error with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (offset, help) = match err {
            LoadError::Json(json) => (
                line_column_offset(content, json.line(), json.column()),
                Some("messages must be strings or objects of strings".to_string()),
            ),
            LoadError::InvalidPluralKey { plural_key, .. } => (
                content.find(&format!("\"{plural_key}\"")).unwrap_or(0),
                Some("plural keys are decimal amounts such as \"0\" or the catch-all \"n\"".to_string()),
            ),
            LoadError::Configuration { .. } | LoadError::Io { .. } | LoadError::Source { .. } => {
                (0, None)
            }
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        BundleDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1)
}

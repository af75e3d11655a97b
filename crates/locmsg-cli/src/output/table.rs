//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Locale tag (e.g., "de", "fr-CA").
    pub language: String,
    /// Number of source keys the language defines.
    pub translated: usize,
    /// Source keys missing from the language.
    pub missing: Vec<String>,
    /// Keys the language defines that the source does not.
    pub extra: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Extra"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
            lang.extra.len().to_string(),
        ]);
    }

    table
}

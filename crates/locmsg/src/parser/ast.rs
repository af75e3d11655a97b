//! Public AST types for message templates.
//!
//! These types are public so tooling can inspect placeholders without
//! resolving a message.

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterates over the placeholders of this template.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Literal(_) => None,
            Segment::Placeholder(placeholder) => Some(placeholder),
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied verbatim.
    Literal(String),
    /// A substitution marker: `{{selector}}` or `{{selector:formatter}}`.
    Placeholder(Placeholder),
}

/// A substitution marker inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Which value to substitute.
    pub selector: Selector,
    /// Optional formatter name applied to the value (e.g. "date" in `{{0:date}}`).
    pub formatter: Option<String>,
    /// The placeholder exactly as written in the template.
    pub source: String,
}

/// Selects the value substituted for a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Positional argument: `{{0}}`, `{{1}}`, ...
    Index(usize),
    /// The amount bound by plural resolution: `{{n}}`.
    Amount,
}

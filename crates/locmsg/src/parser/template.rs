//! Template string parser using winnow.
//!
//! Recognizes placeholders of the shapes `{{<digits>}}`, `{{n}}`,
//! `{{<digits>:<name>}}` and `{{n:<name>}}`, where `<name>` consists of ASCII
//! letters. Everything else, including braces that do not form a valid
//! placeholder, is literal text.

use super::ast::{Placeholder, Segment, Selector, Template};
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// Parse a template string into an AST.
///
/// Parsing never fails: malformed placeholders are kept as literal text.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal run).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal)).parse_next(input)
}

/// Parse literal text up to the next `{`, or a lone `{` that does not open a
/// placeholder.
fn literal(input: &mut &str) -> ModalResult<Segment> {
    alt((take_till(1.., '{'), "{"))
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: {{ selector (:formatter)? }}
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("{{", (selector, opt(preceded(':', formatter_name))), "}}")
        .with_taken()
        .map(|((selector, formatter), source)| {
            Segment::Placeholder(Placeholder {
                selector,
                formatter: formatter.map(str::to_string),
                source: source.to_string(),
            })
        })
        .parse_next(input)
}

/// Parse a selector: `n` or a decimal index.
///
/// Indices too large for `usize` do not parse, so the placeholder stays literal.
fn selector(input: &mut &str) -> ModalResult<Selector> {
    alt((
        'n'.value(Selector::Amount),
        digit1.try_map(|digits: &str| digits.parse::<usize>().map(Selector::Index)),
    ))
    .parse_next(input)
}

/// Parse a formatter name (ASCII letters only).
fn formatter_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

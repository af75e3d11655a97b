//! Integration tests for placeholder parsing.

use locmsg::parser::{Placeholder, Segment, Selector, parse_template};

fn placeholder(selector: Selector, formatter: Option<&str>, source: &str) -> Segment {
    Segment::Placeholder(Placeholder {
        selector,
        formatter: formatter.map(str::to_string),
        source: source.to_string(),
    })
}

fn literal(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

// =========================================================================
// Valid placeholders
// =========================================================================

#[test]
fn plain_text() {
    let t = parse_template("Hello, world!");
    assert_eq!(t.segments, vec![literal("Hello, world!")]);
}

#[test]
fn empty_template() {
    assert!(parse_template("").segments.is_empty());
}

#[test]
fn index_placeholder() {
    let t = parse_template("Welcome, {{0}}!");
    assert_eq!(
        t.segments,
        vec![
            literal("Welcome, "),
            placeholder(Selector::Index(0), None, "{{0}}"),
            literal("!"),
        ]
    );
}

#[test]
fn amount_placeholder() {
    let t = parse_template("{{n}} mails");
    assert_eq!(
        t.segments,
        vec![placeholder(Selector::Amount, None, "{{n}}"), literal(" mails")]
    );
}

#[test]
fn formatter_suffix() {
    let t = parse_template("{{12:date}}{{n:integer}}");
    assert_eq!(
        t.segments,
        vec![
            placeholder(Selector::Index(12), Some("date"), "{{12:date}}"),
            placeholder(Selector::Amount, Some("integer"), "{{n:integer}}"),
        ]
    );
}

#[test]
fn placeholders_iterator() {
    let t = parse_template("{{0}} and {{1:date}} of {{n}}");
    let selectors: Vec<Selector> = t.placeholders().map(|p| p.selector).collect();
    assert_eq!(
        selectors,
        vec![Selector::Index(0), Selector::Index(1), Selector::Amount]
    );
}

// =========================================================================
// Malformed placeholders stay literal
// =========================================================================

#[test]
fn single_braces_are_literal() {
    let t = parse_template("{0} and {n}");
    assert_eq!(t.segments, vec![literal("{0} and {n}")]);
}

#[test]
fn whitespace_inside_braces_is_literal() {
    let t = parse_template("{{ 0 }}");
    assert_eq!(t.segments, vec![literal("{{ 0 }}")]);
}

#[test]
fn non_alpha_formatter_is_literal() {
    let t = parse_template("{{0:date2}} {{0:}} {{0:my-fmt}}");
    assert_eq!(t.segments, vec![literal("{{0:date2}} {{0:}} {{0:my-fmt}}")]);
}

#[test]
fn other_selectors_are_literal() {
    let t = parse_template("{{name}} {{-1}} {{N}}");
    assert_eq!(t.segments, vec![literal("{{name}} {{-1}} {{N}}")]);
}

#[test]
fn unclosed_placeholder_is_literal() {
    let t = parse_template("Hello {{0");
    assert_eq!(t.segments, vec![literal("Hello {{0")]);
}

#[test]
fn extra_braces_around_placeholder() {
    let t = parse_template("{{{0}}}");
    assert_eq!(
        t.segments,
        vec![
            literal("{"),
            placeholder(Selector::Index(0), None, "{{0}}"),
            literal("}"),
        ]
    );
}

#[test]
fn overflowing_index_is_literal() {
    let t = parse_template("{{99999999999999999999999999}}");
    assert_eq!(t.segments, vec![literal("{{99999999999999999999999999}}")]);
}

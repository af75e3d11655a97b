use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The key of a single message in a bundle.
pub type MessageKey = String;

/// Templates of a plural message keyed by amount or catch-all.
pub type PluralMessage = HashMap<PluralKey, String>;

/// A key selecting one template of a plural message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralKey {
    /// Matches exactly this amount.
    Amount(u64),

    /// The catch-all entry, written as `n`, used when no amount matches.
    CatchAll,
}

impl PluralKey {
    /// Parses a raw plural key: a string of ASCII digits or the literal `n`.
    ///
    /// Returns `None` for any other shape, including digit strings too large
    /// to represent as an amount.
    pub fn parse(raw: &str) -> Option<PluralKey> {
        if raw == "n" {
            return Some(PluralKey::CatchAll);
        }
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(PluralKey::Amount)
    }
}

impl Display for PluralKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PluralKey::Amount(amount) => write!(f, "{amount}"),
            PluralKey::CatchAll => f.write_str("n"),
        }
    }
}

/// A localized message: either a plain template or a set of plural templates.
///
/// # Example
///
/// ```
/// use locmsg::{Message, PluralKey};
///
/// let plain = Message::from("Hello, {{0}}");
/// assert!(plain.as_plain().is_some());
///
/// let plural = Message::plural([
///     (PluralKey::Amount(1), "One mail"),
///     (PluralKey::CatchAll, "{{n}} mails"),
/// ]);
/// assert!(plural.as_plural().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A single template.
    Plain(String),

    /// Templates selected by amount.
    Plural(PluralMessage),
}

impl Message {
    /// Builds a plural message from key/template pairs.
    pub fn plural<T: Into<String>>(entries: impl IntoIterator<Item = (PluralKey, T)>) -> Message {
        Message::Plural(
            entries
                .into_iter()
                .map(|(key, template)| (key, template.into()))
                .collect(),
        )
    }

    /// Returns the template if this is a plain message.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Message::Plain(template) => Some(template),
            Message::Plural(_) => None,
        }
    }

    /// Returns the plural templates if this is a plural message.
    pub fn as_plural(&self) -> Option<&PluralMessage> {
        match self {
            Message::Plain(_) => None,
            Message::Plural(templates) => Some(templates),
        }
    }
}

impl From<&str> for Message {
    fn from(template: &str) -> Self {
        Message::Plain(template.to_string())
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Message::Plain(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plural_keys() {
        assert_eq!(PluralKey::parse("0"), Some(PluralKey::Amount(0)));
        assert_eq!(PluralKey::parse("012"), Some(PluralKey::Amount(12)));
        assert_eq!(PluralKey::parse("n"), Some(PluralKey::CatchAll));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert_eq!(PluralKey::parse(""), None);
        assert_eq!(PluralKey::parse("N"), None);
        assert_eq!(PluralKey::parse("-1"), None);
        assert_eq!(PluralKey::parse("+1"), None);
        assert_eq!(PluralKey::parse("1.5"), None);
        assert_eq!(PluralKey::parse("one"), None);
        assert_eq!(PluralKey::parse("99999999999999999999999"), None);
    }
}

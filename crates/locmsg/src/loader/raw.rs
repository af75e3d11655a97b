//! Raw message shapes and their normalization into [`Message`]s.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::loader::LoadError;
use crate::types::{Bundle, Message, MessageKey, PluralKey, PluralMessage};

/// A message as written in a bundle file or table, before plural keys are
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMessage {
    /// A plain template.
    Text(String),

    /// Plural templates keyed by digit strings or `n`.
    Plural(BTreeMap<String, String>),
}

impl RawMessage {
    /// Builds a raw plural message from key/template pairs.
    pub fn plural<K: Into<String>, T: Into<String>>(
        entries: impl IntoIterator<Item = (K, T)>,
    ) -> RawMessage {
        RawMessage::Plural(
            entries
                .into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        )
    }
}

impl From<&str> for RawMessage {
    fn from(template: &str) -> Self {
        RawMessage::Text(template.to_string())
    }
}

impl From<String> for RawMessage {
    fn from(template: String) -> Self {
        RawMessage::Text(template)
    }
}

/// Converts a raw message into a [`Message`], parsing plural keys.
pub(crate) fn normalize_message(key: &str, raw: &RawMessage) -> Result<Message, LoadError> {
    match raw {
        RawMessage::Text(template) => Ok(Message::Plain(template.clone())),
        RawMessage::Plural(entries) => entries
            .iter()
            .map(|(plural_key, template)| {
                PluralKey::parse(plural_key)
                    .map(|parsed| (parsed, template.clone()))
                    .ok_or_else(|| LoadError::InvalidPluralKey {
                        plural_key: plural_key.clone(),
                        message_key: key.to_string(),
                    })
            })
            .collect::<Result<PluralMessage, _>>()
            .map(Message::Plural),
    }
}

/// Converts a table of raw messages into normalized messages.
pub(crate) fn normalize_messages<'a>(
    raw: impl IntoIterator<Item = (&'a String, &'a RawMessage)>,
) -> Result<HashMap<MessageKey, Message>, LoadError> {
    raw.into_iter()
        .map(|(key, message)| Ok((key.clone(), normalize_message(key, message)?)))
        .collect()
}

/// Parses JSON bundle text into a [`Bundle`].
///
/// The text must be an object mapping message keys to either a template
/// string or an object of plural templates. Plural keys must be decimal digit
/// strings or `n`.
///
/// # Example
///
/// ```
/// use locmsg::loader::parse_bundle;
///
/// let bundle = parse_bundle(r#"{
///     "greeting": "Hello, {{0}}",
///     "mails": { "0": "No mail", "n": "{{n}} mails" }
/// }"#).unwrap();
/// assert_eq!(bundle.messages.len(), 2);
///
/// assert!(parse_bundle(r#"{ "mails": { "one": "a mail" } }"#).is_err());
/// ```
pub fn parse_bundle(text: &str) -> Result<Bundle, LoadError> {
    let raw: BTreeMap<String, RawMessage> = serde_json::from_str(text)?;
    let messages = normalize_messages(&raw)?;
    Ok(Bundle::builder().messages(messages).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_plain_message() {
        let message = normalize_message("greeting", &RawMessage::from("Hello")).unwrap();
        assert_eq!(message, Message::Plain("Hello".to_string()));
    }

    #[test]
    fn normalize_plural_keys() {
        let raw = RawMessage::plural([("0", "none"), ("12", "dozen"), ("n", "many")]);
        let message = normalize_message("count", &raw).unwrap();
        let templates = message.as_plural().unwrap();
        assert_eq!(templates[&PluralKey::Amount(0)], "none");
        assert_eq!(templates[&PluralKey::Amount(12)], "dozen");
        assert_eq!(templates[&PluralKey::CatchAll], "many");
    }

    #[test]
    fn normalize_rejects_invalid_plural_key() {
        let raw = RawMessage::plural([("one", "a thing")]);
        let err = normalize_message("things", &raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid plural key 'one' for message key 'things'"
        );
    }
}

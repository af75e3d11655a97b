use std::collections::{BTreeSet, HashMap};
use std::fmt::{Debug, Formatter as FmtFormatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;

use super::{Message, MessageKey, Value};
use crate::resolver::{ResolveError, ResolvingContext};

/// A named function converting a value into display text.
///
/// Formatters receive the resolving context so they can consult the locale or
/// resolve further messages.
pub type Formatter =
    Arc<dyn Fn(&Value, &dyn ResolvingContext) -> Result<String, ResolveError> + Send + Sync>;

/// Wraps a closure as a [`Formatter`].
///
/// # Example
///
/// ```
/// use locmsg::{Value, formatter_fn};
///
/// let shout = formatter_fn(|value: &Value, _ctx| Ok(value.to_string().to_uppercase()));
/// ```
pub fn formatter_fn<F>(f: F) -> Formatter
where
    F: Fn(&Value, &dyn ResolvingContext) -> Result<String, ResolveError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The messages and formatters for one effective locale.
///
/// # Example
///
/// ```
/// use locmsg::{Bundle, Message};
///
/// let bundle = Bundle::new()
///     .with_message("greeting", "Hello, {{0}}")
///     .with_message("farewell", Message::from("Bye"));
///
/// assert_eq!(bundle.messages.len(), 2);
/// ```
#[derive(Clone, Default, Builder)]
pub struct Bundle {
    /// Messages keyed by message key.
    #[builder(default)]
    pub messages: HashMap<MessageKey, Message>,

    /// Formatters keyed by name.
    #[builder(default)]
    pub formatters: HashMap<String, Formatter>,
}

impl Bundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message, replacing any message with the same key.
    pub fn with_message(mut self, key: impl Into<MessageKey>, message: impl Into<Message>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    /// Adds a formatter, replacing any formatter with the same name.
    pub fn with_formatter(mut self, name: impl Into<String>, formatter: Formatter) -> Self {
        self.formatters.insert(name.into(), formatter);
        self
    }

    /// Looks up a message by key.
    pub fn message(&self, key: &str) -> Option<&Message> {
        self.messages.get(key)
    }

    /// Looks up a formatter by name.
    pub fn formatter(&self, name: &str) -> Option<&Formatter> {
        self.formatters.get(name)
    }

    /// Returns true if the bundle has neither messages nor formatters.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.formatters.is_empty()
    }
}

impl Debug for Bundle {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        let formatter_names: BTreeSet<&str> = self.formatters.keys().map(String::as_str).collect();
        f.debug_struct("Bundle")
            .field("messages", &self.messages)
            .field("formatters", &formatter_names)
            .finish()
    }
}

//! In-memory bundle tables.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loader::raw::normalize_messages;
use crate::loader::{BundleLoader, LoadError, RawMessage};
use crate::types::{Bundle, Formatter, Locale};

/// The raw contents of one locale's bundle: messages as written plus
/// formatters.
///
/// Deserializes from a plain map of message keys to messages. Formatters
/// cannot be deserialized and are attached with [`BundleObject::with_formatter`].
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleObject {
    pub messages: HashMap<String, RawMessage>,

    #[serde(skip)]
    pub formatters: HashMap<String, Formatter>,
}

impl BundleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message.
    pub fn with_message(mut self, key: impl Into<String>, message: impl Into<RawMessage>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    /// Adds a formatter.
    pub fn with_formatter(mut self, name: impl Into<String>, formatter: Formatter) -> Self {
        self.formatters.insert(name.into(), formatter);
        self
    }

    /// Normalizes the raw messages into a [`Bundle`].
    fn to_bundle(&self) -> Result<Bundle, LoadError> {
        Ok(Bundle::builder()
            .messages(normalize_messages(&self.messages)?)
            .formatters(self.formatters.clone())
            .build())
    }
}

/// Serves bundles from an in-memory table keyed by exact locale tag.
///
/// # Example
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use locmsg::Locale;
/// use locmsg::loader::{BundleLoader, BundleObject, ObjectBundleLoader};
///
/// let loader = ObjectBundleLoader::new()
///     .with_bundle("de", BundleObject::new().with_message("foo", "Foo"));
///
/// // `de-DE` is not in the table, so the loader falls back to `de`.
/// let locale = Locale::new("de-DE").unwrap();
/// assert!(loader.load(&locale).await.unwrap().is_some());
/// # }
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectBundleLoader {
    bundles: HashMap<String, BundleObject>,
}

impl ObjectBundleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the bundle for a locale tag.
    pub fn with_bundle(mut self, tag: impl Into<String>, bundle: BundleObject) -> Self {
        self.bundles.insert(tag.into(), bundle);
        self
    }

    /// Looks up the exact tag, then the language of a regional locale.
    fn lookup(&self, locale: &Locale) -> Option<&BundleObject> {
        if let Some(bundle) = self.bundles.get(locale.tag()) {
            return Some(bundle);
        }
        if locale.has_only_lang() {
            return None;
        }
        let fallback = locale.strip_all_but_lang();
        debug!(locale = %locale, fallback = %fallback, "no bundle object, falling back to language");
        self.bundles.get(fallback.tag())
    }
}

impl From<HashMap<String, BundleObject>> for ObjectBundleLoader {
    fn from(bundles: HashMap<String, BundleObject>) -> Self {
        Self { bundles }
    }
}

#[async_trait]
impl BundleLoader for ObjectBundleLoader {
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError> {
        self.lookup(locale).map(BundleObject::to_bundle).transpose()
    }
}

//! Loading bundles from JSON text.

use async_trait::async_trait;
use tracing::debug;

use crate::loader::{BundleLoader, JsonSource, LoadError, parse_bundle};
use crate::types::{Bundle, Locale};

/// Loads bundles by parsing JSON text obtained from a [`JsonSource`].
///
/// When the source has nothing for a regional locale such as `de-DE`, the
/// loader retries with its language (`de`).
#[derive(Debug, Clone)]
pub struct JsonBundleLoader<S> {
    source: S,
}

impl<S: JsonSource> JsonBundleLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    async fn fetch(&self, locale: &Locale) -> Result<Option<String>, LoadError> {
        self.source
            .fetch(locale)
            .await
            .map_err(|source| LoadError::Source {
                locale: locale.tag().to_string(),
                source,
            })
    }
}

#[async_trait]
impl<S: JsonSource> BundleLoader for JsonBundleLoader<S> {
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError> {
        let text = match self.fetch(locale).await? {
            Some(text) => Some(text),
            None if locale.has_only_lang() => None,
            None => {
                let fallback = locale.strip_all_but_lang();
                debug!(locale = %locale, fallback = %fallback, "no JSON bundle, falling back to language");
                self.fetch(&fallback).await?
            }
        };
        text.as_deref().map(parse_bundle).transpose()
    }
}

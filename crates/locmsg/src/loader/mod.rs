//! Bundle loaders.
//!
//! A [`BundleLoader`] produces the [`Bundle`] for a locale, or `None` when it
//! has nothing for that locale. Loaders fall back from a regional locale such
//! as `de-DE` to its language (`de`) before giving up; the resolver itself
//! performs no fallback.

mod cascading;
mod error;
mod json;
mod merge;
mod object;
mod raw;
mod source;

use std::sync::Arc;

use async_trait::async_trait;

pub use cascading::CascadingBundleLoader;
pub use error::{BoxError, LoadError};
pub use json::JsonBundleLoader;
pub use merge::merge_bundles;
pub use object::{BundleObject, ObjectBundleLoader};
pub use raw::{RawMessage, parse_bundle};
pub use source::{DirectorySource, FnSource, JsonSource, from_fn};

use crate::types::{Bundle, Locale};

/// Produces the bundle for a locale.
#[async_trait]
pub trait BundleLoader: Send + Sync {
    /// Loads the bundle for `locale`.
    ///
    /// Returns `Ok(None)` when no bundle exists for the locale, after any
    /// language fallback the loader performs.
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError>;
}

#[async_trait]
impl<L: BundleLoader + ?Sized> BundleLoader for Arc<L> {
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError> {
        (**self).load(locale).await
    }
}

#[async_trait]
impl<L: BundleLoader + ?Sized> BundleLoader for Box<L> {
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError> {
        (**self).load(locale).await
    }
}

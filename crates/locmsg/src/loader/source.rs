//! Sources of raw JSON bundle text.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{trace, warn};

use crate::loader::{BoxError, LoadError};
use crate::types::Locale;

/// Provides the raw JSON text of a bundle for a locale.
///
/// `Ok(None)` means no bundle exists for the locale. An `Err` is a hard
/// failure and aborts loading.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch(&self, locale: &Locale) -> Result<Option<String>, BoxError>;
}

/// Reads `<dir>/<tag>.json` files from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory bundles are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file holding the bundle for `locale`, or `None` if the tag cannot
    /// name a file inside the directory.
    pub fn path_for(&self, locale: &Locale) -> Option<PathBuf> {
        let tag = locale.tag();
        if tag.contains(['/', '\\']) || tag.starts_with('.') {
            return None;
        }
        Some(self.dir.join(format!("{tag}.json")))
    }
}

#[async_trait]
impl JsonSource for DirectorySource {
    async fn fetch(&self, locale: &Locale) -> Result<Option<String>, BoxError> {
        let Some(path) = self.path_for(locale) else {
            warn!(locale = %locale, "locale tag is not a valid bundle file name");
            return Ok(None);
        };
        match fs::read_to_string(&path).await {
            Ok(text) => {
                trace!(path = %path.display(), "read bundle file");
                Ok(Some(text))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Box::new(LoadError::Io { path, source })),
        }
    }
}

/// A [`JsonSource`] backed by an async function of the locale.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnSource<F> {
    f: F,
}

/// Adapts an async function into a [`JsonSource`].
///
/// # Example
///
/// ```
/// use locmsg::loader::{BoxError, JsonBundleLoader, from_fn};
///
/// let loader = JsonBundleLoader::new(from_fn(|locale| async move {
///     Ok::<_, BoxError>(match locale.tag() {
///         "en" => Some(r#"{ "hello": "Hello" }"#.to_string()),
///         _ => None,
///     })
/// }));
/// ```
pub fn from_fn<F, Fut>(f: F) -> FnSource<F>
where
    F: Fn(Locale) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<String>, BoxError>> + Send,
{
    FnSource { f }
}

#[async_trait]
impl<F, Fut> JsonSource for FnSource<F>
where
    F: Fn(Locale) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<String>, BoxError>> + Send,
{
    async fn fetch(&self, locale: &Locale) -> Result<Option<String>, BoxError> {
        (self.f)(locale.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_appends_json_extension() {
        let source = DirectorySource::new("/bundles");
        let path = source.path_for(&Locale::new("de-DE").unwrap()).unwrap();
        assert_eq!(path, Path::new("/bundles/de-DE.json"));
    }

    #[test]
    fn path_for_rejects_traversal() {
        let source = DirectorySource::new("/bundles");
        assert_eq!(source.path_for(&Locale::new("../secret").unwrap()), None);
        assert_eq!(source.path_for(&Locale::new("de/DE").unwrap()), None);
        assert_eq!(source.path_for(&Locale::new("..").unwrap()), None);
    }
}

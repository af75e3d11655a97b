//! Error types for bundle loading.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A boxed error returned by bundle sources.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors that occur while building loaders or loading bundles.
///
/// A loader that simply has no bundle for a locale returns `Ok(None)`; that
/// case is never reported through this type.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A cascading loader was built with fewer than two loaders.
    #[error("invalid number of loaders to merge: {count}")]
    Configuration { count: usize },

    /// A plural message uses a key that is neither digits nor `n`.
    #[error("invalid plural key '{plural_key}' for message key '{message_key}'")]
    InvalidPluralKey {
        plural_key: String,
        message_key: String,
    },

    /// The bundle text is not valid JSON or does not have the bundle shape.
    #[error("invalid JSON bundle: {0}")]
    Json(#[from] serde_json::Error),

    /// A bundle file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source failed to provide bundle text.
    #[error("failed to load bundle for '{locale}': {source}")]
    Source {
        locale: String,
        #[source]
        source: BoxError,
    },
}

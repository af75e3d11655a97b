//! Loading from several loaders at once.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::trace;

use crate::loader::{BundleLoader, LoadError, merge_bundles};
use crate::types::{Bundle, Locale};

/// Minimum number of loaders a [`CascadingBundleLoader`] accepts.
const MIN_LOADERS: usize = 2;

/// Combines the bundles of several loaders into one.
///
/// All loaders run concurrently; their bundles are merged in list order, so a
/// later loader overrides messages and formatters of earlier ones no matter
/// which finishes first.
pub struct CascadingBundleLoader {
    loaders: Vec<Box<dyn BundleLoader>>,
}

impl CascadingBundleLoader {
    /// Creates a loader from at least two child loaders.
    pub fn new(loaders: Vec<Box<dyn BundleLoader>>) -> Result<Self, LoadError> {
        if loaders.len() < MIN_LOADERS {
            return Err(LoadError::Configuration {
                count: loaders.len(),
            });
        }
        Ok(Self { loaders })
    }

    /// Number of child loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Always false; a cascading loader holds at least two loaders.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

#[async_trait]
impl BundleLoader for CascadingBundleLoader {
    async fn load(&self, locale: &Locale) -> Result<Option<Bundle>, LoadError> {
        trace!(locale = %locale, loaders = self.loaders.len(), "loading cascading bundles");
        let results = join_all(self.loaders.iter().map(|loader| loader.load(locale))).await;
        let bundles = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Some(merge_bundles(bundles)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ObjectBundleLoader;

    #[test]
    fn rejects_fewer_than_two_loaders() {
        let loaders: Vec<Box<dyn BundleLoader>> = vec![Box::new(ObjectBundleLoader::new())];
        let err = CascadingBundleLoader::new(loaders).err().unwrap();
        assert_eq!(err.to_string(), "invalid number of loaders to merge: 1");

        let err = CascadingBundleLoader::new(Vec::new()).err().unwrap();
        assert_eq!(err.to_string(), "invalid number of loaders to merge: 0");
    }
}

//! Right-biased merging of bundles.

use tracing::trace;

use crate::types::Bundle;

/// Merges bundles in order, later bundles overriding earlier ones.
///
/// Absent bundles are skipped. Messages and formatters are overridden per
/// key; keys unique to an earlier bundle survive.
///
/// # Example
///
/// ```
/// use locmsg::Bundle;
/// use locmsg::loader::merge_bundles;
///
/// let merged = merge_bundles([
///     Some(Bundle::new().with_message("foo", "bar").with_message("spam", "eggs")),
///     None,
///     Some(Bundle::new().with_message("foo", "BAR")),
/// ]);
///
/// assert_eq!(merged.message("foo").and_then(|m| m.as_plain()), Some("BAR"));
/// assert_eq!(merged.message("spam").and_then(|m| m.as_plain()), Some("eggs"));
/// ```
pub fn merge_bundles(bundles: impl IntoIterator<Item = Option<Bundle>>) -> Bundle {
    bundles
        .into_iter()
        .flatten()
        .fold(Bundle::new(), |mut merged, bundle| {
            trace!(
                messages = bundle.messages.len(),
                formatters = bundle.formatters.len(),
                "merging bundle"
            );
            merged.messages.extend(bundle.messages);
            merged.formatters.extend(bundle.formatters);
            merged
        })
}

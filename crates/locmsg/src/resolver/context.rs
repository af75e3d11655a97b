//! The resolving context handed to formatters.

use crate::resolver::ResolveError;
use crate::types::{Locale, Value};

/// The context surrounding a resolving call.
///
/// [`MessageResolver`](crate::MessageResolver) implements this trait and
/// passes itself to every formatter it invokes, so a formatter can look at the
/// effective locale or resolve further messages.
///
/// Both `m` and `mpl` honor the resolver's [`ErrorReporting`] mode: in
/// `Message` mode they always return `Ok`, with the error text in place of the
/// message.
///
/// [`ErrorReporting`]: crate::ErrorReporting
pub trait ResolvingContext {
    /// The effective locale.
    fn locale(&self) -> &Locale;

    /// Resolves a plain message and substitutes `args` into its placeholders.
    ///
    /// Keys starting with `$` name a formatter which is applied directly to
    /// the single argument.
    fn m(&self, key: &str, args: &[Value]) -> Result<String, ResolveError>;

    /// Resolves the plural message for `key`, selecting the template for
    /// `amount` and substituting `args` and `amount` into its placeholders.
    fn mpl(&self, key: &str, amount: i64, args: &[Value]) -> Result<String, ResolveError>;
}

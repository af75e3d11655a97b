//! The message resolver: key lookup, plural selection, and direct formatter
//! invocation.

use tracing::debug;

use crate::loader::{BundleLoader, LoadError};
use crate::resolver::{ErrorReporting, ResolveError, ResolvingContext};
use crate::types::{Bundle, Formatter, Locale, Message, PluralKey, PluralMessage, Value, default_locale};

/// Prefix marking a key as a formatter name rather than a message key.
const FORMATTER_SENTINEL: char = '$';

/// Resolves message keys of one bundle into formatted strings.
///
/// A resolver owns a single `(Locale, Bundle)` pair. Resolution is done
/// through the [`ResolvingContext`] methods `m` and `mpl`; errors are returned
/// as text or as `Err` depending on [`ErrorReporting`].
///
/// # Example
///
/// ```
/// use locmsg::{Bundle, ErrorReporting, Locale, MessageResolver, ResolvingContext, args};
///
/// let bundle = Bundle::new().with_message("welcome", "Welcome, {{0}}");
/// let mut resolver = MessageResolver::new(Locale::new("en").unwrap(), bundle);
///
/// assert_eq!(resolver.m("welcome", &args!["John"]).unwrap(), "Welcome, John");
/// assert_eq!(
///     resolver.m("missing", &[]).unwrap(),
///     "Undefined message key: 'missing'"
/// );
///
/// resolver.set_error_reporting(ErrorReporting::Exception);
/// assert!(resolver.m("missing", &[]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MessageResolver {
    locale: Locale,
    bundle: Bundle,
    error_reporting: ErrorReporting,
}

impl MessageResolver {
    /// Creates a resolver for an already loaded bundle.
    pub fn new(locale: Locale, bundle: Bundle) -> Self {
        Self {
            locale,
            bundle,
            error_reporting: ErrorReporting::default(),
        }
    }

    /// Loads the bundle for `locale` and creates a resolver for it.
    ///
    /// Without an explicit locale the default locale of the environment is
    /// used (see [`default_locale`]). A loader that has no bundle for the
    /// locale yields a resolver over an empty bundle.
    pub async fn create<L>(loader: &L, locale: Option<Locale>) -> Result<Self, LoadError>
    where
        L: BundleLoader + ?Sized,
    {
        let locale = locale.unwrap_or_else(default_locale);
        let bundle = loader.load(&locale).await?.unwrap_or_default();
        debug!(
            locale = %locale,
            messages = bundle.messages.len(),
            formatters = bundle.formatters.len(),
            "created message resolver"
        );
        Ok(Self::new(locale, bundle))
    }

    /// The bundle this resolver reads from.
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// The current error reporting mode.
    pub fn error_reporting(&self) -> ErrorReporting {
        self.error_reporting
    }

    /// Changes the error reporting mode for subsequent calls.
    pub fn set_error_reporting(&mut self, mode: ErrorReporting) {
        self.error_reporting = mode;
    }

    /// Returns this resolver with the given error reporting mode.
    pub fn with_error_reporting(mut self, mode: ErrorReporting) -> Self {
        self.error_reporting = mode;
        self
    }

    /// Registers a formatter, replacing any formatter with the same name.
    pub fn register_formatter(&mut self, name: impl Into<String>, formatter: Formatter) -> &mut Self {
        self.bundle.formatters.insert(name.into(), formatter);
        self
    }

    /// Applies the error reporting mode to an error.
    pub(crate) fn report(&self, error: ResolveError) -> Result<String, ResolveError> {
        self.error_reporting.report(error)
    }

    fn lookup(&self, key: &str) -> Result<&Message, ResolveError> {
        self.bundle
            .message(key)
            .ok_or_else(|| ResolveError::UndefinedKey {
                key: key.to_string(),
            })
    }

    fn resolve_plain(&self, key: &str, args: &[Value]) -> Result<String, ResolveError> {
        if let Some(name) = key.strip_prefix(FORMATTER_SENTINEL) {
            return self.invoke_formatter(name, args);
        }

        match self.lookup(key)? {
            Message::Plain(template) => self.format_message(template, args, None),
            Message::Plural(_) => Err(ResolveError::ExpectedPlain {
                key: key.to_string(),
            }),
        }
    }

    fn resolve_plural(&self, key: &str, amount: i64, args: &[Value]) -> Result<String, ResolveError> {
        let templates = match self.lookup(key)? {
            Message::Plain(template) => {
                return Err(ResolveError::ExpectedPlural {
                    key: key.to_string(),
                    template: template.clone(),
                });
            }
            Message::Plural(templates) => templates,
        };

        let template = select_plural(templates, amount).ok_or_else(|| ResolveError::MissingCatchAll {
            key: key.to_string(),
        })?;
        self.format_message(template, args, Some(amount))
    }

    /// Applies the named formatter to the single argument, bypassing message
    /// lookup.
    fn invoke_formatter(&self, name: &str, args: &[Value]) -> Result<String, ResolveError> {
        let [value] = args else {
            return Err(ResolveError::MissingFormatterArgument {
                name: name.to_string(),
                got: args.len(),
            });
        };
        let formatter = self
            .bundle
            .formatter(name)
            .ok_or_else(|| ResolveError::MissingFormatter {
                name: name.to_string(),
            })?;
        formatter(value, self)
    }
}

impl ResolvingContext for MessageResolver {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn m(&self, key: &str, args: &[Value]) -> Result<String, ResolveError> {
        self.resolve_plain(key, args).or_else(|error| self.report(error))
    }

    fn mpl(&self, key: &str, amount: i64, args: &[Value]) -> Result<String, ResolveError> {
        self.resolve_plural(key, amount, args)
            .or_else(|error| self.report(error))
    }
}

/// Selects the template for `amount`: the exact amount entry if present,
/// else the catch-all.
fn select_plural(templates: &PluralMessage, amount: i64) -> Option<&str> {
    u64::try_from(amount)
        .ok()
        .and_then(|amount| templates.get(&PluralKey::Amount(amount)))
        .or_else(|| templates.get(&PluralKey::CatchAll))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mails() -> PluralMessage {
        PluralMessage::from([
            (PluralKey::Amount(0), "none".to_string()),
            (PluralKey::Amount(1), "one".to_string()),
            (PluralKey::CatchAll, "many".to_string()),
        ])
    }

    #[test]
    fn select_plural_prefers_exact_amount() {
        assert_eq!(select_plural(&mails(), 0), Some("none"));
        assert_eq!(select_plural(&mails(), 1), Some("one"));
    }

    #[test]
    fn select_plural_falls_back_to_catch_all() {
        assert_eq!(select_plural(&mails(), 2), Some("many"));
        assert_eq!(select_plural(&mails(), -1), Some("many"));
    }

    #[test]
    fn select_plural_without_catch_all() {
        let templates = PluralMessage::from([(PluralKey::Amount(1), "one".to_string())]);
        assert_eq!(select_plural(&templates, 2), None);
    }
}

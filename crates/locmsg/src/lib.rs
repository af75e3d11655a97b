pub mod formatters;
pub mod loader;
pub mod parser;
pub mod resolver;
pub mod types;

pub use loader::{BundleLoader, LoadError};
pub use resolver::{ErrorReporting, MessageResolver, ResolveError, ResolvingContext};
pub use types::{
    Bundle, Formatter, Locale, LocaleError, Message, MessageKey, PluralKey, PluralMessage, Value,
    default_locale, formatter_fn,
};

/// Creates a `Vec<Value>` of message arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or timestamps directly.
///
/// # Example
///
/// ```
/// use locmsg::{args, Value};
///
/// let a = args![3, "Alice"];
/// assert_eq!(a.len(), 2);
/// assert_eq!(a[0].as_number(), Some(3));
/// assert_eq!(a[1].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![
            $( ::std::convert::Into::<$crate::Value>::into($value) ),+
        ]
    };
}

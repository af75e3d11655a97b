mod bundle;
mod locale;
mod message;
mod value;

pub use bundle::{Bundle, Formatter, formatter_fn};
pub use locale::{Locale, LocaleError, default_locale};
pub use message::{Message, MessageKey, PluralKey, PluralMessage};
pub use value::Value;

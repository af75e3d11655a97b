use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::locale;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sys_locale::get_locale;
use thiserror::Error;
use tracing::debug;

/// Language used when the system reports no usable locale.
const FALLBACK_LANGUAGE: &str = "en";

/// Error raised when a locale tag fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag is shorter than two characters.
    #[error("Invalid locale: \"{tag}\"")]
    Invalid { tag: String },
}

/// A locale tag identifying a language and optional region or other
/// attributes, such as `de`, `de-DE`, or `en-US`.
///
/// Only the minimum length of the tag is validated. The first two characters
/// are treated as the language prefix; nothing checks that they form a real
/// language code.
///
/// # Example
///
/// ```
/// use locmsg::Locale;
///
/// let locale = Locale::new("de-DE").unwrap();
/// assert_eq!(locale.lang(), "de");
/// assert!(!locale.has_only_lang());
/// assert_eq!(locale.strip_all_but_lang().tag(), "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Creates a locale from a tag.
    ///
    /// Fails with [`LocaleError::Invalid`] when the tag has fewer than two
    /// characters.
    pub fn new(tag: impl Into<String>) -> Result<Self, LocaleError> {
        let tag = tag.into();
        if tag.chars().count() < 2 {
            return Err(LocaleError::Invalid { tag });
        }
        Ok(Self { tag })
    }

    /// The tag this locale was created from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The lowercased first two characters of the tag.
    pub fn lang(&self) -> String {
        self.tag.chars().take(2).collect::<String>().to_lowercase()
    }

    /// Returns true if the tag consists of the language prefix only.
    pub fn has_only_lang(&self) -> bool {
        self.tag.chars().count() == 2
    }

    /// Returns a new locale containing only the language prefix.
    pub fn strip_all_but_lang(&self) -> Locale {
        Locale { tag: self.lang() }
    }

    /// Converts this locale into an ICU locale for formatting.
    ///
    /// Tries the full tag first, then the language prefix, and finally falls
    /// back to the root locale.
    pub(crate) fn to_icu(&self) -> icu_locale_core::Locale {
        self.tag
            .parse::<icu_locale_core::Locale>()
            .or_else(|_| self.lang().parse::<icu_locale_core::Locale>())
            .unwrap_or(locale!("und"))
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.tag)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::new(s)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Locale::new(value)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::new(value)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Locale::new(tag).map_err(D::Error::custom)
    }
}

/// Determines the default locale of the system.
///
/// Asks the operating system through `sys_locale`, which on Unix consults
/// `LC_ALL`, `LC_MESSAGES` and `LANG` in that order. POSIX spellings such as
/// `de_DE.UTF-8` or `fr_FR@euro` are normalized to `de-DE` and `fr-FR`. The
/// `C` and `POSIX` pseudo-locales are ignored. Returns `en` when nothing
/// usable is reported.
pub fn default_locale() -> Locale {
    get_locale()
        .and_then(|value| normalize_system_locale(&value))
        .unwrap_or_else(|| {
            debug!("no system locale, using '{FALLBACK_LANGUAGE}'");
            Locale {
                tag: FALLBACK_LANGUAGE.to_string(),
            }
        })
}

/// Normalizes a system locale (`ll_CC.encoding@modifier` or `ll-CC`) into a
/// tag.
fn normalize_system_locale(value: &str) -> Option<Locale> {
    let base = value.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Locale::new(base.replace('_', "-")).ok()
}

//! Locale-aware formatters backed by ICU4X.
//!
//! Each constructor binds a locale and options and returns a [`Formatter`]
//! closure. The ICU formatter objects are built once, by the constructor, and
//! shared by every call of the closure.
//!
//! [`Formatter`]: crate::Formatter

mod datetime;
mod number;
mod relative;
mod standard;

use std::fmt::Display;

pub use datetime::{DateTimeOptions, Style, date_time_formatter};
pub use number::{Grouping, NumberOptions, number_formatter};
pub use relative::{
    RelativeDuration, RelativeNumeric, RelativeTimeOptions, RelativeWidth, TimeUnit,
    relative_time_formatter, select_unit,
};
pub use standard::register_standard_formatters;

use crate::resolver::ResolveError;
use crate::types::Value;

fn formatting_error(error: impl Display) -> ResolveError {
    ResolveError::Formatting {
        reason: error.to_string(),
    }
}

fn invalid_value(value: &Value, expected: &'static str) -> ResolveError {
    ResolveError::InvalidValue {
        value: value.to_string(),
        expected,
    }
}

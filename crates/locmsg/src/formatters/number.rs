use bon::Builder;
use fixed_decimal::{Decimal, FloatPrecision};
use icu_decimal::DecimalFormatter;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use tracing::warn;

use super::{formatting_error, invalid_value};
use crate::resolver::{ResolveError, ResolvingContext};
use crate::types::{Formatter, Locale, Value, formatter_fn};

/// When to render grouping separators, as in `1,000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Follow the locale's conventions.
    #[default]
    Auto,
    /// Never group.
    Never,
    /// Group every number that has enough digits.
    Always,
    /// Group only when at least two separators' worth of digits are present.
    Min2,
}

impl From<Grouping> for GroupingStrategy {
    fn from(grouping: Grouping) -> GroupingStrategy {
        match grouping {
            Grouping::Auto => GroupingStrategy::Auto,
            Grouping::Never => GroupingStrategy::Never,
            Grouping::Always => GroupingStrategy::Always,
            Grouping::Min2 => GroupingStrategy::Min2,
        }
    }
}

/// Options for [`number_formatter`].
///
/// A minimum above the maximum is lowered to the maximum.
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct NumberOptions {
    /// Pad with trailing zeros to at least this many fraction digits.
    pub min_fraction_digits: Option<u8>,

    /// Round to at most this many fraction digits.
    pub max_fraction_digits: Option<u8>,

    #[builder(default)]
    pub grouping: Grouping,
}

/// Creates a formatter rendering numbers with the separators of `locale`.
///
/// Accepts integers, floats, and strings holding a decimal number.
///
/// # Example
///
/// ```
/// use locmsg::formatters::{NumberOptions, number_formatter};
/// use locmsg::{Bundle, Locale, MessageResolver, ResolvingContext, args};
///
/// let locale = Locale::new("de").unwrap();
/// let options = NumberOptions::builder().max_fraction_digits(0).build();
/// let bundle = Bundle::new().with_formatter("integer", number_formatter(&locale, options));
/// let resolver = MessageResolver::new(locale, bundle);
///
/// assert_eq!(resolver.m("$integer", &args![1234567]).unwrap(), "1.234.567");
/// ```
pub fn number_formatter(locale: &Locale, options: NumberOptions) -> Formatter {
    let mut icu_options = DecimalFormatterOptions::default();
    icu_options.grouping_strategy = Some(options.grouping.into());
    let formatter =
        DecimalFormatter::try_new(locale.to_icu().into(), icu_options).map_err(formatting_error);
    if let Err(error) = &formatter {
        warn!(locale = %locale, %error, "Number formatter unavailable");
    }

    formatter_fn(move |value: &Value, _ctx: &dyn ResolvingContext| {
        let formatter = formatter.as_ref().map_err(Clone::clone)?;
        let decimal = round_decimal(options, to_decimal(value)?);
        Ok(formatter.format(&decimal).to_string())
    })
}

fn to_decimal(value: &Value) -> Result<Decimal, ResolveError> {
    match value {
        Value::Number(n) => Ok(Decimal::from(*n)),
        Value::Float(f) if f.is_finite() => {
            Decimal::try_from_f64(*f, FloatPrecision::RoundTrip).map_err(formatting_error)
        }
        Value::String(s) => s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| invalid_value(value, "number")),
        Value::Float(_) | Value::DateTime(_) => Err(invalid_value(value, "number")),
    }
}

fn round_decimal(options: NumberOptions, mut decimal: Decimal) -> Decimal {
    let max = options.max_fraction_digits.map(i16::from);
    let min = options
        .min_fraction_digits
        .map(i16::from)
        .map(|min| max.map_or(min, |max| min.min(max)));

    if let Some(min) = min {
        decimal.pad_end(-min);
    }
    if let Some(max) = max {
        // Rounding pads numbers that are already shorter; only round longer ones.
        let limit = -max;
        if *decimal.magnitude_range().start() < limit {
            decimal.round(limit);
        }
    }
    decimal
}

use bon::Builder;
use fixed_decimal::{Decimal, Sign};
use icu_experimental::relativetime::options::Numeric;
use icu_experimental::relativetime::{RelativeTimeFormatter, RelativeTimeFormatterOptions};
use tracing::warn;
use writeable::Writeable;

use super::{formatting_error, invalid_value};
use crate::resolver::{ResolveError, ResolvingContext};
use crate::types::{Formatter, Locale, Value, formatter_fn};

const MILLIS_PER_SECOND: u64 = 1000;
const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;

/// Width of relative time phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelativeWidth {
    /// `in 45 seconds`
    #[default]
    Long,
    /// `in 45 sec.`
    Short,
    /// `in 45s`
    Narrow,
}

/// Whether counts of one or zero may use words such as `tomorrow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelativeNumeric {
    /// Always render the number: `in 1 day`.
    #[default]
    Always,
    /// Prefer idiomatic words: `tomorrow`.
    Auto,
}

/// Options for [`relative_time_formatter`].
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct RelativeTimeOptions {
    #[builder(default)]
    pub width: RelativeWidth,

    #[builder(default)]
    pub numeric: RelativeNumeric,
}

/// The unit a relative duration is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

/// A duration broken down into the unit it is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDuration {
    /// Whole units, truncated toward zero.
    pub count: u64,
    pub unit: TimeUnit,
    /// True for negative durations, including those that truncate to zero.
    pub past: bool,
}

/// Picks the unit for a signed duration in milliseconds.
///
/// The count is the magnitude in the coarsest unit that still keeps it below
/// the next unit's threshold: seconds below one minute, minutes below one
/// hour, hours below one day, and days otherwise. Counts are truncated. The
/// sign is kept separately so that `-500` is still in the past.
///
/// # Example
///
/// ```
/// use locmsg::formatters::{RelativeDuration, TimeUnit, select_unit};
///
/// let past = select_unit(-45 * 60 * 1000);
/// assert_eq!((past.count, past.unit, past.past), (45, TimeUnit::Minute, true));
///
/// let now = select_unit(-500);
/// assert_eq!(now, RelativeDuration { count: 0, unit: TimeUnit::Second, past: true });
///
/// assert_eq!(select_unit(18 * 24 * 60 * 60 * 1000).unit, TimeUnit::Day);
/// ```
pub fn select_unit(millis: i64) -> RelativeDuration {
    let seconds = millis.unsigned_abs().div_euclid(MILLIS_PER_SECOND);
    let (count, unit) = if seconds < SECONDS_PER_MINUTE {
        (seconds, TimeUnit::Second)
    } else {
        let minutes = seconds.div_euclid(SECONDS_PER_MINUTE);
        if minutes < MINUTES_PER_HOUR {
            (minutes, TimeUnit::Minute)
        } else {
            let hours = minutes.div_euclid(MINUTES_PER_HOUR);
            if hours < HOURS_PER_DAY {
                (hours, TimeUnit::Hour)
            } else {
                (hours.div_euclid(HOURS_PER_DAY), TimeUnit::Day)
            }
        }
    };

    RelativeDuration {
        count,
        unit,
        past: millis < 0,
    }
}

/// Creates a formatter rendering signed millisecond durations as relative
/// time phrases for `locale`, such as `in 45 Sekunden` or `vor 18 Tagen`.
///
/// Negative durations lie in the past. Accepts integer and float numbers.
/// The ICU formatters for all four units are built here, once; a locale
/// without relative time data makes every call fail with the build error.
pub fn relative_time_formatter(locale: &Locale, options: RelativeTimeOptions) -> Formatter {
    let formatters = UnitFormatters::new(locale, options);
    if let Err(error) = &formatters {
        warn!(locale = %locale, %error, "Relative time formatter unavailable");
    }

    formatter_fn(move |value: &Value, _ctx: &dyn ResolvingContext| {
        let formatters = formatters.as_ref().map_err(Clone::clone)?;
        let millis = duration_millis(value).ok_or_else(|| invalid_value(value, "duration"))?;
        let duration = select_unit(millis);
        let mut count = Decimal::from(duration.count);
        if duration.past {
            count.set_sign(Sign::Negative);
        }
        Ok(formatters
            .get(duration.unit)
            .format(count)
            .write_to_string()
            .into_owned())
    })
}

/// One ICU relative time formatter per [`TimeUnit`].
struct UnitFormatters {
    second: RelativeTimeFormatter,
    minute: RelativeTimeFormatter,
    hour: RelativeTimeFormatter,
    day: RelativeTimeFormatter,
}

impl UnitFormatters {
    fn new(locale: &Locale, options: RelativeTimeOptions) -> Result<Self, ResolveError> {
        Ok(Self {
            second: build_formatter(locale, options, TimeUnit::Second)?,
            minute: build_formatter(locale, options, TimeUnit::Minute)?,
            hour: build_formatter(locale, options, TimeUnit::Hour)?,
            day: build_formatter(locale, options, TimeUnit::Day)?,
        })
    }

    fn get(&self, unit: TimeUnit) -> &RelativeTimeFormatter {
        match unit {
            TimeUnit::Second => &self.second,
            TimeUnit::Minute => &self.minute,
            TimeUnit::Hour => &self.hour,
            TimeUnit::Day => &self.day,
        }
    }
}

fn duration_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(millis) => Some(*millis),
        Value::Float(millis) if millis.is_finite() => Some(millis.trunc() as i64),
        Value::Float(_) | Value::String(_) | Value::DateTime(_) => None,
    }
}

fn build_formatter(
    locale: &Locale,
    options: RelativeTimeOptions,
    unit: TimeUnit,
) -> Result<RelativeTimeFormatter, ResolveError> {
    let prefs = locale.to_icu().into();
    let mut icu_options = RelativeTimeFormatterOptions::default();
    icu_options.numeric = match options.numeric {
        RelativeNumeric::Always => Numeric::Always,
        RelativeNumeric::Auto => Numeric::Auto,
    };

    let formatter = match (options.width, unit) {
        (RelativeWidth::Long, TimeUnit::Second) => {
            RelativeTimeFormatter::try_new_long_second(prefs, icu_options)
        }
        (RelativeWidth::Long, TimeUnit::Minute) => {
            RelativeTimeFormatter::try_new_long_minute(prefs, icu_options)
        }
        (RelativeWidth::Long, TimeUnit::Hour) => {
            RelativeTimeFormatter::try_new_long_hour(prefs, icu_options)
        }
        (RelativeWidth::Long, TimeUnit::Day) => {
            RelativeTimeFormatter::try_new_long_day(prefs, icu_options)
        }
        (RelativeWidth::Short, TimeUnit::Second) => {
            RelativeTimeFormatter::try_new_short_second(prefs, icu_options)
        }
        (RelativeWidth::Short, TimeUnit::Minute) => {
            RelativeTimeFormatter::try_new_short_minute(prefs, icu_options)
        }
        (RelativeWidth::Short, TimeUnit::Hour) => {
            RelativeTimeFormatter::try_new_short_hour(prefs, icu_options)
        }
        (RelativeWidth::Short, TimeUnit::Day) => {
            RelativeTimeFormatter::try_new_short_day(prefs, icu_options)
        }
        (RelativeWidth::Narrow, TimeUnit::Second) => {
            RelativeTimeFormatter::try_new_narrow_second(prefs, icu_options)
        }
        (RelativeWidth::Narrow, TimeUnit::Minute) => {
            RelativeTimeFormatter::try_new_narrow_minute(prefs, icu_options)
        }
        (RelativeWidth::Narrow, TimeUnit::Hour) => {
            RelativeTimeFormatter::try_new_narrow_hour(prefs, icu_options)
        }
        (RelativeWidth::Narrow, TimeUnit::Day) => {
            RelativeTimeFormatter::try_new_narrow_day(prefs, icu_options)
        }
    };
    formatter.map_err(formatting_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = 1000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    fn unit(millis: i64) -> (u64, TimeUnit) {
        let duration = select_unit(millis);
        (duration.count, duration.unit)
    }

    #[test]
    fn select_unit_thresholds() {
        assert_eq!(unit(0), (0, TimeUnit::Second));
        assert_eq!(unit(999), (0, TimeUnit::Second));
        assert_eq!(unit(59 * SECOND), (59, TimeUnit::Second));
        assert_eq!(unit(60 * SECOND), (1, TimeUnit::Minute));
        assert_eq!(unit(59 * MINUTE + 59 * SECOND), (59, TimeUnit::Minute));
        assert_eq!(unit(HOUR), (1, TimeUnit::Hour));
        assert_eq!(unit(23 * HOUR), (23, TimeUnit::Hour));
        assert_eq!(unit(DAY), (1, TimeUnit::Day));
        assert_eq!(unit(400 * DAY), (400, TimeUnit::Day));
    }

    #[test]
    fn select_unit_keeps_sign() {
        assert_eq!(unit(-45 * SECOND), (45, TimeUnit::Second));
        assert!(select_unit(-45 * SECOND).past);
        assert_eq!(unit(-18 * HOUR), (18, TimeUnit::Hour));
        assert!(select_unit(-18 * HOUR).past);
        assert!(!select_unit(18 * HOUR).past);
        assert!(!select_unit(0).past);
    }

    #[test]
    fn select_unit_keeps_sign_when_truncated_to_zero() {
        assert_eq!(
            select_unit(-500),
            RelativeDuration {
                count: 0,
                unit: TimeUnit::Second,
                past: true
            }
        );
        assert_eq!(unit(-1500), (1, TimeUnit::Second));
    }

    #[test]
    fn select_unit_handles_extremes() {
        let duration = select_unit(i64::MIN);
        assert_eq!(duration.unit, TimeUnit::Day);
        assert!(duration.past);
        assert!(duration.count > 0);
        let duration = select_unit(i64::MAX);
        assert_eq!(duration.unit, TimeUnit::Day);
        assert!(!duration.past);
    }

    #[test]
    fn unit_formatters_cover_every_width() {
        let locale = Locale::new("en").unwrap();
        for width in [RelativeWidth::Long, RelativeWidth::Short, RelativeWidth::Narrow] {
            let options = RelativeTimeOptions::builder().width(width).build();
            assert!(UnitFormatters::new(&locale, options).is_ok());
        }
    }

    #[test]
    fn duration_accepts_numbers_only() {
        assert_eq!(duration_millis(&Value::Number(5)), Some(5));
        assert_eq!(duration_millis(&Value::Float(-1.9)), Some(-1));
        assert_eq!(duration_millis(&Value::Float(f64::NAN)), None);
        assert_eq!(duration_millis(&Value::from("5")), None);
    }
}

use bon::Builder;
use chrono::{DateTime, Datelike, Timelike, Utc};
use icu_calendar::{Date, Iso};
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets::enums::{DateAndTimeFieldSet, DateFieldSet, TimeFieldSet};
use icu_datetime::fieldsets::{T, YMD};
use icu_datetime::input::{DateTime as IcuDateTime, Time};
use icu_datetime::options::{Length, YearStyle};
use tracing::warn;

use super::{formatting_error, invalid_value};
use crate::resolver::{ResolveError, ResolvingContext};
use crate::types::{Formatter, Locale, Value, formatter_fn};

/// Length of a date or time rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Numeric, such as `02.01.06`.
    Short,
    /// Abbreviated names, such as `02.01.2006` or `Jan 2, 2006`.
    Medium,
    /// Full names, such as `2. Januar 2006`.
    Long,
}

impl From<Style> for Length {
    fn from(style: Style) -> Length {
        match style {
            Style::Short => Length::Short,
            Style::Medium => Length::Medium,
            Style::Long => Length::Long,
        }
    }
}

/// Which parts of a timestamp a date/time formatter renders.
///
/// With neither `date` nor `time` set a medium date is rendered.
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct DateTimeOptions {
    /// Style of the date part, if rendered.
    pub date: Option<Style>,

    /// Style of the time part, if rendered. Short times omit seconds.
    pub time: Option<Style>,

    /// Always render the year with all digits, even in short dates.
    #[builder(default)]
    pub full_year: bool,
}

/// Creates a formatter rendering timestamps for `locale`.
///
/// Accepts [`Value::DateTime`] and numbers of milliseconds since the Unix
/// epoch. Timestamps are rendered in UTC.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use locmsg::formatters::{DateTimeOptions, Style, date_time_formatter};
/// use locmsg::{Bundle, Locale, MessageResolver, ResolvingContext, args};
///
/// let locale = Locale::new("de-DE").unwrap();
/// let options = DateTimeOptions::builder().date(Style::Short).full_year(true).build();
/// let bundle = Bundle::new()
///     .with_formatter("date", date_time_formatter(&locale, options))
///     .with_message("due", "Fällig am {{0:date}}");
/// let resolver = MessageResolver::new(locale, bundle);
///
/// let due = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// let text = resolver.m("due", &args![due]).unwrap();
/// assert!(text.starts_with("Fällig am 02.01."));
/// assert!(text.ends_with("2006"));
/// ```
pub fn date_time_formatter(locale: &Locale, options: DateTimeOptions) -> Formatter {
    let formatter = FieldFormatter::new(locale, options);
    if let Err(error) = &formatter {
        warn!(locale = %locale, %error, "Date/time formatter unavailable");
    }

    formatter_fn(move |value: &Value, _ctx: &dyn ResolvingContext| {
        let formatter = formatter.as_ref().map_err(Clone::clone)?;
        let timestamp = value
            .as_date_time()
            .ok_or_else(|| invalid_value(value, "date"))?;
        formatter.format(timestamp)
    })
}

/// An ICU formatter for the field set the options select.
enum FieldFormatter {
    Date(DateTimeFormatter<DateFieldSet>),
    Time(DateTimeFormatter<TimeFieldSet>),
    DateTime(DateTimeFormatter<DateAndTimeFieldSet>),
}

impl FieldFormatter {
    fn new(locale: &Locale, options: DateTimeOptions) -> Result<Self, ResolveError> {
        let year_style = if options.full_year {
            YearStyle::Full
        } else {
            YearStyle::Auto
        };

        let formatter = match (options.date, options.time) {
            (Some(date), Some(time)) => {
                let ymd = YMD::for_length(date.into()).with_year_style(year_style);
                let ymdt = match time {
                    Style::Short => ymd.with_time_hm(),
                    Style::Medium | Style::Long => ymd.with_time_hms(),
                };
                Self::DateTime(
                    DateTimeFormatter::try_new(
                        locale.to_icu().into(),
                        DateAndTimeFieldSet::YMDT(ymdt),
                    )
                    .map_err(formatting_error)?,
                )
            }
            (None, Some(time)) => {
                let fields = match time {
                    Style::Short => T::hm(),
                    Style::Medium | Style::Long => T::hms(),
                };
                Self::Time(
                    DateTimeFormatter::try_new(
                        locale.to_icu().into(),
                        TimeFieldSet::T(fields.with_length(time.into())),
                    )
                    .map_err(formatting_error)?,
                )
            }
            (date, None) => {
                let ymd = YMD::for_length(date.unwrap_or(Style::Medium).into())
                    .with_year_style(year_style);
                Self::Date(
                    DateTimeFormatter::try_new(locale.to_icu().into(), DateFieldSet::YMD(ymd))
                        .map_err(formatting_error)?,
                )
            }
        };
        Ok(formatter)
    }

    fn format(&self, timestamp: DateTime<Utc>) -> Result<String, ResolveError> {
        let input = to_icu(timestamp)?;
        Ok(match self {
            Self::Date(formatter) => formatter.format(&input).to_string(),
            Self::Time(formatter) => formatter.format(&input).to_string(),
            Self::DateTime(formatter) => formatter.format(&input).to_string(),
        })
    }
}

fn to_icu(timestamp: DateTime<Utc>) -> Result<IcuDateTime<Iso>, ResolveError> {
    let date = Date::try_new_iso(
        timestamp.year(),
        narrow(timestamp.month())?,
        narrow(timestamp.day())?,
    )
    .map_err(formatting_error)?;
    let time = Time::try_new(
        narrow(timestamp.hour())?,
        narrow(timestamp.minute())?,
        narrow(timestamp.second())?,
        timestamp.nanosecond(),
    )
    .map_err(formatting_error)?;
    Ok(IcuDateTime { date, time })
}

fn narrow(field: u32) -> Result<u8, ResolveError> {
    u8::try_from(field).map_err(formatting_error)
}

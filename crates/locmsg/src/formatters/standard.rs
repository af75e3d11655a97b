use super::{
    DateTimeOptions, NumberOptions, RelativeTimeOptions, Style, date_time_formatter,
    number_formatter, relative_time_formatter,
};
use crate::resolver::{MessageResolver, ResolvingContext};

/// Registers the standard formatters for the resolver's locale.
///
/// | Name           | Renders                                          |
/// |----------------|--------------------------------------------------|
/// | `date`         | short date with the full year, `02.01.2006`      |
/// | `time`         | time with seconds, `15:04:05`                    |
/// | `datetime`     | short date and short time                        |
/// | `relativeTime` | millisecond durations, `in 45 Sekunden`          |
/// | `integer`      | numbers without fraction digits, `1.234.567`     |
///
/// Existing formatters with these names are replaced.
///
/// # Example
///
/// ```
/// use locmsg::formatters::register_standard_formatters;
/// use locmsg::{Bundle, Locale, MessageResolver, ResolvingContext, args};
///
/// let bundle = Bundle::new().with_message("eta", "Ankunft {{0:relativeTime}}");
/// let mut resolver = MessageResolver::new(Locale::new("de-DE").unwrap(), bundle);
/// register_standard_formatters(&mut resolver);
///
/// assert_eq!(resolver.m("eta", &args![45 * 1000]).unwrap(), "Ankunft in 45 Sekunden");
/// ```
pub fn register_standard_formatters(resolver: &mut MessageResolver) -> &mut MessageResolver {
    let locale = resolver.locale().clone();
    resolver
        .register_formatter(
            "date",
            date_time_formatter(
                &locale,
                DateTimeOptions::builder()
                    .date(Style::Short)
                    .full_year(true)
                    .build(),
            ),
        )
        .register_formatter(
            "time",
            date_time_formatter(&locale, DateTimeOptions::builder().time(Style::Medium).build()),
        )
        .register_formatter(
            "datetime",
            date_time_formatter(
                &locale,
                DateTimeOptions::builder()
                    .date(Style::Short)
                    .time(Style::Short)
                    .build(),
            ),
        )
        .register_formatter(
            "relativeTime",
            relative_time_formatter(&locale, RelativeTimeOptions::default()),
        )
        .register_formatter(
            "integer",
            number_formatter(&locale, NumberOptions::builder().max_fraction_digits(0).build()),
        )
}

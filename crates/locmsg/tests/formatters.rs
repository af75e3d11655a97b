//! Integration tests for the ICU-backed standard formatters.

use std::thread;

use chrono::{DateTime, TimeZone, Utc};
use locmsg::formatters::{
    DateTimeOptions, Grouping, NumberOptions, RelativeTimeOptions, RelativeWidth, Style,
    date_time_formatter, number_formatter, register_standard_formatters, relative_time_formatter,
};
use locmsg::{
    Bundle, ErrorReporting, Formatter, Locale, MessageResolver, ResolveError, ResolvingContext,
    args,
};

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

fn locale(tag: &str) -> Locale {
    Locale::new(tag).unwrap()
}

fn with_formatter(tag: &str, name: &str, formatter: Formatter) -> MessageResolver {
    MessageResolver::new(locale(tag), Bundle::new().with_formatter(name, formatter))
        .with_error_reporting(ErrorReporting::Exception)
}

fn standard(tag: &str) -> MessageResolver {
    let mut resolver = MessageResolver::new(locale(tag), Bundle::new())
        .with_error_reporting(ErrorReporting::Exception);
    register_standard_formatters(&mut resolver);
    resolver
}

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
}

// =========================================================================
// Date and time
// =========================================================================

#[test]
fn date_with_full_year() {
    let options = DateTimeOptions::builder()
        .date(Style::Short)
        .full_year(true)
        .build();
    let r = with_formatter("de-DE", "date", date_time_formatter(&locale("de-DE"), options));
    let text = r.m("$date", &args![reference_time()]).unwrap();
    assert!(text.contains("02.01."), "got {text}");
    assert!(text.contains("2006"), "got {text}");
}

#[test]
fn date_accepts_epoch_millis() {
    let options = DateTimeOptions::builder()
        .date(Style::Short)
        .full_year(true)
        .build();
    let r = with_formatter("de-DE", "date", date_time_formatter(&locale("de-DE"), options));
    let millis = reference_time().timestamp_millis();
    assert_eq!(
        r.m("$date", &args![millis]).unwrap(),
        r.m("$date", &args![reference_time()]).unwrap()
    );
}

#[test]
fn date_rejects_strings() {
    let r = with_formatter(
        "en",
        "date",
        date_time_formatter(&locale("en"), DateTimeOptions::default()),
    );
    assert_eq!(
        r.m("$date", &args!["yesterday"]).unwrap_err(),
        ResolveError::InvalidValue {
            value: "yesterday".to_string(),
            expected: "date"
        }
    );
}

#[test]
fn default_options_render_a_date() {
    let r = with_formatter(
        "en-US",
        "date",
        date_time_formatter(&locale("en-US"), DateTimeOptions::default()),
    );
    let text = r.m("$date", &args![reference_time()]).unwrap();
    assert!(text.contains("2006"), "got {text}");
}

#[test]
fn time_with_seconds() {
    let text = standard("de-DE").m("$time", &args![reference_time()]).unwrap();
    assert!(text.contains("15:04:05"), "got {text}");
}

#[test]
fn datetime_has_date_and_time() {
    let text = standard("de-DE")
        .m("$datetime", &args![reference_time()])
        .unwrap();
    assert!(text.contains("02.01."), "got {text}");
    assert!(text.contains("15:04"), "got {text}");
}

// =========================================================================
// Relative time
// =========================================================================

fn relative_de(millis: i64) -> String {
    standard("de-DE").m("$relativeTime", &args![millis]).unwrap()
}

#[test]
fn relative_seconds() {
    assert_eq!(relative_de(45 * SECOND), "in 45 Sekunden");
    assert_eq!(relative_de(-45 * SECOND), "vor 45 Sekunden");
}

#[test]
fn relative_past_below_one_second() {
    assert_eq!(relative_de(-500), "vor 0 Sekunden");
    assert_eq!(relative_de(500), "in 0 Sekunden");
    let text = standard("en").m("$relativeTime", &args![-500]).unwrap();
    assert_eq!(text, "0 seconds ago");
}

#[test]
fn relative_minutes() {
    assert_eq!(relative_de(45 * MINUTE), "in 45 Minuten");
    assert_eq!(relative_de(-45 * MINUTE), "vor 45 Minuten");
}

#[test]
fn relative_hours() {
    assert_eq!(relative_de(18 * HOUR), "in 18 Stunden");
    assert_eq!(relative_de(-18 * HOUR), "vor 18 Stunden");
}

#[test]
fn relative_days() {
    assert_eq!(relative_de(18 * DAY), "in 18 Tagen");
    assert_eq!(relative_de(-18 * DAY), "vor 18 Tagen");
}

#[test]
fn relative_time_in_english() {
    let text = standard("en").m("$relativeTime", &args![-3 * HOUR]).unwrap();
    assert_eq!(text, "3 hours ago");
}

#[test]
fn relative_time_short_width() {
    let options = RelativeTimeOptions::builder()
        .width(RelativeWidth::Short)
        .build();
    let r = with_formatter("en", "rel", relative_time_formatter(&locale("en"), options));
    let text = r.m("$rel", &args![2 * DAY]).unwrap();
    assert!(text.starts_with("in 2"), "got {text}");
}

#[test]
fn relative_time_rejects_dates() {
    let err = standard("en")
        .m("$relativeTime", &args![reference_time()])
        .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidValue { expected: "duration", .. }));
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn integer_groups_digits() {
    assert_eq!(standard("de").m("$integer", &args![1234567]).unwrap(), "1.234.567");
    assert_eq!(standard("en").m("$integer", &args![1234567]).unwrap(), "1,234,567");
}

#[test]
fn integer_drops_fraction_digits() {
    let text = standard("en").m("$integer", &args![1234.25]).unwrap();
    assert_eq!(text, "1,234");
}

#[test]
fn fraction_digits_are_padded() {
    let options = NumberOptions::builder()
        .min_fraction_digits(2)
        .max_fraction_digits(2)
        .build();
    let r = with_formatter("de", "price", number_formatter(&locale("de"), options));
    assert_eq!(r.m("$price", &args![3]).unwrap(), "3,00");
    assert_eq!(r.m("$price", &args!["12.5"]).unwrap(), "12,50");
}

#[test]
fn grouping_can_be_disabled() {
    let options = NumberOptions::builder().grouping(Grouping::Never).build();
    let r = with_formatter("en", "plain", number_formatter(&locale("en"), options));
    assert_eq!(r.m("$plain", &args![1234567]).unwrap(), "1234567");
}

#[test]
fn number_rejects_non_numeric_strings() {
    let err = standard("en").m("$integer", &args!["many"]).unwrap_err();
    assert_eq!(err.to_string(), "Cannot format many as number");
}

// =========================================================================
// Standard set in templates
// =========================================================================

#[test]
fn standard_formatters_in_templates() {
    let bundle = Bundle::new().with_message("report", "{{0:integer}} Besucher, zuletzt {{1:relativeTime}}");
    let mut resolver = MessageResolver::new(locale("de-DE"), bundle);
    register_standard_formatters(&mut resolver);
    assert_eq!(
        resolver.m("report", &args![12000, -45 * MINUTE]).unwrap(),
        "12.000 Besucher, zuletzt vor 45 Minuten"
    );
}

#[test]
fn register_returns_the_resolver() {
    let mut resolver = MessageResolver::new(locale("en"), Bundle::new());
    let names = ["date", "time", "datetime", "relativeTime", "integer"];
    let registered = register_standard_formatters(&mut resolver);
    for name in names {
        assert!(registered.bundle().formatter(name).is_some(), "missing {name}");
    }
}

#[test]
fn formatters_are_shared_across_threads() {
    let r = standard("de-DE");
    thread::scope(|scope| {
        let handles: Vec<_> = (1..=4_i64)
            .map(|days| {
                let r = &r;
                scope.spawn(move || r.m("$relativeTime", &args![-days * DAY]).unwrap())
            })
            .collect();
        let texts: Vec<String> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(texts[0], "vor 1 Tag");
        assert_eq!(texts[3], "vor 4 Tagen");
    });
}

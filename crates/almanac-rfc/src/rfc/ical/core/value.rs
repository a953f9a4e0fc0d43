//! Typed property values (RFC 5545 §3.3).

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{Datelike, NaiveDate};

use super::{DateTime, Duration, RRule, Time, UtcOffset, ValueType};
use crate::rfc::ical::build::escape_text;

/// DATE value (RFC 5545 §3.3.4).
///
/// Purely structural: `20260230` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts to a chrono date, or `None` if this is not a calendar date.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Creates a date from a chrono date.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "chrono bounds month and day below 32; iCalendar years are 0-9999"
    )]
    pub fn from_naive(value: NaiveDate) -> Self {
        Self::new(value.year() as u16, value.month() as u8, value.day() as u8)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// A DATE or a DATE-TIME, as accepted by `DTSTART`, `DUE`, `EXDATE` and
/// the `UNTIL` rule part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateOrDateTime {
    /// Date-only value.
    Date(Date),
    /// Date-time value.
    DateTime(DateTime),
}

impl DateOrDateTime {
    /// Returns the date part.
    #[must_use]
    pub const fn date(&self) -> Date {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date(),
        }
    }

    /// Returns true for date-only values.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns the date-time, if this is one.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Date(_) => None,
        }
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<Date> for DateOrDateTime {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for DateOrDateTime {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

/// PERIOD value (RFC 5545 §3.3.9).
///
/// A precise period of time, defined by either:
/// - An explicit start and end (both DATE-TIME)
/// - A start DATE-TIME and a DURATION
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    /// Explicit start and end times.
    Explicit {
        /// Start of the period.
        start: DateTime,
        /// End of the period.
        end: DateTime,
    },
    /// Start time and duration.
    Duration {
        /// Start of the period.
        start: DateTime,
        /// Duration of the period.
        duration: Duration,
    },
}

impl Period {
    /// Creates an explicit period from start to end.
    #[must_use]
    pub const fn explicit(start: DateTime, end: DateTime) -> Self {
        Self::Explicit { start, end }
    }

    /// Creates a period from a start time and duration.
    #[must_use]
    pub const fn from_duration(start: DateTime, duration: Duration) -> Self {
        Self::Duration { start, duration }
    }

    /// Returns the start of the period.
    #[must_use]
    pub const fn start(&self) -> &DateTime {
        match self {
            Self::Explicit { start, .. } | Self::Duration { start, .. } => start,
        }
    }

    /// Returns the explicit end, if the period has one.
    #[must_use]
    pub const fn end(&self) -> Option<&DateTime> {
        match self {
            Self::Explicit { end, .. } => Some(end),
            Self::Duration { .. } => None,
        }
    }

    /// Returns the duration, if the period is start-plus-duration.
    #[must_use]
    pub const fn duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration { duration, .. } => Some(duration),
            Self::Explicit { .. } => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Duration { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

/// GEO value (RFC 5545 §3.8.1.6).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Geo {
    /// Creates a new position.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{}",
            format_float(self.latitude),
            format_float(self.longitude)
        )
    }
}

/// Formats a FLOAT with the shortest representation that parses back to the
/// same number, always including a decimal point (`3` becomes `3.0`).
#[must_use]
pub fn format_float(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// A typed property value (RFC 5545 §3.3).
///
/// `Unknown` keeps the raw text when no codec applies or the codec rejected
/// the input, so nothing is lost on re-serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// BINARY value (decoded bytes).
    Binary(Vec<u8>),
    /// BOOLEAN value.
    Boolean(bool),
    /// CAL-ADDRESS value (typically mailto: URI).
    CalAddress(String),
    /// DATE value.
    Date(Date),
    /// DATE-TIME value.
    DateTime(DateTime),
    /// DURATION value.
    Duration(Duration),
    /// FLOAT value.
    Float(f64),
    /// GEO value.
    Geo(Geo),
    /// INTEGER value.
    Integer(i32),
    /// PERIOD value.
    Period(Period),
    /// RECUR value (recurrence rule).
    Recur(Box<RRule>),
    /// TEXT value (unescaped).
    Text(String),
    /// TIME value.
    Time(Time),
    /// URI value.
    Uri(String),
    /// UTC-OFFSET value.
    UtcOffset(UtcOffset),
    /// Raw value that no codec accepted.
    Unknown(String),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the value type tag, or `None` for `Unknown`.
    #[must_use]
    pub const fn value_type(&self) -> Option<ValueType> {
        Some(match self {
            Self::Binary(_) => ValueType::Binary,
            Self::Boolean(_) => ValueType::Boolean,
            Self::CalAddress(_) => ValueType::CalAddress,
            Self::Date(_) => ValueType::Date,
            Self::DateTime(_) => ValueType::DateTime,
            Self::Duration(_) => ValueType::Duration,
            Self::Float(_) => ValueType::Float,
            Self::Geo(_) => ValueType::Geo,
            Self::Integer(_) => ValueType::Integer,
            Self::Period(_) => ValueType::Period,
            Self::Recur(_) => ValueType::Recur,
            Self::Text(_) => ValueType::Text,
            Self::Time(_) => ValueType::Time,
            Self::Uri(_) => ValueType::Uri,
            Self::UtcOffset(_) => ValueType::UtcOffset,
            Self::Unknown(_) => return None,
        })
    }

    /// Serializes to the wire text of this value type.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the URI text of a URI or CAL-ADDRESS value.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) | Self::CalAddress(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns this value as a float, if it is a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns this value as a boolean, if it is a boolean value.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the decoded bytes of a binary value.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns this value as a date-time, if it is a date-time value.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns this value as a date, if it is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns a date or date-time value.
    #[must_use]
    pub fn as_date_or_datetime(&self) -> Option<DateOrDateTime> {
        match self {
            Self::Date(d) => Some(DateOrDateTime::Date(*d)),
            Self::DateTime(dt) => Some(DateOrDateTime::DateTime(dt.clone())),
            _ => None,
        }
    }

    /// Returns this value as a time, if it is a time value.
    #[must_use]
    pub const fn as_time(&self) -> Option<&Time> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Returns this value as a duration, if it is a duration value.
    #[must_use]
    pub const fn as_duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }

    /// Returns this value as a period, if it is a period value.
    #[must_use]
    pub const fn as_period(&self) -> Option<&Period> {
        match self {
            Self::Period(p) => Some(p),
            _ => None,
        }
    }

    /// Returns this value as a recurrence rule, if it is a recur value.
    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        match self {
            Self::Recur(r) => Some(r),
            _ => None,
        }
    }

    /// Returns this value as a UTC offset, if it is one.
    #[must_use]
    pub const fn as_utc_offset(&self) -> Option<UtcOffset> {
        match self {
            Self::UtcOffset(offset) => Some(*offset),
            _ => None,
        }
    }

    /// Returns this value as a position, if it is a geo value.
    #[must_use]
    pub const fn as_geo(&self) -> Option<Geo> {
        match self {
            Self::Geo(geo) => Some(*geo),
            _ => None,
        }
    }

    /// Returns whether this is an unknown/unparsed value.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(bytes) => write!(f, "{}", STANDARD.encode(bytes)),
            Self::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Self::CalAddress(s) | Self::Uri(s) | Self::Unknown(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Duration(d) => write!(f, "{d}"),
            Self::Float(n) => write!(f, "{}", format_float(*n)),
            Self::Geo(geo) => write!(f, "{geo}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Period(p) => write!(f, "{p}"),
            Self::Recur(r) => write!(f, "{r}"),
            Self::Text(s) => write!(f, "{}", escape_text(s)),
            Self::Time(t) => write!(f, "{t}"),
            Self::UtcOffset(offset) => write!(f, "{offset}"),
        }
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateOrDateTime> for Value {
    fn from(value: DateOrDateTime) -> Self {
        match value {
            DateOrDateTime::Date(d) => Self::Date(d),
            DateOrDateTime::DateTime(dt) => Self::DateTime(dt),
        }
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Period> for Value {
    fn from(value: Period) -> Self {
        Self::Period(value)
    }
}

impl From<RRule> for Value {
    fn from(value: RRule) -> Self {
        Self::Recur(Box::new(value))
    }
}

impl From<UtcOffset> for Value {
    fn from(value: UtcOffset) -> Self {
        Self::UtcOffset(value)
    }
}

impl From<Geo> for Value {
    fn from(value: Geo) -> Self {
        Self::Geo(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_display_pads() {
        assert_eq!(Date::new(1997, 1, 5).to_string(), "19970105");
        assert_eq!(Date::new(2026, 2, 30).to_string(), "20260230");
    }

    #[test]
    fn date_chrono_conversion() {
        let date = Date::new(2024, 2, 29);
        assert_eq!(Date::from_naive(date.to_naive().unwrap()), date);
        assert!(Date::new(2023, 2, 29).to_naive().is_none());
    }

    #[test]
    fn period_display() {
        let start = DateTime::utc(1997, 1, 1, 18, 0, 0);
        let explicit = Period::explicit(start.clone(), DateTime::utc(1997, 1, 2, 7, 0, 0));
        assert_eq!(explicit.to_string(), "19970101T180000Z/19970102T070000Z");
        assert_eq!(explicit.end().map(|dt| dt.day), Some(2));

        let relative = Period::from_duration(start, Duration::hours(5).with_minutes(30));
        assert_eq!(relative.to_string(), "19970101T180000Z/PT5H30M");
        assert!(relative.end().is_none());
    }

    #[test]
    fn float_format_always_has_point() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(37.386_013), "37.386013");
    }

    #[test]
    fn value_display_per_type() {
        assert_eq!(Value::Boolean(true).to_string(), "TRUE");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::text("a,b;c").to_string(), "a\\,b\\;c");
        assert_eq!(Value::Binary(b"hello".to_vec()).to_string(), "aGVsbG8=");
        assert_eq!(
            Value::Geo(Geo::new(37.386_013, -122.082_932)).to_string(),
            "37.386013;-122.082932"
        );
        assert_eq!(Value::Unknown("raw\\x".into()).to_string(), "raw\\x");
    }

    #[test]
    fn value_type_tags() {
        assert_eq!(Value::text("x").value_type(), Some(ValueType::Text));
        assert_eq!(
            Value::from(Date::new(2026, 1, 1)).value_type(),
            Some(ValueType::Date)
        );
        assert_eq!(Value::Unknown(String::new()).value_type(), None);
    }
}

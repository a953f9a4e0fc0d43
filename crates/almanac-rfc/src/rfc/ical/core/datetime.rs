//! iCalendar DATE-TIME, TIME and UTC-OFFSET value types (RFC 5545 §3.3.5, §3.3.12, §3.3.14).

use std::fmt;

use almanac_core::error::{CoreError, CoreResult};
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Utc};

use super::Date;

/// UTC offset representation (e.g., +0530, -0800, +013045).
///
/// Stored as total seconds from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Total seconds from UTC (positive = east, negative = west).
    seconds: i32,
}

impl UtcOffset {
    /// Creates a UTC offset from hours and minutes.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError::InvalidInput` if the offset is outside ±24:00 or
    /// `minutes` is not below 60.
    pub fn new(hours: i8, minutes: u8) -> CoreResult<Self> {
        if minutes >= 60 || hours.unsigned_abs() >= 24 {
            return Err(CoreError::InvalidInput(format!(
                "UTC offset {hours}:{minutes:02} out of range"
            )));
        }
        let magnitude = i32::from(hours.unsigned_abs()) * 3600 + i32::from(minutes) * 60;
        let seconds = if hours < 0 { -magnitude } else { magnitude };
        Ok(Self { seconds })
    }

    /// Creates a UTC offset from total seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }

    /// Returns true for offsets west of UTC.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Hours component of the magnitude.
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.seconds.unsigned_abs() / 3600
    }

    /// Minutes component of the magnitude.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        (self.seconds.unsigned_abs() % 3600) / 60
    }

    /// Seconds component of the magnitude.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.seconds.unsigned_abs() % 60
    }

    /// UTC offset (zero).
    pub const UTC: Self = Self { seconds: 0 };
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{sign}{:02}{:02}", self.hours(), self.minutes())?;
        if self.seconds() != 0 {
            write!(f, "{:02}", self.seconds())?;
        }
        Ok(())
    }
}

/// Time value (RFC 5545 §3.3.12).
///
/// A time of day with an optional UTC indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether this time is in UTC (indicated by 'Z' suffix).
    pub utc: bool,
}

impl Time {
    /// Creates a new time value.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            utc,
        }
    }

    /// Creates a UTC time.
    #[must_use]
    pub const fn utc(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(hour, minute, second, true)
    }

    /// Creates a local (non-UTC) time.
    #[must_use]
    pub const fn local(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(hour, minute, second, false)
    }

    /// Converts to a chrono time, or `None` if the fields are out of range.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// DATE-TIME value (RFC 5545 §3.3.5).
///
/// A floating, UTC or zoned point in time. A zoned value names its time zone
/// through `tzid`, which refers to a `VTIMEZONE` by its `TZID`. The text form
/// only records `utc`; `tzid` travels in the property's `TZID` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether the value carried a 'Z' suffix.
    pub utc: bool,
    /// Time zone identifier captured from the `TZID` parameter.
    pub tzid: Option<String>,
}

impl DateTime {
    /// Creates a floating DATE-TIME.
    #[must_use]
    pub const fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc: false,
            tzid: None,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub const fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc: true,
            tzid: None,
        }
    }

    /// Creates a zoned DATE-TIME.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "Constructor mirrors RFC 5545 DATE-TIME components plus TZID"
    )]
    pub fn zoned(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tzid: impl Into<String>,
    ) -> Self {
        Self::floating(year, month, day, hour, minute, second).with_tzid(tzid)
    }

    /// Returns this value bound to the given time zone.
    #[must_use]
    pub fn with_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.tzid = Some(tzid.into());
        self
    }

    /// Returns whether this is a UTC time.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.utc
    }

    /// Returns whether this is a floating time (neither UTC nor zoned).
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        !self.utc && self.tzid.is_none()
    }

    /// Returns the time zone identifier, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.tzid.as_deref()
    }

    /// Returns the date part.
    #[must_use]
    pub const fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    /// Returns the time-of-day part.
    #[must_use]
    pub const fn time(&self) -> Time {
        Time::new(self.hour, self.minute, self.second, self.utc)
    }

    /// Converts to a chrono wall-clock value, or `None` if the fields do not
    /// form a valid calendar date and time.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        Some(self.date().to_naive()?.and_time(self.time().to_naive()?))
    }

    /// Converts a UTC value to a chrono instant. Floating and zoned values
    /// need a time zone database and yield `None`.
    #[must_use]
    pub fn to_utc(&self) -> Option<chrono::DateTime<Utc>> {
        if !self.utc {
            return None;
        }
        Some(self.to_naive()?.and_utc())
    }

    /// Creates a floating value from a chrono wall-clock value.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "chrono bounds month, day and time fields below 61; iCalendar years are 0-9999"
    )]
    pub fn from_naive(value: &NaiveDateTime) -> Self {
        Self::floating(
            value.year() as u16,
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
    }

    /// Creates a UTC value from a chrono instant.
    #[must_use]
    pub fn from_utc(value: &chrono::DateTime<Utc>) -> Self {
        Self {
            utc: true,
            ..Self::from_naive(&value.naive_utc())
        }
    }

    /// The current instant in UTC, at second precision (for `DTSTAMP`).
    #[must_use]
    pub fn now_utc() -> Self {
        Self::from_utc(&Utc::now())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

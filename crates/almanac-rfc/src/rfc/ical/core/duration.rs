//! iCalendar DURATION value type (RFC 5545 §3.3.6).

use std::fmt;

/// DURATION value (RFC 5545 §3.3.6).
///
/// Either a week count (`P2W`) or a day/time group (`P1DT2H`). Units that
/// were not written stay `None`, so `PT0S` and `PT0H0M0S` remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Whether the duration is negative.
    pub negative: bool,
    /// Number of weeks (exclusive with the other units).
    pub weeks: Option<u32>,
    /// Number of days.
    pub days: Option<u32>,
    /// Number of hours.
    pub hours: Option<u32>,
    /// Number of minutes.
    pub minutes: Option<u32>,
    /// Number of seconds.
    pub seconds: Option<u32>,
}

const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_DAY: i64 = 86_400;

impl Duration {
    /// A duration of zero days (`P0D`).
    #[must_use]
    pub const fn zero() -> Self {
        Self::days(0)
    }

    /// Creates a duration of weeks.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            negative: false,
            weeks: Some(weeks),
            days: None,
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Creates a duration of days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            negative: false,
            weeks: None,
            days: Some(days),
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Creates a duration of hours.
    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self {
            negative: false,
            weeks: None,
            days: None,
            hours: Some(hours),
            minutes: None,
            seconds: None,
        }
    }

    /// Creates a duration of minutes.
    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self {
            negative: false,
            weeks: None,
            days: None,
            hours: None,
            minutes: Some(minutes),
            seconds: None,
        }
    }

    /// Creates a duration of seconds.
    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self {
            negative: false,
            weeks: None,
            days: None,
            hours: None,
            minutes: None,
            seconds: Some(seconds),
        }
    }

    /// Adds a day count, dropping any week count.
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.weeks = None;
        self.days = Some(days);
        self
    }

    /// Adds an hour count, dropping any week count.
    #[must_use]
    pub const fn with_hours(mut self, hours: u32) -> Self {
        self.weeks = None;
        self.hours = Some(hours);
        self
    }

    /// Adds a minute count, dropping any week count.
    #[must_use]
    pub const fn with_minutes(mut self, minutes: u32) -> Self {
        self.weeks = None;
        self.minutes = Some(minutes);
        self
    }

    /// Adds a second count, dropping any week count.
    #[must_use]
    pub const fn with_seconds(mut self, seconds: u32) -> Self {
        self.weeks = None;
        self.seconds = Some(seconds);
        self
    }

    /// Returns the negated duration.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Returns true if this is a week-based duration.
    #[must_use]
    pub const fn is_week_based(&self) -> bool {
        self.weeks.is_some()
    }

    const fn has_time_part(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// Total length in seconds, negative when `negative` is set.
    /// A week counts as seven days of 86400 seconds.
    #[must_use]
    pub fn to_seconds(self) -> i64 {
        let unit = |count: Option<u32>, scale: i64| count.map_or(0, |n| i64::from(n) * scale);
        let total = unit(self.weeks, SECONDS_PER_WEEK)
            + unit(self.days, SECONDS_PER_DAY)
            + unit(self.hours, 3600)
            + unit(self.minutes, 60)
            + unit(self.seconds, 1);
        if self.negative { -total } else { total }
    }

    /// Converts to a chrono time delta.
    #[must_use]
    pub fn to_chrono(self) -> chrono::TimeDelta {
        chrono::TimeDelta::seconds(self.to_seconds())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        let mut wrote_unit = false;
        if let Some(weeks) = self.weeks {
            write!(f, "{weeks}W")?;
            wrote_unit = true;
        }
        if let Some(days) = self.days {
            write!(f, "{days}D")?;
            wrote_unit = true;
        }
        if self.has_time_part() {
            write!(f, "T")?;
            if let Some(hours) = self.hours {
                write!(f, "{hours}H")?;
            }
            if let Some(minutes) = self.minutes {
                write!(f, "{minutes}M")?;
            }
            if let Some(seconds) = self.seconds {
                write!(f, "{seconds}S")?;
            }
            wrote_unit = true;
        }
        if !wrote_unit {
            write!(f, "0D")?;
        }
        Ok(())
    }
}

//! iCalendar RECUR value type (RFC 5545 §3.3.10, §3.8.5.3).
//!
//! Only the structured description is modelled; occurrences are never
//! expanded.

use std::fmt;

use almanac_core::error::{CoreError, CoreResult};

use super::{Date, DateOrDateTime, DateTime};

/// Recurrence frequency (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Self::Secondly,
            "MINUTELY" => Self::Minutely,
            "HOURLY" => Self::Hourly,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a two-letter code (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// A BYDAY entry: weekday with an optional occurrence number.
///
/// - `MO` - every Monday
/// - `1MO` - first Monday of the month/year
/// - `-1FR` - last Friday of the month/year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    /// Optional occurrence number.
    pub ordinal: Option<i8>,
    /// The day of the week.
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// Creates a weekday occurrence without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a weekday occurrence with an ordinal.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError::InvalidInput` if `ordinal` is 0 or outside -53..=53.
    pub fn nth(ordinal: i8, weekday: Weekday) -> CoreResult<Self> {
        if ordinal == 0 || !(-53..=53).contains(&ordinal) {
            return Err(CoreError::InvalidInput(format!(
                "BYDAY ordinal {ordinal} out of range"
            )));
        }
        Ok(Self {
            ordinal: Some(ordinal),
            weekday,
        })
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// Recurrence rule (RFC 5545 §3.3.10).
///
/// `UNTIL` and `COUNT` are both kept when a producer writes both; the
/// builder methods keep them exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RRule {
    /// Frequency of recurrence.
    pub freq: Frequency,
    /// End boundary.
    pub until: Option<DateOrDateTime>,
    /// Number of occurrences.
    pub count: Option<u32>,
    /// Interval between recurrences.
    pub interval: Option<u32>,
    /// Seconds (0-60).
    pub by_second: Vec<i32>,
    /// Minutes (0-59).
    pub by_minute: Vec<i32>,
    /// Hours (0-23).
    pub by_hour: Vec<i32>,
    /// Days of the week, optionally numbered.
    pub by_day: Vec<WeekdayNum>,
    /// Days of the month (-31..=31, excluding 0).
    pub by_monthday: Vec<i32>,
    /// Days of the year (-366..=366, excluding 0).
    pub by_yearday: Vec<i32>,
    /// Week numbers (-53..=53, excluding 0).
    pub by_weekno: Vec<i32>,
    /// Months (1-12).
    pub by_month: Vec<i32>,
    /// Positions within the recurrence set.
    pub by_setpos: Vec<i32>,
    /// Week start day.
    pub wkst: Option<Weekday>,
}

impl RRule {
    /// Creates a rule with the given frequency and nothing else.
    #[must_use]
    pub const fn new(freq: Frequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_monthday: Vec::new(),
            by_yearday: Vec::new(),
            by_weekno: Vec::new(),
            by_month: Vec::new(),
            by_setpos: Vec::new(),
            wkst: None,
        }
    }

    /// Creates a daily recurrence.
    #[must_use]
    pub const fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    /// Creates a weekly recurrence.
    #[must_use]
    pub const fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    /// Creates a monthly recurrence.
    #[must_use]
    pub const fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    /// Creates a yearly recurrence.
    #[must_use]
    pub const fn yearly() -> Self {
        Self::new(Frequency::Yearly)
    }

    /// Sets the interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the count (clears UNTIL).
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None;
        self
    }

    /// Sets UNTIL to a date (clears COUNT).
    #[must_use]
    pub fn with_until_date(mut self, date: Date) -> Self {
        self.until = Some(DateOrDateTime::Date(date));
        self.count = None;
        self
    }

    /// Sets UNTIL to a date-time (clears COUNT).
    #[must_use]
    pub fn with_until_datetime(mut self, datetime: DateTime) -> Self {
        self.until = Some(DateOrDateTime::DateTime(datetime));
        self.count = None;
        self
    }

    /// Sets BYDAY.
    #[must_use]
    pub fn with_by_day(mut self, days: Vec<WeekdayNum>) -> Self {
        self.by_day = days;
        self
    }

    /// Sets BYMONTHDAY.
    #[must_use]
    pub fn with_by_monthday(mut self, days: Vec<i32>) -> Self {
        self.by_monthday = days;
        self
    }

    /// Sets BYMONTH.
    #[must_use]
    pub fn with_by_month(mut self, months: Vec<i32>) -> Self {
        self.by_month = months;
        self
    }

    /// Sets BYSETPOS.
    #[must_use]
    pub fn with_by_setpos(mut self, positions: Vec<i32>) -> Self {
        self.by_setpos = positions;
        self
    }

    /// Sets WKST.
    #[must_use]
    pub const fn with_wkst(mut self, wkst: Weekday) -> Self {
        self.wkst = Some(wkst);
        self
    }
}

fn push_list<T: fmt::Display>(parts: &mut Vec<String>, key: &str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    parts.push(format!("{key}={}", joined.join(",")));
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec![format!("FREQ={}", self.freq)];

        if let Some(ref until) = self.until {
            parts.push(format!("UNTIL={until}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("COUNT={count}"));
        }
        if let Some(interval) = self.interval {
            parts.push(format!("INTERVAL={interval}"));
        }

        push_list(&mut parts, "BYSECOND", &self.by_second);
        push_list(&mut parts, "BYMINUTE", &self.by_minute);
        push_list(&mut parts, "BYHOUR", &self.by_hour);
        push_list(&mut parts, "BYDAY", &self.by_day);
        push_list(&mut parts, "BYMONTHDAY", &self.by_monthday);
        push_list(&mut parts, "BYYEARDAY", &self.by_yearday);
        push_list(&mut parts, "BYWEEKNO", &self.by_weekno);
        push_list(&mut parts, "BYMONTH", &self.by_month);
        push_list(&mut parts, "BYSETPOS", &self.by_setpos);

        if let Some(wkst) = self.wkst {
            parts.push(format!("WKST={wkst}"));
        }

        write!(f, "{}", parts.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rrule_display_basic() {
        let rrule = RRule::daily().with_count(10);
        assert_eq!(rrule.to_string(), "FREQ=DAILY;COUNT=10");
    }

    #[test]
    fn rrule_display_weekly_byday() {
        let rrule = RRule::weekly().with_by_day(vec![
            WeekdayNum::every(Weekday::Monday),
            WeekdayNum::every(Weekday::Wednesday),
            WeekdayNum::every(Weekday::Friday),
        ]);
        assert_eq!(rrule.to_string(), "FREQ=WEEKLY;BYDAY=MO,WE,FR");
    }

    #[test]
    fn rrule_display_canonical_order() {
        let rrule = RRule::monthly()
            .with_wkst(Weekday::Sunday)
            .with_by_setpos(vec![-1])
            .with_by_day(vec![WeekdayNum::nth(-1, Weekday::Monday).unwrap()])
            .with_interval(2)
            .with_until_date(Date::new(2026, 12, 31));
        assert_eq!(
            rrule.to_string(),
            "FREQ=MONTHLY;UNTIL=20261231;INTERVAL=2;BYDAY=-1MO;BYSETPOS=-1;WKST=SU"
        );
    }

    #[test]
    fn rrule_keeps_explicit_interval_of_one() {
        assert_eq!(
            RRule::yearly().with_interval(1).to_string(),
            "FREQ=YEARLY;INTERVAL=1"
        );
    }

    #[test]
    fn builders_keep_until_and_count_exclusive() {
        let rrule = RRule::daily()
            .with_count(5)
            .with_until_datetime(DateTime::utc(2026, 1, 1, 0, 0, 0));
        assert!(rrule.count.is_none());
        assert!(rrule.until.is_some());
    }

    #[test]
    fn weekday_num_nth_rejects_zero() {
        assert!(WeekdayNum::nth(0, Weekday::Monday).is_err());
        assert!(WeekdayNum::nth(54, Weekday::Monday).is_err());
        assert_eq!(
            WeekdayNum::nth(2, Weekday::Tuesday).unwrap().to_string(),
            "2TU"
        );
    }

    #[test]
    fn frequency_and_weekday_parse_ignore_case() {
        assert_eq!(Frequency::parse("monthly"), Some(Frequency::Monthly));
        assert_eq!(Frequency::parse("FORTNIGHTLY"), None);
        assert_eq!(Weekday::parse("th"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }
}

//! Value type parsers for iCalendar (RFC 5545 §3.3).
//!
//! Codecs report errors without position; the parser decides whether to
//! fall back to the raw text or abort.
#![expect(
    clippy::map_err_ignore,
    reason = "Standard library parse errors carry no detail beyond the kind reported here"
)]

use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{
    Date, DateOrDateTime, DateTime, Duration, Frequency, Geo, Parameter, Period, RRule, Time,
    UtcOffset, Value, ValueType, Weekday, WeekdayNum, param_names,
};

fn invalid(kind: ParseErrorKind, s: &str) -> ParseError {
    ParseError::value(kind).with_context(format!("{s:?}"))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an all-digit slice into a number.
fn number<T: FromStr>(s: &str, kind: ParseErrorKind) -> ParseResult<T> {
    if !all_digits(s) {
        return Err(invalid(kind, s));
    }
    s.parse().map_err(|_| invalid(kind, s))
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714"). Only the shape is checked, not
/// whether the day exists.
///
/// ## Errors
/// Returns an error if the string is not eight ASCII digits.
pub fn parse_date(s: &str) -> ParseResult<Date> {
    let s = s.trim();
    if s.len() != 8 || !all_digits(s) {
        return Err(invalid(ParseErrorKind::InvalidDate, s));
    }
    Ok(Date::new(
        number(&s[0..4], ParseErrorKind::InvalidDate)?,
        number(&s[4..6], ParseErrorKind::InvalidDate)?,
        number(&s[6..8], ParseErrorKind::InvalidDate)?,
    ))
}

/// Parses a TIME value (RFC 5545 §3.3.12).
///
/// Format: HHMMSS[Z] (e.g., "230000" or "070000Z")
///
/// ## Errors
/// Returns an error if the string is not six ASCII digits with an optional `Z`.
pub fn parse_time(s: &str) -> ParseResult<Time> {
    let s = s.trim();
    let (digits, utc) = match s.strip_suffix(['Z', 'z']) {
        Some(digits) => (digits, true),
        None => (s, false),
    };
    if digits.len() != 6 || !all_digits(digits) {
        return Err(invalid(ParseErrorKind::InvalidTime, s));
    }
    Ok(Time::new(
        number(&digits[0..2], ParseErrorKind::InvalidTime)?,
        number(&digits[2..4], ParseErrorKind::InvalidTime)?,
        number(&digits[4..6], ParseErrorKind::InvalidTime)?,
        utc,
    ))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDDTHHMMSS[Z]. `tzid` is the property's `TZID` parameter,
/// if any, and is captured on the value.
///
/// ## Errors
/// Returns an error if the date or time part is malformed.
pub fn parse_datetime(s: &str, tzid: Option<&str>) -> ParseResult<DateTime> {
    let s = s.trim();
    let Some((date_part, time_part)) = s.split_once(['T', 't']) else {
        return Err(invalid(ParseErrorKind::InvalidDateTime, s));
    };
    let date = parse_date(date_part).map_err(|_| invalid(ParseErrorKind::InvalidDateTime, s))?;
    let time = parse_time(time_part).map_err(|_| invalid(ParseErrorKind::InvalidDateTime, s))?;

    Ok(DateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: time.hour,
        minute: time.minute,
        second: time.second,
        utc: time.utc,
        tzid: tzid.map(str::to_string),
    })
}

/// Parses a UTC-OFFSET value (RFC 5545 §3.3.14).
///
/// Format: (+|-)HHMM[SS]; the sign is mandatory.
///
/// ## Errors
/// Returns an error if the sign is missing or the digits are malformed.
pub fn parse_utc_offset(s: &str) -> ParseResult<UtcOffset> {
    let s = s.trim();
    let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        return Err(invalid(ParseErrorKind::InvalidUtcOffset, s));
    };
    if !matches!(digits.len(), 4 | 6) || !all_digits(digits) {
        return Err(invalid(ParseErrorKind::InvalidUtcOffset, s));
    }

    let hours: i32 = number(&digits[0..2], ParseErrorKind::InvalidUtcOffset)?;
    let minutes: i32 = number(&digits[2..4], ParseErrorKind::InvalidUtcOffset)?;
    let seconds: i32 = match digits.get(4..6) {
        Some(ss) => number(ss, ParseErrorKind::InvalidUtcOffset)?,
        None => 0,
    };
    let total = hours * 3600 + minutes * 60 + seconds;
    Ok(UtcOffset::from_seconds(if negative { -total } else { total }))
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Formats: `[+|-]PnW` or `[+|-]P[nD][T[nH][nM][nS]]`. Units that are not
/// written stay `None`. The bare forms `P` and `PT` carry no unit and are
/// rejected; a zero length is written `P0D` or `PT0S`.
///
/// ## Errors
/// Returns an error if `P` is missing, no unit is present, a unit repeats,
/// a number has no unit, or weeks are combined with other units.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let s = s.trim();
    let (negative, rest) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };
    let Some(body) = rest.strip_prefix(['P', 'p']) else {
        return Err(invalid(ParseErrorKind::InvalidDuration, s));
    };

    let mut duration = Duration {
        negative,
        ..Duration::default()
    };

    let (date_part, time_part) = match body.split_once(['T', 't']) {
        Some((date_part, time_part)) => (date_part, Some(time_part)),
        None => (body, None),
    };

    for (n, unit) in duration_units(date_part, s)? {
        match unit {
            'W' => set_unit(&mut duration.weeks, n, s)?,
            'D' => set_unit(&mut duration.days, n, s)?,
            _ => return Err(invalid(ParseErrorKind::InvalidDuration, s)),
        }
    }

    if let Some(time_part) = time_part {
        if time_part.is_empty() {
            return Err(invalid(ParseErrorKind::InvalidDuration, s));
        }
        for (n, unit) in duration_units(time_part, s)? {
            match unit {
                'H' => set_unit(&mut duration.hours, n, s)?,
                'M' => set_unit(&mut duration.minutes, n, s)?,
                'S' => set_unit(&mut duration.seconds, n, s)?,
                _ => return Err(invalid(ParseErrorKind::InvalidDuration, s)),
            }
        }
    }

    let day_group = [
        duration.days,
        duration.hours,
        duration.minutes,
        duration.seconds,
    ];
    let has_day_group = day_group.iter().any(Option::is_some);
    if duration.weeks.is_some() && has_day_group {
        return Err(invalid(ParseErrorKind::InvalidDuration, s)
            .with_context("weeks cannot be combined with other units"));
    }
    if duration.weeks.is_none() && !has_day_group {
        return Err(invalid(ParseErrorKind::InvalidDuration, s));
    }

    Ok(duration)
}

/// Splits `12D3H`-style text into (number, uppercase unit) pairs.
fn duration_units(part: &str, whole: &str) -> ParseResult<Vec<(u32, char)>> {
    let mut units = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() {
            continue;
        }
        let digits = &part[start..i];
        let n = number(digits, ParseErrorKind::InvalidDuration)
            .map_err(|_| invalid(ParseErrorKind::InvalidDuration, whole))?;
        units.push((n, c.to_ascii_uppercase()));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err(invalid(ParseErrorKind::InvalidDuration, whole));
    }
    Ok(units)
}

fn set_unit(slot: &mut Option<u32>, n: u32, whole: &str) -> ParseResult<()> {
    if slot.replace(n).is_some() {
        return Err(invalid(ParseErrorKind::InvalidDuration, whole));
    }
    Ok(())
}

/// Parses a PERIOD value (RFC 5545 §3.3.9).
///
/// Formats: `start/end` or `start/duration`. The end is a duration iff it
/// begins with `P`, `+P` or `-P`.
///
/// ## Errors
/// Returns an error if the `/` is missing or either side is malformed.
pub fn parse_period(s: &str, tzid: Option<&str>) -> ParseResult<Period> {
    let s = s.trim();
    let Some((start, end)) = s.split_once('/') else {
        return Err(invalid(ParseErrorKind::InvalidPeriod, s));
    };
    let start = parse_datetime(start, tzid).map_err(|_| invalid(ParseErrorKind::InvalidPeriod, s))?;

    let end = end.trim();
    let unsigned = end.strip_prefix(['+', '-']).unwrap_or(end);
    if unsigned.starts_with(['P', 'p']) {
        let duration = parse_duration(end).map_err(|_| invalid(ParseErrorKind::InvalidPeriod, s))?;
        Ok(Period::from_duration(start, duration))
    } else {
        let end = parse_datetime(end, tzid).map_err(|_| invalid(ParseErrorKind::InvalidPeriod, s))?;
        Ok(Period::explicit(start, end))
    }
}

/// Parses a RECUR value (RFC 5545 §3.3.10).
///
/// Format: `FREQ=...;KEY=value;...` in any order. Unknown rule parts are
/// ignored.
///
/// ## Errors
/// Returns `InvalidFrequency` for an unknown `FREQ` value, and
/// `InvalidRRule` (or `InvalidWeekday`) if `FREQ` is missing or another
/// part is malformed.
pub fn parse_rrule(s: &str) -> ParseResult<RRule> {
    let s = s.trim();
    let mut parts = Vec::new();
    for part in s.split(';').filter(|p| !p.trim().is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            return Err(invalid(ParseErrorKind::InvalidRRule, s).with_context(part.to_string()));
        };
        parts.push((key.trim().to_ascii_uppercase(), value.trim()));
    }

    let Some(&(_, freq)) = parts.iter().find(|(key, _)| key == "FREQ") else {
        return Err(invalid(ParseErrorKind::InvalidRRule, s).with_context("missing FREQ"));
    };
    let freq = Frequency::parse(freq).ok_or_else(|| {
        ParseError::value(ParseErrorKind::InvalidFrequency).with_context(freq.to_string())
    })?;

    let mut rrule = RRule::new(freq);
    for (key, value) in parts {
        apply_rrule_part(&mut rrule, &key, value)?;
    }
    Ok(rrule)
}

fn apply_rrule_part(rrule: &mut RRule, key: &str, value: &str) -> ParseResult<()> {
    match key {
        "FREQ" => {}
        "UNTIL" => {
            rrule.until = Some(if value.contains(['T', 't']) {
                DateOrDateTime::DateTime(parse_datetime(value, None)?)
            } else {
                DateOrDateTime::Date(parse_date(value)?)
            });
        }
        "COUNT" => rrule.count = Some(number(value, ParseErrorKind::InvalidRRule)?),
        "INTERVAL" => rrule.interval = Some(number(value, ParseErrorKind::InvalidRRule)?),
        "BYSECOND" => rrule.by_second = parse_int_list(value)?,
        "BYMINUTE" => rrule.by_minute = parse_int_list(value)?,
        "BYHOUR" => rrule.by_hour = parse_int_list(value)?,
        "BYDAY" => {
            rrule.by_day = value
                .split(',')
                .map(parse_weekday_num)
                .collect::<ParseResult<_>>()?;
        }
        "BYMONTHDAY" => rrule.by_monthday = parse_int_list(value)?,
        "BYYEARDAY" => rrule.by_yearday = parse_int_list(value)?,
        "BYWEEKNO" => rrule.by_weekno = parse_int_list(value)?,
        "BYMONTH" => rrule.by_month = parse_int_list(value)?,
        "BYSETPOS" => rrule.by_setpos = parse_int_list(value)?,
        "WKST" => {
            rrule.wkst = Some(
                Weekday::parse(value)
                    .ok_or_else(|| invalid(ParseErrorKind::InvalidWeekday, value))?,
            );
        }
        _ => tracing::debug!(part = key, "Ignoring unknown RRULE part"),
    }
    Ok(())
}

fn parse_int_list(s: &str) -> ParseResult<Vec<i32>> {
    s.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse()
                .map_err(|_| invalid(ParseErrorKind::InvalidRRule, item))
        })
        .collect()
}

/// Parses a BYDAY entry: `[+|-][n]WEEKDAY`.
fn parse_weekday_num(s: &str) -> ParseResult<WeekdayNum> {
    let s = s.trim();
    if s.len() < 2 || !s.is_ascii() {
        return Err(invalid(ParseErrorKind::InvalidWeekday, s));
    }

    let (ordinal_str, weekday_str) = s.split_at(s.len() - 2);
    let weekday =
        Weekday::parse(weekday_str).ok_or_else(|| invalid(ParseErrorKind::InvalidWeekday, s))?;

    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        Some(
            ordinal_str
                .parse()
                .map_err(|_| invalid(ParseErrorKind::InvalidRRule, s))?,
        )
    };

    Ok(WeekdayNum { ordinal, weekday })
}

/// Unescapes text values (RFC 5545 §3.3.11).
///
/// Escape sequences: `\\` `\,` `\;` `\n` `\N`. Any other backslash sequence
/// is kept as written, as is a trailing backslash.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Parses a BOOLEAN value (RFC 5545 §3.3.2). Anything but `TRUE` is false.
#[must_use]
pub fn parse_boolean(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("TRUE")
}

/// Parses an INTEGER value (RFC 5545 §3.3.8).
///
/// A fractional literal such as `2.7` is truncated toward zero.
///
/// ## Errors
/// Returns an error if the string is not a number or does not fit in `i32`.
pub fn parse_integer(s: &str) -> ParseResult<i32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i32>() {
        return Ok(n);
    }
    let truncated = s
        .parse::<f64>()
        .map_err(|_| invalid(ParseErrorKind::InvalidInteger, s))?
        .trunc();
    if !truncated.is_finite() || truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX)
    {
        return Err(invalid(ParseErrorKind::InvalidInteger, s));
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Range checked against i32 bounds above"
    )]
    let n = truncated as i32;
    Ok(n)
}

/// Parses a FLOAT value (RFC 5545 §3.3.7).
///
/// ## Errors
/// Returns an error if the string is not a valid float.
pub fn parse_float(s: &str) -> ParseResult<f64> {
    let s = s.trim();
    s.parse().map_err(|_| invalid(ParseErrorKind::InvalidFloat, s))
}

/// Decodes a BINARY value (RFC 5545 §3.3.1) from standard base64.
///
/// ## Errors
/// Returns an error if the text is not valid base64.
pub fn parse_binary(s: &str) -> ParseResult<Vec<u8>> {
    STANDARD
        .decode(s.trim())
        .map_err(|_| invalid(ParseErrorKind::InvalidBinary, s))
}

/// Parses a GEO value (RFC 5545 §3.8.1.6): `latitude;longitude`.
///
/// ## Errors
/// Returns an error if the separator is missing or either side is not a float.
pub fn parse_geo(s: &str) -> ParseResult<Geo> {
    let Some((lat, lon)) = s.split_once(';') else {
        return Err(invalid(ParseErrorKind::InvalidGeo, s));
    };
    let latitude = parse_float(lat).map_err(|_| invalid(ParseErrorKind::InvalidGeo, s))?;
    let longitude = parse_float(lon).map_err(|_| invalid(ParseErrorKind::InvalidGeo, s))?;
    Ok(Geo::new(latitude, longitude))
}

/// Splits the raw value of a multi-valued property into items.
///
/// TEXT lists split on commas that are not escaped; other types split on
/// every comma.
#[must_use]
pub fn split_multi_value(raw: &str, value_type: ValueType) -> Vec<&str> {
    if value_type != ValueType::Text {
        return raw.split(',').collect();
    }

    let mut items = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ',' => {
                items.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&raw[start..]);
    items
}

/// Parses a raw value with the codec for `value_type`.
///
/// ## Errors
/// Returns the codec's error if `raw` does not match the type's grammar.
pub fn parse_value(raw: &str, value_type: ValueType, params: &[Parameter]) -> ParseResult<Value> {
    let tzid = params
        .iter()
        .find(|p| p.name == param_names::TZID)
        .and_then(Parameter::value);

    Ok(match value_type {
        ValueType::Binary => Value::Binary(parse_binary(raw)?),
        ValueType::Boolean => Value::Boolean(parse_boolean(raw)),
        ValueType::CalAddress => Value::CalAddress(raw.trim().to_string()),
        ValueType::Date => Value::Date(parse_date(raw)?),
        ValueType::DateTime => Value::DateTime(parse_datetime(raw, tzid)?),
        ValueType::Duration => Value::Duration(parse_duration(raw)?),
        ValueType::Float => Value::Float(parse_float(raw)?),
        ValueType::Geo => Value::Geo(parse_geo(raw)?),
        ValueType::Integer => Value::Integer(parse_integer(raw)?),
        ValueType::Period => Value::Period(parse_period(raw, tzid)?),
        ValueType::Recur => Value::Recur(Box::new(parse_rrule(raw)?)),
        ValueType::Text => Value::Text(unescape_text(raw)),
        ValueType::Time => Value::Time(parse_time(raw)?),
        ValueType::Uri => Value::Uri(raw.trim().to_string()),
        ValueType::UtcOffset => Value::UtcOffset(parse_utc_offset(raw)?),
    })
}

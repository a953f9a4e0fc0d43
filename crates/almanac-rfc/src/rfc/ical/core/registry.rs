//! Property value-type registry (RFC 5545 §3.7-3.8, RFC 7986 §5).
//!
//! Maps property names to their default value type, the alternate types a
//! `VALUE` parameter may select, and whether the value is a comma-separated
//! list.

use std::fmt;

use super::{Parameter, Value};
use crate::rfc::ical::core::parameter::names;
use crate::rfc::ical::parse::{ParseResult, parse_value};

/// Value data types (RFC 5545 §3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Binary,
    Boolean,
    CalAddress,
    Date,
    DateTime,
    Duration,
    Float,
    /// Structured `lat;long` pair of the GEO property. Not selectable via `VALUE`.
    Geo,
    Integer,
    Period,
    Recur,
    Text,
    Time,
    Uri,
    UtcOffset,
}

impl ValueType {
    /// Returns the `VALUE` parameter spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::CalAddress => "CAL-ADDRESS",
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Float => "FLOAT",
            Self::Geo => "GEO",
            Self::Integer => "INTEGER",
            Self::Period => "PERIOD",
            Self::Recur => "RECUR",
            Self::Text => "TEXT",
            Self::Time => "TIME",
            Self::Uri => "URI",
            Self::UtcOffset => "UTC-OFFSET",
        }
    }

    /// Parses a `VALUE` parameter (case-insensitive). Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim().to_ascii_uppercase().as_str() {
            "BINARY" => Self::Binary,
            "BOOLEAN" => Self::Boolean,
            "CAL-ADDRESS" => Self::CalAddress,
            "DATE" => Self::Date,
            "DATE-TIME" => Self::DateTime,
            "DURATION" => Self::Duration,
            "FLOAT" => Self::Float,
            "INTEGER" => Self::Integer,
            "PERIOD" => Self::Period,
            "RECUR" => Self::Recur,
            "TEXT" => Self::Text,
            "TIME" => Self::Time,
            "URI" => Self::Uri,
            "UTC-OFFSET" => Self::UtcOffset,
            _ => return None,
        })
    }

    /// Parses a raw (still escaped) value with this type's codec.
    ///
    /// `params` supplies context such as `TZID` for DATE-TIME values.
    ///
    /// ## Errors
    ///
    /// Returns the codec's error if `raw` does not match the type's grammar.
    pub fn parse(self, raw: &str, params: &[Parameter]) -> ParseResult<Value> {
        parse_value(raw, self, params)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry entry for a known property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Type used when no `VALUE` parameter is present.
    pub default: ValueType,
    /// Other types a `VALUE` parameter may select.
    pub alternates: &'static [ValueType],
    /// Whether the value is a comma-separated list.
    pub multi_valued: bool,
}

impl PropertySpec {
    const fn single(default: ValueType) -> Self {
        Self {
            default,
            alternates: &[],
            multi_valued: false,
        }
    }

    const fn with_alternates(mut self, alternates: &'static [ValueType]) -> Self {
        self.alternates = alternates;
        self
    }

    const fn multi(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Returns true if `value_type` is the default or an alternate.
    #[must_use]
    pub fn allows(&self, value_type: ValueType) -> bool {
        self.default == value_type || self.alternates.contains(&value_type)
    }
}

const DATE_ALT: &[ValueType] = &[ValueType::Date];
const RDATE_ALT: &[ValueType] = &[ValueType::Date, ValueType::Period];
const BINARY_ALT: &[ValueType] = &[ValueType::Binary];
const TRIGGER_ALT: &[ValueType] = &[ValueType::DateTime];

/// Looks up a property by name (case-insensitive).
///
/// Returns `None` for `X-` and other unregistered properties.
#[must_use]
pub fn lookup(name: &str) -> Option<PropertySpec> {
    use ValueType::{CalAddress, DateTime, Duration, Geo, Integer, Period, Recur, Text, Uri, UtcOffset};

    let entry = match name.to_ascii_uppercase().as_str() {
        // Calendar properties (§3.7)
        "CALSCALE" | "METHOD" | "PRODID" | "VERSION" => PropertySpec::single(Text),
        // Descriptive (§3.8.1)
        "ATTACH" => PropertySpec::single(Uri).with_alternates(BINARY_ALT),
        "CATEGORIES" | "RESOURCES" => PropertySpec::single(Text).multi(),
        "CLASS" | "COMMENT" | "DESCRIPTION" | "LOCATION" | "STATUS" | "SUMMARY" => {
            PropertySpec::single(Text)
        }
        "GEO" => PropertySpec::single(Geo),
        "PERCENT-COMPLETE" | "PRIORITY" => PropertySpec::single(Integer),
        // Date and time (§3.8.2)
        "COMPLETED" => PropertySpec::single(DateTime),
        "DTEND" | "DUE" | "DTSTART" => PropertySpec::single(DateTime).with_alternates(DATE_ALT),
        "DURATION" => PropertySpec::single(Duration),
        "FREEBUSY" => PropertySpec::single(Period).multi(),
        "TRANSP" => PropertySpec::single(Text),
        // Time zone (§3.8.3)
        "TZID" | "TZNAME" => PropertySpec::single(Text),
        "TZOFFSETFROM" | "TZOFFSETTO" => PropertySpec::single(UtcOffset),
        "TZURL" => PropertySpec::single(Uri),
        // Relationship (§3.8.4)
        "ATTENDEE" | "ORGANIZER" => PropertySpec::single(CalAddress),
        "CONTACT" | "RELATED-TO" | "UID" => PropertySpec::single(Text),
        "RECURRENCE-ID" => PropertySpec::single(DateTime).with_alternates(DATE_ALT),
        "URL" => PropertySpec::single(Uri),
        // Recurrence (§3.8.5)
        "EXDATE" => PropertySpec::single(DateTime)
            .with_alternates(DATE_ALT)
            .multi(),
        "RDATE" => PropertySpec::single(DateTime)
            .with_alternates(RDATE_ALT)
            .multi(),
        "RRULE" => PropertySpec::single(Recur),
        // Alarm (§3.8.6)
        "ACTION" => PropertySpec::single(Text),
        "REPEAT" => PropertySpec::single(Integer),
        "TRIGGER" => PropertySpec::single(Duration).with_alternates(TRIGGER_ALT),
        // Change management (§3.8.7)
        "CREATED" | "DTSTAMP" | "LAST-MODIFIED" => PropertySpec::single(DateTime),
        "SEQUENCE" => PropertySpec::single(Integer),
        // Miscellaneous (§3.8.8)
        "REQUEST-STATUS" => PropertySpec::single(Text),
        // RFC 7986
        "COLOR" | "NAME" => PropertySpec::single(Text),
        "CONFERENCE" | "SOURCE" => PropertySpec::single(Uri),
        "IMAGE" => PropertySpec::single(Uri).with_alternates(BINARY_ALT),
        "REFRESH-INTERVAL" => PropertySpec::single(Duration),
        _ => return None,
    };
    Some(entry)
}

/// Resolves the effective value type of a property.
///
/// The `VALUE` parameter wins, then the registry default, then TEXT.
/// Returns `None` when `VALUE` names a type this codec does not know.
#[must_use]
pub fn resolve_value_type(name: &str, params: &[Parameter]) -> Option<ValueType> {
    if let Some(explicit) = params
        .iter()
        .find(|p| p.name == names::VALUE)
        .and_then(Parameter::value)
    {
        return ValueType::from_name(explicit);
    }
    Some(default_value_type(name))
}

/// Registry default for `name`, TEXT for unregistered properties.
#[must_use]
pub fn default_value_type(name: &str) -> ValueType {
    lookup(name).map_or(ValueType::Text, |entry| entry.default)
}

/// Returns true if the property's value is a comma-separated list.
#[must_use]
pub fn is_multi_valued(name: &str) -> bool {
    lookup(name).is_some_and(|entry| entry.multi_valued)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_property_defaults() {
        assert_eq!(default_value_type("DTSTART"), ValueType::DateTime);
        assert_eq!(default_value_type("dtstamp"), ValueType::DateTime);
        assert_eq!(default_value_type("RRULE"), ValueType::Recur);
        assert_eq!(default_value_type("TZOFFSETTO"), ValueType::UtcOffset);
        assert_eq!(default_value_type("GEO"), ValueType::Geo);
        assert_eq!(default_value_type("ATTENDEE"), ValueType::CalAddress);
        assert_eq!(default_value_type("REFRESH-INTERVAL"), ValueType::Duration);
    }

    #[test]
    fn unknown_property_is_text() {
        assert!(lookup("X-WR-CALNAME").is_none());
        assert_eq!(default_value_type("X-WR-CALNAME"), ValueType::Text);
        assert_eq!(default_value_type("FOO"), ValueType::Text);
    }

    #[test]
    fn value_parameter_overrides_default() {
        let params = vec![Parameter::value_type("date")];
        assert_eq!(resolve_value_type("DTSTART", &params), Some(ValueType::Date));
        assert_eq!(resolve_value_type("DTSTART", &[]), Some(ValueType::DateTime));
    }

    #[test]
    fn unknown_value_parameter_resolves_to_none() {
        let params = vec![Parameter::value_type("X-CUSTOM")];
        assert_eq!(resolve_value_type("DESCRIPTION", &params), None);
    }

    #[test]
    fn multi_valued_properties() {
        for name in ["CATEGORIES", "RESOURCES", "EXDATE", "RDATE", "FREEBUSY"] {
            assert!(is_multi_valued(name), "{name} should be multi-valued");
        }
        assert!(!is_multi_valued("SUMMARY"));
        assert!(!is_multi_valued("X-LIST"));
    }

    #[test]
    fn alternates_are_allowed() {
        let rdate = lookup("RDATE").unwrap();
        assert!(rdate.allows(ValueType::Period));
        assert!(rdate.allows(ValueType::Date));
        assert!(!rdate.allows(ValueType::Text));
    }

    #[test]
    fn value_type_names_round_trip() {
        for vt in [
            ValueType::Binary,
            ValueType::CalAddress,
            ValueType::DateTime,
            ValueType::UtcOffset,
        ] {
            assert_eq!(ValueType::from_name(vt.as_str()), Some(vt));
        }
        assert_eq!(ValueType::from_name("GEO"), None);
    }
}

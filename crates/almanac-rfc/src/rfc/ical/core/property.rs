//! iCalendar property and content line types (RFC 5545 §3.1, §3.8).

use std::fmt;

use super::registry::default_value_type;
use super::{Date, DateTime, Duration, Parameter, Value, ValueType};
use crate::rfc::ical::core::parameter::names as param_names;

/// A raw content line as produced by the tokenizer.
///
/// This is the low-level representation before value type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a new content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Gets a parameter by name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Gets the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).and_then(Parameter::value)
    }
}

/// Unfolded wire form: `NAME;PARAM=value:raw`.
impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.params {
            write!(f, ";{param}")?;
        }
        write!(f, ":{}", self.raw_value)
    }
}

/// Value of a property: one value, or a comma-separated list for
/// multi-valued properties such as `CATEGORIES` or `EXDATE`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single value.
    Single(Value),
    /// Values of a multi-valued property, in order.
    List(Vec<Value>),
}

impl PropertyValue {
    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.values().first()
    }

    /// Returns all values as a slice.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    /// Returns true for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Type tag of the first value.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.first().and_then(Value::value_type)
    }

    /// Time zone referenced by the first date-time (or period start).
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self.first()? {
            Value::DateTime(dt) => dt.tzid(),
            Value::Period(period) => period.start().tzid(),
            _ => None,
        }
    }

    /// Serializes the value(s), joining list items with commas.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value}"),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Value>> for PropertyValue {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

/// A typed iCalendar property.
///
/// Properties are values: components store them and hand out shared
/// references only.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Typed value.
    pub value: PropertyValue,
}

impl Property {
    /// Creates a property from a typed value.
    ///
    /// Adds `VALUE=<type>` when the value's type differs from the registry
    /// default for `name`, and `TZID=<id>` when the value is a zoned
    /// date-time, so that parsing the serialized form yields the same value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let name = name.into().to_ascii_uppercase();
        let value = value.into();

        let mut params = Vec::new();
        if let Some(value_type) = value.value_type()
            && value_type != ValueType::Geo
            && value_type != default_value_type(&name)
        {
            params.push(Parameter::value_type(value_type.as_str()));
        }
        if let Some(tzid) = value.tzid() {
            params.push(Parameter::tzid(tzid));
        }

        Self {
            name,
            params,
            value,
        }
    }

    /// Creates a multi-valued property.
    #[must_use]
    pub fn list(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(name, PropertyValue::List(values))
    }

    /// Creates a text property.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Value::Text(value.into()))
    }

    /// Creates an integer property.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, Value::Integer(value))
    }

    /// Creates a date-time property.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        Self::new(name, Value::DateTime(dt))
    }

    /// Creates a date property.
    #[must_use]
    pub fn date(name: impl Into<String>, d: Date) -> Self {
        Self::new(name, Value::Date(d))
    }

    /// Creates a duration property.
    #[must_use]
    pub fn duration(name: impl Into<String>, d: Duration) -> Self {
        Self::new(name, Value::Duration(d))
    }

    /// Creates a calendar-address property (e.g., `ATTENDEE`).
    #[must_use]
    pub fn cal_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, Value::CalAddress(address.into()))
    }

    /// Returns this property with `param` set, replacing any parameter of
    /// the same name.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.set_param(param);
        self
    }

    /// Sets a parameter, replacing any existing one with the same name.
    pub fn set_param(&mut self, param: Parameter) {
        if let Some(existing) = self.params.iter_mut().find(|p| p.name == param.name) {
            *existing = param;
        } else {
            self.params.push(param);
        }
    }

    /// Gets a parameter by name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Gets the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).and_then(Parameter::value)
    }

    /// The `TZID` parameter, if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(param_names::TZID)
    }

    /// Returns the first value.
    #[must_use]
    pub fn first_value(&self) -> Option<&Value> {
        self.value.first()
    }

    /// Returns all values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        self.value.values()
    }

    /// Returns the value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.first_value().and_then(Value::as_text)
    }

    /// Returns the value as an integer, if it is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        self.first_value().and_then(Value::as_integer)
    }

    /// Returns the value as a date-time, if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        self.first_value().and_then(Value::as_datetime)
    }

    /// Returns the value as a date, if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        self.first_value().and_then(Value::as_date)
    }

    /// Returns the value as a duration, if it is a duration value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        self.first_value().and_then(Value::as_duration)
    }
}

/// Property names used by this crate.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const CLASS: &str = "CLASS";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const GEO: &str = "GEO";
    pub const LOCATION: &str = "LOCATION";
    pub const PERCENT_COMPLETE: &str = "PERCENT-COMPLETE";
    pub const PRIORITY: &str = "PRIORITY";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time
    pub const COMPLETED: &str = "COMPLETED";
    pub const DTEND: &str = "DTEND";
    pub const DUE: &str = "DUE";
    pub const DTSTART: &str = "DTSTART";
    pub const DURATION: &str = "DURATION";
    pub const FREEBUSY: &str = "FREEBUSY";
    pub const TRANSP: &str = "TRANSP";

    // Time zone
    pub const TZID: &str = "TZID";
    pub const TZNAME: &str = "TZNAME";
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    pub const TZOFFSETTO: &str = "TZOFFSETTO";
    pub const TZURL: &str = "TZURL";

    // Relationship
    pub const ATTENDEE: &str = "ATTENDEE";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const RECURRENCE_ID: &str = "RECURRENCE-ID";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";

    // Recurrence
    pub const EXDATE: &str = "EXDATE";
    pub const RDATE: &str = "RDATE";
    pub const RRULE: &str = "RRULE";

    // Alarm
    pub const ACTION: &str = "ACTION";
    pub const REPEAT: &str = "REPEAT";
    pub const TRIGGER: &str = "TRIGGER";

    // Change management
    pub const CREATED: &str = "CREATED";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";
    pub const SEQUENCE: &str = "SEQUENCE";
}

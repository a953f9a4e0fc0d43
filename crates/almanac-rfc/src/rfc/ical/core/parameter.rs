//! Property parameters (RFC 5545 §3.2).

use std::fmt;

use crate::rfc::ical::build::escape_param_value;

/// Value of a property parameter.
///
/// Most parameters carry a single value. Parameters such as `MEMBER` or
/// `DELEGATED-TO` may carry a comma-separated list, which is kept as a list
/// so that `MEMBER="a","b"` is distinguishable from `MEMBER="a,b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value.
    Single(String),
    /// Two or more values that were separated by commas.
    List(Vec<String>),
}

impl ParamValue {
    /// Builds a value from its comma-separated parts. One part yields `Single`.
    #[must_use]
    pub fn from_values(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            Self::Single(values.remove(0))
        } else {
            Self::List(values)
        }
    }

    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(values) => values.first().map(String::as_str),
        }
    }

    /// Returns every value as a slice.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    /// Returns true if this value was written as a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Joins the values with commas, as they appear on the wire before quoting.
    #[must_use]
    pub fn joined(&self) -> String {
        self.values().join(",")
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

/// A single property parameter.
///
/// For `DTSTART;TZID=America/New_York:20260123T120000` the parameter has
/// name `TZID` and value `America/New_York`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value.
    pub value: ParamValue,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: ParamValue::Single(value.into()),
        }
    }

    /// Creates a new parameter from one or more values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: ParamValue::from_values(values),
        }
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.first()
    }

    /// Returns whether any value matches (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.value
            .values()
            .iter()
            .any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(tzid: impl Into<String>) -> Self {
        Self::new(names::TZID, tzid)
    }

    /// Creates a VALUE parameter.
    #[must_use]
    pub fn value_type(value_type: impl Into<String>) -> Self {
        Self::new(names::VALUE, value_type)
    }

    /// Creates a CN (common name) parameter.
    #[must_use]
    pub fn cn(name: impl Into<String>) -> Self {
        Self::new(names::CN, name)
    }

    /// Creates a PARTSTAT (participation status) parameter.
    #[must_use]
    pub fn partstat(status: impl Into<String>) -> Self {
        Self::new(names::PARTSTAT, status)
    }

    /// Creates a ROLE parameter.
    #[must_use]
    pub fn role(role: impl Into<String>) -> Self {
        Self::new(names::ROLE, role)
    }

    /// Creates an RSVP parameter.
    #[must_use]
    pub fn rsvp(rsvp: bool) -> Self {
        Self::new(names::RSVP, if rsvp { "TRUE" } else { "FALSE" })
    }

    /// Creates an FBTYPE (free/busy type) parameter.
    #[must_use]
    pub fn fbtype(fbtype: impl Into<String>) -> Self {
        Self::new(names::FBTYPE, fbtype)
    }

    /// Creates a RELATED parameter (for triggers).
    #[must_use]
    pub fn related(related: TriggerRelated) -> Self {
        Self::new(names::RELATED, related.as_str())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.name,
            escape_param_value(&self.value.joined())
        )
    }
}

/// RELATED parameter values for TRIGGER (RFC 5545 §3.2.14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerRelated {
    /// Relative to component start (default).
    #[default]
    Start,
    /// Relative to component end.
    End,
}

impl TriggerRelated {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::End => "END",
        }
    }

    /// Parses a RELATED value. Anything other than `END` means start.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("END") {
            Self::End
        } else {
            Self::Start
        }
    }
}

impl fmt::Display for TriggerRelated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter names used by this crate.
pub mod names {
    /// Common name.
    pub const CN: &str = "CN";
    /// Free/busy time type.
    pub const FBTYPE: &str = "FBTYPE";
    /// Participation status.
    pub const PARTSTAT: &str = "PARTSTAT";
    /// Alarm trigger relationship.
    pub const RELATED: &str = "RELATED";
    /// Participation role.
    pub const ROLE: &str = "ROLE";
    /// RSVP expectation.
    pub const RSVP: &str = "RSVP";
    /// Time zone identifier.
    pub const TZID: &str = "TZID";
    /// Value data type.
    pub const VALUE: &str = "VALUE";
}

//! ## Summary
//! Required-field validation for iCalendar components.
//!
//! RFC 5545 §3.6 lists, per component, the properties that MUST occur
//! and the pairs that MUST NOT occur together. Parsing never checks these;
//! they are enforced when a typed view is written out.

use std::fmt;

use thiserror::Error;

use crate::rfc::ical::core::{Component, ComponentKind, names};

/// ## Summary
/// A component that breaks a required-field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{component}: {kind} {property}")]
pub struct ValidationError {
    /// Which rule was broken.
    pub kind: ValidationErrorKind,
    /// Name of the offending component.
    pub component: String,
    /// Property (or sub-component) the rule is about.
    pub property: String,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, component: &Component, property: &str) -> Self {
        Self {
            kind,
            component: component.name().to_string(),
            property: property.to_string(),
        }
    }
}

/// Kinds of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required property is absent.
    MissingProperty,
    /// Two mutually exclusive properties are both present.
    ConflictingProperties,
    /// A required sub-component is absent.
    MissingSubComponent,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty => write!(f, "missing required property"),
            Self::ConflictingProperties => write!(f, "conflicting properties"),
            Self::MissingSubComponent => write!(f, "missing required sub-component"),
        }
    }
}

/// ## Summary
/// Validates a component and all of its descendants.
///
/// ## Errors
/// Returns the first broken rule, checking a component before its children.
pub fn validate_component(component: &Component) -> Result<(), ValidationError> {
    match component.kind() {
        ComponentKind::Event => {
            require(component, &[names::UID, names::DTSTAMP])?;
            exclusive(component, names::DTEND, names::DURATION)?;
        }
        ComponentKind::Todo => {
            require(component, &[names::UID, names::DTSTAMP])?;
            exclusive(component, names::DUE, names::DURATION)?;
        }
        ComponentKind::Journal | ComponentKind::FreeBusy => {
            require(component, &[names::UID, names::DTSTAMP])?;
        }
        ComponentKind::Alarm => require(component, &[names::ACTION, names::TRIGGER])?,
        ComponentKind::Timezone => {
            require(component, &[names::TZID])?;
            let has_rule = component.children().iter().any(|child| {
                matches!(child.kind(), ComponentKind::Standard | ComponentKind::Daylight)
            });
            if !has_rule {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingSubComponent,
                    component,
                    "STANDARD or DAYLIGHT",
                ));
            }
        }
        ComponentKind::Standard | ComponentKind::Daylight => require(
            component,
            &[names::DTSTART, names::TZOFFSETFROM, names::TZOFFSETTO],
        )?,
        ComponentKind::Calendar | ComponentKind::Unknown => {}
    }

    component
        .children()
        .iter()
        .try_for_each(validate_component)
}

fn require(component: &Component, properties: &[&str]) -> Result<(), ValidationError> {
    match properties.iter().find(|name| !component.has_property(name)) {
        Some(missing) => Err(ValidationError::new(
            ValidationErrorKind::MissingProperty,
            component,
            missing,
        )),
        None => Ok(()),
    }
}

fn exclusive(component: &Component, first: &str, second: &str) -> Result<(), ValidationError> {
    if component.has_property(first) && component.has_property(second) {
        return Err(ValidationError::new(
            ValidationErrorKind::ConflictingProperties,
            component,
            &format!("{first}/{second}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{DateTime, Duration, Property, UtcOffset, Value};

    fn stamped(mut component: Component) -> Component {
        component.add_property(Property::text(names::UID, "uid-1"));
        component.add_property(Property::datetime(
            names::DTSTAMP,
            DateTime::utc(2026, 1, 1, 0, 0, 0),
        ));
        component
    }

    #[test]
    fn event_requires_uid_and_dtstamp() {
        let err = validate_component(&Component::event()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingProperty);
        assert_eq!(err.component, "VEVENT");
        assert_eq!(err.property, "UID");
        assert_eq!(err.to_string(), "VEVENT: missing required property UID");

        let mut event = Component::event();
        event.add_property(Property::text(names::UID, "x"));
        assert_eq!(validate_component(&event).unwrap_err().property, "DTSTAMP");

        assert!(validate_component(&stamped(Component::event())).is_ok());
    }

    #[test]
    fn event_rejects_dtend_with_duration() {
        let mut event = stamped(Component::event());
        event.add_property(Property::datetime(names::DTEND, DateTime::utc(2026, 1, 1, 1, 0, 0)));
        event.add_property(Property::duration(names::DURATION, Duration::hours(1)));

        let err = validate_component(&event).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::ConflictingProperties);
        assert_eq!(err.property, "DTEND/DURATION");
    }

    #[test]
    fn todo_rejects_due_with_duration() {
        let mut todo = stamped(Component::todo());
        assert!(validate_component(&todo).is_ok());
        todo.add_property(Property::datetime(names::DUE, DateTime::utc(2026, 1, 2, 0, 0, 0)));
        todo.add_property(Property::duration(names::DURATION, Duration::days(1)));
        assert_eq!(
            validate_component(&todo).unwrap_err().kind,
            ValidationErrorKind::ConflictingProperties
        );
    }

    #[test]
    fn journal_and_freebusy_require_stamp() {
        assert!(validate_component(&Component::journal()).is_err());
        assert!(validate_component(&Component::freebusy()).is_err());
        assert!(validate_component(&stamped(Component::journal())).is_ok());
        assert!(validate_component(&stamped(Component::freebusy())).is_ok());
    }

    #[test]
    fn alarm_requires_action_and_trigger() {
        let mut alarm = Component::alarm();
        alarm.add_property(Property::text(names::ACTION, "DISPLAY"));
        assert_eq!(validate_component(&alarm).unwrap_err().property, "TRIGGER");
        alarm.add_property(Property::duration(names::TRIGGER, Duration::minutes(5).negate()));
        assert!(validate_component(&alarm).is_ok());
    }

    #[test]
    fn timezone_requires_a_rule() {
        let mut tz = Component::timezone();
        tz.add_property(Property::text(names::TZID, "Europe/Berlin"));
        let err = validate_component(&tz).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingSubComponent);

        let mut standard = Component::new(ComponentKind::Standard);
        standard.add_property(Property::datetime(
            names::DTSTART,
            DateTime::floating(1970, 10, 25, 3, 0, 0),
        ));
        standard.add_property(Property::new(
            names::TZOFFSETFROM,
            Value::UtcOffset(UtcOffset::from_seconds(7200)),
        ));
        tz.add_child(standard.clone());
        assert_eq!(validate_component(&tz).unwrap_err().property, "TZOFFSETTO");

        tz.remove_children_of_kind(ComponentKind::Standard);
        standard.add_property(Property::new(names::TZOFFSETTO, Value::UtcOffset(UtcOffset::from_seconds(3600))));
        tz.add_child(standard);
        assert!(validate_component(&tz).is_ok());
    }

    #[test]
    fn children_are_validated_recursively() {
        let mut calendar = Component::calendar();
        assert!(validate_component(&calendar).is_ok());

        let mut event = stamped(Component::event());
        event.add_child(Component::alarm());
        calendar.add_child(event);

        let err = validate_component(&calendar).unwrap_err();
        assert_eq!(err.component, "VALARM");
        assert_eq!(err.property, "ACTION");
    }

    #[test]
    fn unknown_components_have_no_rules() {
        let mut custom = Component::custom("X-THING");
        custom.add_child(Component::custom("X-INNER"));
        assert!(validate_component(&custom).is_ok());
    }
}

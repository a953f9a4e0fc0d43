//! `VALARM` (RFC 5545 §3.6.6).

use super::{ComponentView, component_view};
use crate::rfc::ical::core::{
    Component, ComponentKind, DateTime, Duration, Parameter, Property, TriggerRelated, Value,
    names, param_names,
};

/// When an alarm fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Offset from the start or end of the enclosing component.
    Relative {
        offset: Duration,
        related: TriggerRelated,
    },
    /// A fixed UTC instant.
    Absolute(DateTime),
}

impl Trigger {
    /// Fires `offset` before the start.
    #[must_use]
    pub const fn before_start(offset: Duration) -> Self {
        Self::Relative {
            offset: offset.negate(),
            related: TriggerRelated::Start,
        }
    }

    /// Fires `offset` before the end.
    #[must_use]
    pub const fn before_end(offset: Duration) -> Self {
        Self::Relative {
            offset: offset.negate(),
            related: TriggerRelated::End,
        }
    }

    fn into_property(self) -> Property {
        match self {
            Self::Relative { offset, related } => {
                let property = Property::duration(names::TRIGGER, offset);
                match related {
                    TriggerRelated::Start => property,
                    TriggerRelated::End => property.with_param(Parameter::related(related)),
                }
            }
            Self::Absolute(at) => Property::datetime(names::TRIGGER, at),
        }
    }

    fn from_property(property: &Property) -> Option<Self> {
        match property.first_value()? {
            Value::Duration(offset) => Some(Self::Relative {
                offset: *offset,
                related: property
                    .get_param_value(param_names::RELATED)
                    .map_or(TriggerRelated::Start, TriggerRelated::parse),
            }),
            Value::DateTime(at) => Some(Self::Absolute(at.clone())),
            _ => None,
        }
    }
}

/// A reminder attached to an event or to-do.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm(Component);

component_view!(Alarm, ComponentKind::Alarm);

impl Alarm {
    /// Creates an alarm with the given `ACTION` and trigger.
    #[must_use]
    pub fn new(action: &str, trigger: Trigger) -> Self {
        let mut component = Component::alarm();
        component.add_property(Property::text(names::ACTION, action));
        component.add_property(trigger.into_property());
        Self(component)
    }

    /// A `DISPLAY` alarm showing `description`.
    #[must_use]
    pub fn display(trigger: Trigger, description: &str) -> Self {
        let mut alarm = Self::new("DISPLAY", trigger);
        alarm
            .0
            .add_property(Property::text(names::DESCRIPTION, description));
        alarm
    }

    /// An `AUDIO` alarm.
    #[must_use]
    pub fn audio(trigger: Trigger) -> Self {
        Self::new("AUDIO", trigger)
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.0.get_text(names::ACTION)
    }

    #[must_use]
    pub fn trigger(&self) -> Option<Trigger> {
        self.0
            .get_property(names::TRIGGER)
            .and_then(Trigger::from_property)
    }

    pub fn set_trigger(&mut self, trigger: Trigger) {
        self.0.set_property(trigger.into_property());
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Returns `REPEAT` and the `DURATION` between repetitions.
    #[must_use]
    pub fn repeat(&self) -> Option<(i32, Duration)> {
        let count = self.0.get_integer(names::REPEAT)?;
        let interval = self.0.get_duration(names::DURATION)?;
        Some((count, *interval))
    }

    /// Sets or clears `REPEAT` together with `DURATION`; RFC 5545 requires
    /// both or neither.
    pub fn set_repeat(&mut self, repeat: Option<(i32, Duration)>) {
        let (count, interval) = match repeat {
            Some((count, interval)) => (Some(count), Some(interval)),
            None => (None, None),
        };
        self.0.set_value(names::REPEAT, count.map(Value::Integer));
        self.0.set_value(names::DURATION, interval.map(Value::from));
    }
}

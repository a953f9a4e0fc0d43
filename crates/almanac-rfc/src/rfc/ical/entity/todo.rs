//! `VTODO` (RFC 5545 §3.6.2).

use super::{Alarm, ComponentView, Schedulable, Stamped, component_view, generate_uid};
use crate::rfc::ical::core::{
    Component, ComponentKind, DateOrDateTime, DateTime, Duration, Property, Value, names,
};

/// An action item or assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo(Component);

component_view!(Todo, ComponentKind::Todo);

impl Stamped for Todo {}
impl Schedulable for Todo {}

impl Todo {
    #[must_use]
    pub fn new(uid: &str, dtstamp: DateTime) -> Self {
        let mut component = Component::todo();
        component.add_property(Property::text(names::UID, uid));
        component.add_property(Property::datetime(names::DTSTAMP, dtstamp));
        Self(component)
    }

    /// Creates a to-do with a random v4 UUID as `UID`, stamped now.
    #[must_use]
    pub fn new_with_generated_uid() -> Self {
        Self::new(&generate_uid(), DateTime::now_utc())
    }

    #[must_use]
    pub fn due(&self) -> Option<DateOrDateTime> {
        self.0.get_date_or_datetime(names::DUE)
    }

    pub fn set_due(&mut self, due: Option<DateOrDateTime>) {
        self.0.set_value(names::DUE, due.map(Value::from));
    }

    #[must_use]
    pub fn duration(&self) -> Option<&Duration> {
        self.0.get_duration(names::DURATION)
    }

    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.0.set_value(names::DURATION, duration.map(Value::from));
    }

    #[must_use]
    pub fn completed(&self) -> Option<&DateTime> {
        self.0.get_datetime(names::COMPLETED)
    }

    /// Marks the to-do done at `at`: sets `COMPLETED`, `STATUS:COMPLETED`
    /// and `PERCENT-COMPLETE:100`.
    pub fn complete(&mut self, at: DateTime) {
        self.0
            .set_property(Property::datetime(names::COMPLETED, at));
        self.set_status(Some("COMPLETED"));
        self.set_percent_complete(Some(100));
    }

    #[must_use]
    pub fn percent_complete(&self) -> Option<i32> {
        self.0.get_integer(names::PERCENT_COMPLETE)
    }

    pub fn set_percent_complete(&mut self, percent: Option<i32>) {
        self.0.set_value(
            names::PERCENT_COMPLETE,
            percent.map(|p| Value::Integer(p.clamp(0, 100))),
        );
    }

    /// Priority 1 (highest) to 9 (lowest); 0 or absent means undefined.
    #[must_use]
    pub fn priority(&self) -> Option<i32> {
        self.0.get_integer(names::PRIORITY)
    }

    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.0.set_value(names::PRIORITY, priority.map(Value::Integer));
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.0.get_text(names::LOCATION)
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.0.set_value(names::LOCATION, location.map(Value::text));
    }

    #[must_use]
    pub fn alarms(&self) -> Vec<Alarm> {
        self.0
            .alarms()
            .into_iter()
            .cloned()
            .filter_map(Alarm::from_component)
            .collect()
    }

    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.0.add_child(alarm.into_component());
    }
}

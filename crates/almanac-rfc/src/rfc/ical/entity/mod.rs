//! Typed views over iCalendar components.
//!
//! Each view owns a [`Component`] of one kind and reads and writes it only
//! through the component's property API, so anything a view does not know
//! about survives untouched. Required fields are checked when a view is
//! written out with [`ComponentView::to_ics`], never while it is built.

mod alarm;
mod calendar;
mod event;
mod freebusy;
mod journal;
mod timezone;
mod todo;

pub use alarm::{Alarm, Trigger};
pub use calendar::ICalendar;
pub use event::Event;
pub use freebusy::FreeBusy;
pub use journal::Journal;
pub use timezone::{TimeZone, TimeZoneRule};
pub use todo::Todo;

use crate::error::RfcResult;
use crate::rfc::ical::build::serialize_component;
use crate::rfc::ical::core::{
    Component, DateOrDateTime, DateTime, Parameter, Property, RRule, Value, names,
};
use crate::rfc::validation::{ValidationError, validate_component};

/// A typed, owned view over one kind of component.
pub trait ComponentView: Sized {
    /// Wraps `component` if it has the kind this view expects.
    fn from_component(component: Component) -> Option<Self>;

    /// Returns the underlying component.
    fn as_component(&self) -> &Component;

    /// Returns the underlying component mutably.
    fn as_component_mut(&mut self) -> &mut Component;

    /// Unwraps the underlying component.
    fn into_component(self) -> Component;

    /// Checks required fields of this component and its children.
    ///
    /// ## Errors
    ///
    /// Returns the first rule that is broken.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_component(self.as_component())
    }

    /// Validates, then serializes to iCalendar text.
    ///
    /// ## Errors
    ///
    /// Returns a validation error if a required field is missing or two
    /// exclusive fields are both set.
    fn to_ics(&self) -> RfcResult<String> {
        self.validate()?;
        Ok(serialize_component(self.as_component()))
    }
}

/// Implements [`ComponentView`] for a newtype over a single component kind.
macro_rules! component_view {
    ($view:ident, $kind:path) => {
        impl $crate::rfc::ical::entity::ComponentView for $view {
            fn from_component(component: $crate::rfc::ical::core::Component) -> Option<Self> {
                (component.kind() == $kind).then_some(Self(component))
            }

            fn as_component(&self) -> &$crate::rfc::ical::core::Component {
                &self.0
            }

            fn as_component_mut(&mut self) -> &mut $crate::rfc::ical::core::Component {
                &mut self.0
            }

            fn into_component(self) -> $crate::rfc::ical::core::Component {
                self.0
            }
        }
    };
}
pub(crate) use component_view;

/// Components identified by `UID` and stamped with `DTSTAMP`.
pub trait Stamped: ComponentView {
    /// Returns the unique identifier.
    #[must_use]
    fn uid(&self) -> Option<&str> {
        self.as_component().uid()
    }

    /// Sets the unique identifier.
    fn set_uid(&mut self, uid: impl Into<String>) {
        self.as_component_mut()
            .set_property(Property::text(names::UID, uid));
    }

    /// Returns the time this object was written.
    #[must_use]
    fn dtstamp(&self) -> Option<&DateTime> {
        self.as_component().get_datetime(names::DTSTAMP)
    }

    /// Sets `DTSTAMP`.
    fn set_dtstamp(&mut self, dtstamp: DateTime) {
        self.as_component_mut()
            .set_property(Property::datetime(names::DTSTAMP, dtstamp));
    }

    /// Sets `DTSTAMP` to the current UTC time.
    fn touch(&mut self) {
        self.set_dtstamp(DateTime::now_utc());
    }
}

/// Properties shared by events, to-dos and journal entries.
pub trait Schedulable: Stamped {
    #[must_use]
    fn summary(&self) -> Option<&str> {
        self.as_component().summary()
    }

    fn set_summary(&mut self, summary: Option<&str>) {
        self.as_component_mut()
            .set_value(names::SUMMARY, summary.map(Value::text));
    }

    #[must_use]
    fn description(&self) -> Option<&str> {
        self.as_component().description()
    }

    fn set_description(&mut self, description: Option<&str>) {
        self.as_component_mut()
            .set_value(names::DESCRIPTION, description.map(Value::text));
    }

    /// Returns the start as a date or date-time.
    #[must_use]
    fn dtstart(&self) -> Option<DateOrDateTime> {
        self.as_component().get_date_or_datetime(names::DTSTART)
    }

    /// Sets the start. A DATE gets `VALUE=DATE`, a zoned date-time `TZID`.
    fn set_dtstart(&mut self, start: Option<DateOrDateTime>) {
        self.as_component_mut()
            .set_value(names::DTSTART, start.map(Value::from));
    }

    /// Revision sequence number, 0 when absent (RFC 5545 §3.8.7.4).
    #[must_use]
    fn sequence(&self) -> i32 {
        self.as_component()
            .get_integer(names::SEQUENCE)
            .unwrap_or_default()
    }

    fn set_sequence(&mut self, sequence: i32) {
        self.as_component_mut()
            .set_property(Property::integer(names::SEQUENCE, sequence));
    }

    /// Increments `SEQUENCE` and refreshes `DTSTAMP`.
    fn bump_sequence(&mut self) {
        let next = self.sequence().saturating_add(1);
        self.set_sequence(next);
        self.touch();
    }

    #[must_use]
    fn status(&self) -> Option<&str> {
        self.as_component().get_text(names::STATUS)
    }

    fn set_status(&mut self, status: Option<&str>) {
        self.as_component_mut()
            .set_value(names::STATUS, status.map(Value::text));
    }

    #[must_use]
    fn rrule(&self) -> Option<&RRule> {
        self.as_component().get_recur(names::RRULE)
    }

    fn set_rrule(&mut self, rrule: Option<RRule>) {
        self.as_component_mut()
            .set_value(names::RRULE, rrule.map(Value::from));
    }

    /// Dates excluded from the recurrence set, across all `EXDATE` lines.
    #[must_use]
    fn exdates(&self) -> Vec<DateOrDateTime> {
        self.as_component()
            .get_values(names::EXDATE)
            .into_iter()
            .filter_map(Value::as_date_or_datetime)
            .collect()
    }

    /// Adds an `EXDATE` line holding `dates`.
    fn add_exdates(&mut self, dates: Vec<DateOrDateTime>) {
        if dates.is_empty() {
            return;
        }
        let values = dates.into_iter().map(Value::from).collect::<Vec<_>>();
        self.as_component_mut()
            .add_property(Property::new(names::EXDATE, values));
    }

    #[must_use]
    fn organizer(&self) -> Option<&str> {
        self.as_component().get_uri(names::ORGANIZER)
    }

    fn set_organizer(&mut self, address: Option<&str>) {
        let component = self.as_component_mut();
        match address {
            Some(address) => {
                component.set_property(Property::cal_address(names::ORGANIZER, address));
            }
            None => {
                component.remove_property(names::ORGANIZER);
            }
        }
    }

    /// Returns every `ATTENDEE` property, with its parameters.
    #[must_use]
    fn attendees(&self) -> Vec<&Property> {
        self.as_component().get_properties(names::ATTENDEE)
    }

    /// Adds an attendee, optionally with a common name.
    fn add_attendee(&mut self, address: &str, common_name: Option<&str>) {
        let mut attendee = Property::cal_address(names::ATTENDEE, address);
        if let Some(cn) = common_name {
            attendee = attendee.with_param(Parameter::cn(cn));
        }
        self.as_component_mut().add_property(attendee);
    }

    /// Categories across all `CATEGORIES` lines.
    #[must_use]
    fn categories(&self) -> Vec<&str> {
        self.as_component().get_texts(names::CATEGORIES)
    }

    /// Replaces all categories with one `CATEGORIES` line.
    fn set_categories(&mut self, categories: &[&str]) {
        let values: Vec<Value> = categories.iter().copied().map(Value::text).collect();
        self.as_component_mut()
            .set_value(names::CATEGORIES, Some(values));
    }
}

/// Generates a globally unique `UID` value.
pub(crate) fn generate_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::Date;

    #[test]
    fn from_component_checks_kind() {
        assert!(Event::from_component(Component::event()).is_some());
        assert!(Event::from_component(Component::todo()).is_none());
        assert!(Todo::from_component(Component::todo()).is_some());
        assert!(ICalendar::from_component(Component::event()).is_none());
    }

    #[test]
    fn schedulable_setters_use_the_property_contract() {
        let mut event = Event::new("uid-1", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.set_summary(Some("Planning"));
        event.set_dtstart(Some(Date::new(2026, 3, 1).into()));
        event.set_categories(&["work", "a,b"]);
        event.add_attendee("mailto:jane@example.com", Some("Jane Doe"));
        event.set_organizer(Some("mailto:boss@example.com"));

        assert_eq!(event.summary(), Some("Planning"));
        assert!(event.dtstart().is_some_and(|d| d.is_date()));
        assert_eq!(event.categories(), ["work", "a,b"]);
        assert_eq!(event.attendees()[0].get_param_value("CN"), Some("Jane Doe"));
        assert_eq!(event.organizer(), Some("mailto:boss@example.com"));

        let component = event.as_component();
        assert_eq!(
            component.get_property("DTSTART").and_then(|p| p.get_param_value("VALUE")),
            Some("DATE")
        );

        event.set_summary(None);
        event.set_organizer(None);
        assert!(event.summary().is_none());
        assert!(!event.as_component().has_property("ORGANIZER"));
    }

    #[test]
    fn bump_sequence_starts_from_zero() {
        let mut todo = Todo::new("t", DateTime::utc(2026, 1, 1, 0, 0, 0));
        assert_eq!(todo.sequence(), 0);
        todo.bump_sequence();
        todo.bump_sequence();
        assert_eq!(todo.sequence(), 2);
        assert!(todo.dtstamp().is_some_and(DateTime::is_utc));
    }

    #[test]
    fn exdates_collect_across_lines() {
        let mut event = Event::new("e", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.add_exdates(vec![Date::new(2026, 1, 5).into(), Date::new(2026, 1, 12).into()]);
        event.add_exdates(vec![Date::new(2026, 1, 19).into()]);
        event.add_exdates(Vec::new());
        assert_eq!(event.exdates().len(), 3);
        assert_eq!(event.as_component().get_properties("EXDATE").len(), 2);
    }

    #[test]
    fn generated_uids_are_unique() {
        assert_ne!(generate_uid(), generate_uid());
    }
}

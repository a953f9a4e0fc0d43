//! The `VCALENDAR` object (RFC 5545 §3.4).

use almanac_core::config::{CalendarConfig, load_config};
use almanac_core::error::CoreError;
use almanac_core::constants::{DEFAULT_PRODID, ICALENDAR_VERSION};

use super::{ComponentView, Event, FreeBusy, Journal, TimeZone, Todo, component_view};
use crate::error::RfcResult;
use crate::rfc::ical::core::{Component, ComponentKind, Property, Value, names};

/// An iCalendar object: calendar properties plus the components it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar(Component);

component_view!(ICalendar, ComponentKind::Calendar);

impl ICalendar {
    /// Creates an empty calendar with `PRODID` and `VERSION:2.0`.
    #[must_use]
    pub fn new(prodid: &str) -> Self {
        Self::with_identity(prodid, ICALENDAR_VERSION)
    }

    fn with_identity(prodid: &str, version: &str) -> Self {
        let mut component = Component::calendar();
        component.add_property(Property::text(names::PRODID, prodid));
        component.add_property(Property::text(names::VERSION, version));
        Self(component)
    }

    /// Creates an empty calendar stamped with the configured identifiers.
    ///
    /// ## Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_settings(config: &CalendarConfig) -> RfcResult<Self> {
        config.validate()?;
        Ok(Self::with_identity(config.prodid.trim(), config.version.trim()))
    }

    /// Creates an empty calendar stamped with the identifiers from
    /// `ALMANAC_*` variables, `.env` and `almanac.toml`.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError::ConfigError` if the settings cannot be loaded or
    /// fail validation.
    pub fn from_environment() -> RfcResult<Self> {
        let settings = load_config().map_err(|e| CoreError::ConfigError(format!("{e:#}")))?;
        Self::from_settings(&settings.calendar)
    }

    /// Wraps a `VCALENDAR` produced by the parser.
    pub(crate) fn from_parsed(component: Component) -> Self {
        Self(component)
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.0.get_text(names::PRODID)
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.0.get_text(names::VERSION)
    }

    /// Calendar scale; `GREGORIAN` when absent (RFC 5545 §3.7.1).
    #[must_use]
    pub fn calscale(&self) -> &str {
        self.0.get_text(names::CALSCALE).unwrap_or("GREGORIAN")
    }

    /// Scheduling method, e.g. `REQUEST` (RFC 5546).
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.0.get_text(names::METHOD)
    }

    pub fn set_method(&mut self, method: Option<&str>) {
        self.0.set_value(names::METHOD, method.map(Value::text));
    }

    pub fn add_event(&mut self, event: Event) {
        self.0.add_child(event.into_component());
    }

    pub fn add_todo(&mut self, todo: Todo) {
        self.0.add_child(todo.into_component());
    }

    pub fn add_journal(&mut self, journal: Journal) {
        self.0.add_child(journal.into_component());
    }

    pub fn add_freebusy(&mut self, freebusy: FreeBusy) {
        self.0.add_child(freebusy.into_component());
    }

    pub fn add_timezone(&mut self, timezone: TimeZone) {
        self.0.add_child(timezone.into_component());
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.0.events()
    }

    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.0.todos()
    }

    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.0.journals()
    }

    #[must_use]
    pub fn freebusy(&self) -> Vec<&Component> {
        self.0.freebusy_components()
    }

    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.0.timezones()
    }

    /// Returns a copy of the first event with the given `UID`.
    #[must_use]
    pub fn event(&self, uid: &str) -> Option<Event> {
        self.0
            .events()
            .into_iter()
            .find(|event| event.uid() == Some(uid))
            .cloned()
            .and_then(Event::from_component)
    }

    /// Returns a copy of the `VTIMEZONE` with the given `TZID`.
    #[must_use]
    pub fn timezone(&self, tzid: &str) -> Option<TimeZone> {
        self.0
            .timezones()
            .into_iter()
            .find(|tz| tz.get_text(names::TZID) == Some(tzid))
            .cloned()
            .and_then(TimeZone::from_component)
    }

    /// Distinct `UID`s of the calendar's children, in order of appearance.
    #[must_use]
    pub fn uids(&self) -> Vec<&str> {
        let mut uids: Vec<&str> = Vec::new();
        for uid in self.0.children().iter().filter_map(Component::uid) {
            if !uids.contains(&uid) {
                uids.push(uid);
            }
        }
        uids
    }

    fn has_timezone(&self, tzid: &str) -> bool {
        self.0
            .timezones()
            .into_iter()
            .any(|tz| tz.get_text(names::TZID) == Some(tzid))
    }

    /// `TZID`s referenced by date-time values that have no `VTIMEZONE`.
    #[must_use]
    pub fn missing_timezones(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        let mut stack: Vec<&Component> = self.0.children().iter().collect();
        while let Some(component) = stack.pop() {
            for property in component.properties() {
                if let Some(tzid) = property.tzid()
                    && !self.has_timezone(tzid)
                    && !missing.contains(&tzid)
                {
                    missing.push(tzid);
                }
            }
            stack.extend(component.children());
        }
        missing
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

//! `VEVENT` (RFC 5545 §3.6.1).

use super::{Alarm, ComponentView, Schedulable, Stamped, component_view, generate_uid};
use crate::rfc::ical::core::{
    Component, ComponentKind, DateOrDateTime, DateTime, Duration, Geo, Property, Value, names,
};

/// A scheduled amount of time on a calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Event(Component);

component_view!(Event, ComponentKind::Event);

impl Stamped for Event {}
impl Schedulable for Event {}

impl Event {
    /// Creates an event with the two properties every `VEVENT` needs.
    #[must_use]
    pub fn new(uid: &str, dtstamp: DateTime) -> Self {
        let mut component = Component::event();
        component.add_property(Property::text(names::UID, uid));
        component.add_property(Property::datetime(names::DTSTAMP, dtstamp));
        Self(component)
    }

    /// Creates an event with a random v4 UUID as `UID`, stamped now.
    #[must_use]
    pub fn new_with_generated_uid() -> Self {
        Self::new(&generate_uid(), DateTime::now_utc())
    }

    #[must_use]
    pub fn dtend(&self) -> Option<DateOrDateTime> {
        self.0.get_date_or_datetime(names::DTEND)
    }

    pub fn set_dtend(&mut self, end: Option<DateOrDateTime>) {
        self.0.set_value(names::DTEND, end.map(Value::from));
    }

    #[must_use]
    pub fn duration(&self) -> Option<&Duration> {
        self.0.get_duration(names::DURATION)
    }

    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.0.set_value(names::DURATION, duration.map(Value::from));
    }

    /// Returns `DTEND`, or `DTSTART` plus `DURATION` when the start is a
    /// date-time.
    #[must_use]
    pub fn effective_end(&self) -> Option<DateOrDateTime> {
        if let Some(end) = self.dtend() {
            return Some(end);
        }
        let DateOrDateTime::DateTime(start) = self.dtstart()? else {
            return None;
        };
        let end = start
            .to_naive()?
            .checked_add_signed(self.duration()?.to_chrono())?;
        let mut end_dt = DateTime::from_naive(&end);
        end_dt.utc = start.utc;
        end_dt.tzid = start.tzid;
        Some(DateOrDateTime::DateTime(end_dt))
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.0.get_text(names::LOCATION)
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.0.set_value(names::LOCATION, location.map(Value::text));
    }

    #[must_use]
    pub fn geo(&self) -> Option<Geo> {
        self.0.get_geo(names::GEO)
    }

    pub fn set_geo(&mut self, geo: Option<Geo>) {
        self.0.set_value(names::GEO, geo.map(Value::from));
    }

    /// Time transparency; `OPAQUE` when absent (RFC 5545 §3.8.2.7).
    #[must_use]
    pub fn transparency(&self) -> &str {
        self.0.get_text(names::TRANSP).unwrap_or("OPAQUE")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{Date, RRule};
    use crate::rfc::ical::entity::Trigger;
    use crate::rfc::ical::parse::parse;

    #[test]
    fn new_event_validates() {
        let event = Event::new("uid-1", DateTime::utc(2026, 1, 23, 12, 0, 0));
        assert!(event.validate().is_ok());
        assert_eq!(
            event.to_ics().unwrap(),
            "BEGIN:VEVENT\r\nUID:uid-1\r\nDTSTAMP:20260123T120000Z\r\nEND:VEVENT"
        );
    }

    #[test]
    fn generated_uid_is_a_uuid() {
        let event = Event::new_with_generated_uid();
        let uid = event.uid().unwrap_or_default();
        assert!(uuid::Uuid::parse_str(uid).is_ok());
        assert!(event.dtstamp().is_some_and(DateTime::is_utc));
    }

    #[test]
    fn to_ics_rejects_dtend_with_duration() {
        let mut event = Event::new("x", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.set_dtend(Some(DateTime::utc(2026, 1, 1, 1, 0, 0).into()));
        event.set_duration(Some(Duration::hours(1)));
        assert!(event.to_ics().is_err());

        event.set_dtend(None);
        assert!(event.to_ics().is_ok());
    }

    #[test]
    fn effective_end_adds_duration() {
        let mut event = Event::new("x", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.set_dtstart(Some(
            DateTime::floating(2026, 1, 31, 23, 30, 0)
                .with_tzid("Europe/Berlin")
                .into(),
        ));
        event.set_duration(Some(Duration::hours(1)));

        let Some(DateOrDateTime::DateTime(end)) = event.effective_end() else {
            panic!("expected a date-time end");
        };
        assert_eq!(end.to_string(), "20260201T003000");
        assert_eq!(end.tzid(), Some("Europe/Berlin"));
    }

    #[test]
    fn effective_end_is_none_for_all_day_without_dtend() {
        let mut event = Event::new("x", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.set_dtstart(Some(Date::new(2026, 1, 1).into()));
        event.set_duration(Some(Duration::days(1)));
        assert!(event.effective_end().is_none());
    }

    #[test]
    fn typed_accessors_round_trip_through_text() {
        let mut event = Event::new("x", DateTime::utc(2026, 1, 1, 0, 0, 0));
        event.set_location(Some("Room 1; Floor 2"));
        event.set_geo(Some(Geo::new(37.386_013, -122.082_932)));
        event.set_rrule(Some(RRule::weekly().with_count(4)));
        event.add_alarm(Alarm::display(
            Trigger::before_start(Duration::minutes(10)),
            "Soon",
        ));

        let text = event.to_ics().unwrap();
        let reparsed = parse(&text).unwrap();
        let component = reparsed.events()[0].clone();
        let again = Event::from_component(component).unwrap();

        assert_eq!(again.location(), Some("Room 1; Floor 2"));
        assert!(again.geo().is_some_and(|g| (g.longitude + 122.082_932).abs() < 1e-9));
        assert_eq!(again.rrule().map(|r| r.to_string()), Some("FREQ=WEEKLY;COUNT=4".to_string()));
        assert_eq!(again.alarms().len(), 1);
        assert_eq!(again.transparency(), "OPAQUE");
    }
}

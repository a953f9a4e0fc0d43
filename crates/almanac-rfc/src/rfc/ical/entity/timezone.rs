//! `VTIMEZONE` and its `STANDARD` / `DAYLIGHT` rules (RFC 5545 §3.6.5).

use super::{ComponentView, component_view};
use crate::rfc::ical::core::{
    Component, ComponentKind, DateTime, Property, RRule, UtcOffset, Value, names,
};

/// A time zone definition referenced by `TZID` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeZone(Component);

component_view!(TimeZone, ComponentKind::Timezone);

impl TimeZone {
    /// Creates a time zone with the given `TZID` and no rules yet.
    #[must_use]
    pub fn new(tzid: &str) -> Self {
        let mut component = Component::timezone();
        component.add_property(Property::text(names::TZID, tzid));
        Self(component)
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.0.get_text(names::TZID)
    }

    #[must_use]
    pub fn tzurl(&self) -> Option<&str> {
        self.0.get_uri(names::TZURL)
    }

    pub fn add_rule(&mut self, rule: TimeZoneRule) {
        self.0.add_child(rule.into_component());
    }

    /// `STANDARD` and `DAYLIGHT` rules in order of appearance.
    #[must_use]
    pub fn rules(&self) -> Vec<TimeZoneRule> {
        self.0
            .children()
            .iter()
            .cloned()
            .filter_map(TimeZoneRule::from_component)
            .collect()
    }

    /// The rule with the latest onset at or before `at`, comparing local
    /// wall-clock times. Recurring onsets are not expanded.
    #[must_use]
    pub fn rule_at(&self, at: &DateTime) -> Option<TimeZoneRule> {
        let at = at.to_naive()?;
        self.rules()
            .into_iter()
            .filter_map(|rule| {
                let onset = rule.dtstart()?.to_naive()?;
                Some((onset, rule))
            })
            .filter(|(onset, _)| *onset <= at)
            .max_by_key(|(onset, _)| *onset)
            .map(|(_, rule)| rule)
    }
}

/// One observance of a time zone: `STANDARD` or `DAYLIGHT`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeZoneRule(Component);

impl ComponentView for TimeZoneRule {
    fn from_component(component: Component) -> Option<Self> {
        matches!(
            component.kind(),
            ComponentKind::Standard | ComponentKind::Daylight
        )
        .then_some(Self(component))
    }

    fn as_component(&self) -> &Component {
        &self.0
    }

    fn as_component_mut(&mut self) -> &mut Component {
        &mut self.0
    }

    fn into_component(self) -> Component {
        self.0
    }
}

impl TimeZoneRule {
    /// Creates a `STANDARD` observance.
    #[must_use]
    pub fn standard(dtstart: DateTime, offset_from: UtcOffset, offset_to: UtcOffset) -> Self {
        Self::with_kind(ComponentKind::Standard, dtstart, offset_from, offset_to)
    }

    /// Creates a `DAYLIGHT` observance.
    #[must_use]
    pub fn daylight(dtstart: DateTime, offset_from: UtcOffset, offset_to: UtcOffset) -> Self {
        Self::with_kind(ComponentKind::Daylight, dtstart, offset_from, offset_to)
    }

    fn with_kind(
        kind: ComponentKind,
        dtstart: DateTime,
        offset_from: UtcOffset,
        offset_to: UtcOffset,
    ) -> Self {
        let mut component = Component::new(kind);
        component.add_property(Property::datetime(names::DTSTART, dtstart));
        component.add_property(Property::new(
            names::TZOFFSETFROM,
            Value::UtcOffset(offset_from),
        ));
        component.add_property(Property::new(names::TZOFFSETTO, Value::UtcOffset(offset_to)));
        Self(component)
    }

    #[must_use]
    pub fn is_daylight(&self) -> bool {
        self.0.kind() == ComponentKind::Daylight
    }

    #[must_use]
    pub fn dtstart(&self) -> Option<&DateTime> {
        self.0.get_datetime(names::DTSTART)
    }

    #[must_use]
    pub fn offset_from(&self) -> Option<UtcOffset> {
        self.0.get_utc_offset(names::TZOFFSETFROM)
    }

    #[must_use]
    pub fn offset_to(&self) -> Option<UtcOffset> {
        self.0.get_utc_offset(names::TZOFFSETTO)
    }

    /// Abbreviation such as `CET`.
    #[must_use]
    pub fn tzname(&self) -> Option<&str> {
        self.0.get_text(names::TZNAME)
    }

    pub fn set_tzname(&mut self, name: Option<&str>) {
        self.0.set_value(names::TZNAME, name.map(Value::text));
    }

    #[must_use]
    pub fn rrule(&self) -> Option<&RRule> {
        self.0.get_recur(names::RRULE)
    }

    pub fn set_rrule(&mut self, rrule: Option<RRule>) {
        self.0.set_value(names::RRULE, rrule.map(Value::from));
    }
}

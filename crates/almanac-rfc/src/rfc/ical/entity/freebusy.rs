//! `VFREEBUSY` (RFC 5545 §3.6.4).

use super::{Stamped, component_view, generate_uid};
use crate::rfc::ical::core::{
    Component, ComponentKind, DateTime, Parameter, Period, Property, Value, names, param_names,
};

/// A request for, or reply with, busy time.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeBusy(Component);

component_view!(FreeBusy, ComponentKind::FreeBusy);

impl Stamped for FreeBusy {}

impl FreeBusy {
    #[must_use]
    pub fn new(uid: &str, dtstamp: DateTime) -> Self {
        let mut component = Component::freebusy();
        component.add_property(Property::text(names::UID, uid));
        component.add_property(Property::datetime(names::DTSTAMP, dtstamp));
        Self(component)
    }

    #[must_use]
    pub fn new_with_generated_uid() -> Self {
        Self::new(&generate_uid(), DateTime::now_utc())
    }

    /// Sets the window the busy time covers.
    pub fn set_range(&mut self, start: DateTime, end: DateTime) {
        self.0
            .set_property(Property::datetime(names::DTSTART, start));
        self.0.set_property(Property::datetime(names::DTEND, end));
    }

    #[must_use]
    pub fn range(&self) -> Option<(&DateTime, &DateTime)> {
        Some((
            self.0.get_datetime(names::DTSTART)?,
            self.0.get_datetime(names::DTEND)?,
        ))
    }

    #[must_use]
    pub fn organizer(&self) -> Option<&str> {
        self.0.get_uri(names::ORGANIZER)
    }

    pub fn set_organizer(&mut self, address: &str) {
        self.0
            .set_property(Property::cal_address(names::ORGANIZER, address));
    }

    /// Adds one `FREEBUSY` line. `fbtype` defaults to `BUSY` when `None`.
    pub fn add_periods(&mut self, periods: Vec<Period>, fbtype: Option<&str>) {
        if periods.is_empty() {
            return;
        }
        let values = periods.into_iter().map(Value::from).collect::<Vec<_>>();
        let mut property = Property::new(names::FREEBUSY, values);
        if let Some(fbtype) = fbtype {
            property = property.with_param(Parameter::fbtype(fbtype));
        }
        self.0.add_property(property);
    }

    /// Periods across all `FREEBUSY` lines, each with its `FBTYPE`.
    #[must_use]
    pub fn periods(&self) -> Vec<(&str, &Period)> {
        self.0
            .get_properties(names::FREEBUSY)
            .into_iter()
            .flat_map(|property| {
                let fbtype = property
                    .get_param_value(param_names::FBTYPE)
                    .unwrap_or("BUSY");
                property
                    .values()
                    .iter()
                    .filter_map(Value::as_period)
                    .map(move |period| (fbtype, period))
            })
            .collect()
    }
}

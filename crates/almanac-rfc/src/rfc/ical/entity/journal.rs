//! `VJOURNAL` (RFC 5545 §3.6.3).

use super::{Schedulable, Stamped, component_view, generate_uid};
use crate::rfc::ical::core::{Component, ComponentKind, DateTime, Property, names};

/// A journal entry attached to a date.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal(Component);

component_view!(Journal, ComponentKind::Journal);

impl Stamped for Journal {}
impl Schedulable for Journal {}

impl Journal {
    #[must_use]
    pub fn new(uid: &str, dtstamp: DateTime) -> Self {
        let mut component = Component::journal();
        component.add_property(Property::text(names::UID, uid));
        component.add_property(Property::datetime(names::DTSTAMP, dtstamp));
        Self(component)
    }

    #[must_use]
    pub fn new_with_generated_uid() -> Self {
        Self::new(&generate_uid(), DateTime::now_utc())
    }

    /// Every `DESCRIPTION`; journals may carry more than one.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.0.get_texts(names::DESCRIPTION)
    }

    pub fn add_description(&mut self, description: &str) {
        self.0
            .add_property(Property::text(names::DESCRIPTION, description));
    }
}

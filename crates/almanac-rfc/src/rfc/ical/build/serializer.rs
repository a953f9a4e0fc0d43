//! iCalendar serializer (RFC 5545).
//!
//! Writes components back to content lines: properties in insertion order,
//! children after properties, every line folded, lines joined by CRLF.

use super::fold::fold_line;
use crate::rfc::ical::ComponentView;
use crate::rfc::ical::core::{Component, ContentLine, Property};
use crate::rfc::ical::entity::ICalendar;
use crate::rfc::validation::{ValidationError, validate_component};

/// Validates and serializes an iCalendar document.
///
/// ## Errors
///
/// Returns the first missing or conflicting property found by
/// [`validate_component`].
pub fn serialize(ical: &ICalendar) -> Result<String, ValidationError> {
    validate_component(ical.as_component())?;
    Ok(serialize_component(ical.as_component()))
}

/// Serializes a component and its children without validating.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut lines = Vec::new();
    write_component(component, &mut lines);
    lines.join("\r\n")
}

fn write_component(component: &Component, lines: &mut Vec<String>) {
    lines.push(fold_line(&format!("BEGIN:{}", component.name())));
    lines.extend(component.properties().iter().map(serialize_property));
    for child in component.children() {
        write_component(child, lines);
    }
    lines.push(fold_line(&format!("END:{}", component.name())));
}

/// Serializes a property to a single folded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.to_string());
    }
    line.push(':');
    line.push_str(&prop.value.serialize());
    fold_line(&line)
}

/// Serializes a raw content line, folding it.
#[must_use]
pub fn serialize_content_line(content_line: &ContentLine) -> String {
    fold_line(&content_line.to_string())
}

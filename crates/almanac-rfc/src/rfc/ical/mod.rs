//! iCalendar RFC 5545 implementation.
//!
//! - `core`: the component tree, properties, parameters and typed values
//! - `parse`: tokenizer, value codecs and tree assembly
//! - `build`: escaping, line folding and serialization
//! - `entity`: typed views over components (events, to-dos, time zones, ...)
//!
//! ## Example
//!
//! ```rust
//! use almanac_rfc::rfc::ical::{ComponentView, parse, serialize_component};
//! use almanac_rfc::rfc::ical::core::ComponentKind;
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:a\r\nSUMMARY:Lunch\r\nEND:VEVENT\r\nEND:VCALENDAR";
//! let ical = parse(input).unwrap();
//! let event = &ical.events()[0];
//! assert_eq!(event.kind(), ComponentKind::Event);
//! assert_eq!(event.get_text("SUMMARY"), Some("Lunch"));
//! assert_eq!(serialize_component(ical.as_component()), input);
//! ```

pub mod build;
pub mod core;
pub mod entity;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{serialize, serialize_component, serialize_property};
pub use core::{
    Component, ComponentKind, ContentLine, Parameter, Property, PropertyValue, Value, ValueType,
};
pub use entity::{ComponentView, ICalendar};
pub use parse::{
    ParseError, ParseResult, parse, parse_all, parse_bytes, parse_content_line, tokenize,
    tokenize_bytes,
};

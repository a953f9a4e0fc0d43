//! iCalendar document parser (RFC 5545).
//!
//! Assembles tokenized content lines into a component tree. Assembly is
//! tolerant: unmatched `END` lines are ignored, unclosed components are
//! closed at end of input, and values that fail to parse are kept raw.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{decode_unfolded, tokenize_numbered};
use super::values::{parse_value, split_multi_value};
use crate::rfc::ical::core::registry::{is_multi_valued, resolve_value_type};
use crate::rfc::ical::core::{
    Component, ComponentKind, ContentLine, Parameter, Property, PropertyValue, Value, ValueType,
};
use crate::rfc::ical::entity::ICalendar;

/// Parses an iCalendar document from a string.
///
/// Returns the first `VCALENDAR` in the input. Input without a `VCALENDAR`
/// wrapper is wrapped in a synthesized one.
///
/// ## Errors
///
/// Returns an error if the input holds no content lines, or if a recurrence
/// rule names an unknown frequency.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    first_calendar(parse_all(input)?)
}

/// Parses every `VCALENDAR` in a string, in input order.
///
/// ## Errors
///
/// Same as [`parse`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_all(input: &str) -> ParseResult<Vec<ICalendar>> {
    tracing::debug!("Parsing iCalendar document");

    let lines = tokenize_numbered(input);
    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::UnexpectedEof, 1, 1)
            .with_context("no content lines"));
    }

    tracing::trace!(count = lines.len(), "Tokenized content lines");

    let root = assemble(lines)?;
    let calendars: Vec<ICalendar> = calendars_from_root(root)
        .into_iter()
        .map(ICalendar::from_parsed)
        .collect();

    tracing::debug!(count = calendars.len(), "iCalendar document parsed");

    Ok(calendars)
}

/// Parses an iCalendar document from raw bytes.
///
/// Lines are unfolded before UTF-8 decoding, so a fold inside a multi-byte
/// character still decodes. Invalid UTF-8 becomes U+FFFD.
///
/// ## Errors
///
/// Same as [`parse`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_bytes(input: &[u8]) -> ParseResult<ICalendar> {
    first_calendar(parse_all(&decode_unfolded(input))?)
}

/// Parses every `VCALENDAR` in raw bytes. See [`parse_bytes`].
///
/// ## Errors
///
/// Same as [`parse`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_all_bytes(input: &[u8]) -> ParseResult<Vec<ICalendar>> {
    parse_all(&decode_unfolded(input))
}

fn first_calendar(calendars: Vec<ICalendar>) -> ParseResult<ICalendar> {
    calendars
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEof, 1, 1))
}

/// Runs the BEGIN/END stack machine over the content lines.
fn assemble(lines: Vec<(usize, ContentLine)>) -> ParseResult<Component> {
    let mut stack = vec![Component::synthetic_root()];

    for (line_num, line) in lines {
        match line.name.as_str() {
            "BEGIN" => {
                let name = line.raw_value.trim().to_ascii_uppercase();
                tracing::trace!(line = line_num, component = %name, "BEGIN");
                stack.push(Component::custom(name));
            }
            "END" => {
                if stack.len() > 1 {
                    close_top(&mut stack);
                } else {
                    tracing::debug!(line = line_num, end = %line.raw_value, "Ignoring unmatched END");
                }
            }
            _ => {
                let property = parse_property(line, line_num)?;
                if let Some(top) = stack.last_mut() {
                    top.add_property(property);
                }
            }
        }
    }

    while stack.len() > 1 {
        if let Some(top) = stack.last() {
            tracing::debug!(component = top.name(), "Closing component left open at end of input");
        }
        close_top(&mut stack);
    }

    Ok(stack.pop().unwrap_or_else(Component::synthetic_root))
}

/// Pops the top component and attaches it to its parent.
fn close_top(stack: &mut Vec<Component>) {
    if let Some(child) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.add_child(child);
    }
}

/// Builds a typed property, keeping the raw text when the value does not
/// parse.
fn parse_property(line: ContentLine, line_num: usize) -> ParseResult<Property> {
    let ContentLine {
        name,
        params,
        raw_value,
    } = line;

    let value = match resolve_value_type(&name, &params) {
        Some(value_type) => match decode(&name, &raw_value, value_type, &params) {
            Ok(value) => value,
            Err(error) if error.is_fatal() => return Err(error.at(line_num, 1)),
            Err(error) => {
                tracing::debug!(
                    line = line_num,
                    property = %name,
                    %error,
                    "Keeping unparseable value as raw text"
                );
                PropertyValue::Single(Value::Unknown(raw_value))
            }
        },
        None => {
            tracing::debug!(line = line_num, property = %name, "Unknown VALUE type, keeping raw text");
            PropertyValue::Single(Value::Unknown(raw_value))
        }
    };

    Ok(Property {
        name,
        params,
        value,
    })
}

fn decode(
    name: &str,
    raw: &str,
    value_type: ValueType,
    params: &[Parameter],
) -> ParseResult<PropertyValue> {
    if !is_multi_valued(name) {
        return parse_value(raw, value_type, params).map(PropertyValue::Single);
    }

    split_multi_value(raw, value_type)
        .into_iter()
        .map(|item| {
            let item = if value_type == ValueType::Text {
                item
            } else {
                item.trim()
            };
            parse_value(item, value_type, params)
        })
        .collect::<ParseResult<Vec<_>>>()
        .map(PropertyValue::List)
}

/// Returns the `VCALENDAR` children of the root, or one synthesized
/// calendar holding everything the root collected.
fn calendars_from_root(root: Component) -> Vec<Component> {
    let (properties, children) = root.into_parts();

    if children
        .iter()
        .any(|child| child.kind() == ComponentKind::Calendar)
    {
        if !properties.is_empty() {
            tracing::debug!(
                count = properties.len(),
                "Ignoring properties outside VCALENDAR"
            );
        }
        return children
            .into_iter()
            .filter(|child| child.kind() == ComponentKind::Calendar)
            .collect();
    }

    tracing::debug!("No VCALENDAR found, synthesizing one");
    let mut calendar = Component::calendar();
    for property in properties {
        calendar.add_property(property);
    }
    for child in children {
        calendar.add_child(child);
    }
    vec![calendar]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::ComponentView;
    use crate::rfc::ical::core::{Date, Frequency};

    #[test]
    fn parse_minimal_calendar() {
        let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:test@example.com\r\n\
DTSTAMP:20260123T120000Z\r\n\
DTSTART:20260123T140000Z\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let ical = parse(input).unwrap();
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.prodid(), Some("-//Test//Test//EN"));

        let events = ical.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uid(), Some("test@example.com"));
        assert_eq!(events[0].summary(), Some("Test Event"));
        assert!(events[0].get_datetime("DTSTART").is_some_and(|dt| dt.utc));
    }

    #[test]
    fn rdate_value_date_list_yields_two_dates() {
        let input = "BEGIN:VEVENT\nRDATE;VALUE=DATE:19970101,19970120\nEND:VEVENT";
        let ical = parse(input).unwrap();
        let event = ical.events()[0];
        let dates: Vec<_> = event
            .get_values("RDATE")
            .into_iter()
            .filter_map(Value::as_date)
            .copied()
            .collect();
        assert_eq!(dates, [Date::new(1997, 1, 1), Date::new(1997, 1, 20)]);
    }

    #[test]
    fn categories_split_on_unescaped_commas() {
        let input = "BEGIN:VTODO\nCATEGORIES:a\\,b,c\nEND:VTODO";
        let ical = parse(input).unwrap();
        assert_eq!(ical.todos()[0].get_texts("CATEGORIES"), ["a,b", "c"]);
    }

    #[test]
    fn bare_event_gets_a_synthesized_calendar() {
        let ical = parse("BEGIN:VEVENT\r\nUID:x\r\nEND:VEVENT").unwrap();
        assert_eq!(ical.as_component().kind(), ComponentKind::Calendar);
        assert_eq!(ical.events().len(), 1);
    }

    #[test]
    fn loose_properties_land_in_the_synthesized_calendar() {
        let ical = parse("PRODID:-//x//EN\nX-FOO:bar").unwrap();
        assert_eq!(ical.prodid(), Some("-//x//EN"));
        assert_eq!(ical.as_component().get_text("X-FOO"), Some("bar"));
    }

    #[test]
    fn blank_lines_between_events_are_ignored() {
        let input = "BEGIN:VCALENDAR\r\n\r\nBEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\n\r\n\r\nBEGIN:VEVENT\r\nUID:2\r\nEND:VEVENT\r\nEND:VCALENDAR";
        let ical = parse(input).unwrap();
        let uids: Vec<_> = ical.events().into_iter().filter_map(Component::uid).collect();
        assert_eq!(uids, ["1", "2"]);
    }

    #[test]
    fn empty_input_is_unexpected_eof() {
        for input in ["", "\r\n\r\n", "   \n", "no colon here"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::UnexpectedEof, "{input:?}");
        }
    }

    #[test]
    fn parse_all_returns_every_calendar() {
        let input = "BEGIN:VCALENDAR\nPRODID:a\nEND:VCALENDAR\nBEGIN:VCALENDAR\nPRODID:b\nEND:VCALENDAR";
        let calendars = parse_all(input).unwrap();
        let prodids: Vec<_> = calendars.iter().filter_map(ICalendar::prodid).collect();
        assert_eq!(prodids, ["a", "b"]);

        assert_eq!(parse(input).unwrap().prodid(), Some("a"));
    }

    #[test_log::test]
    fn unmatched_end_is_ignored() {
        let input = "END:VEVENT\nBEGIN:VCALENDAR\nVERSION:2.0\nEND:VCALENDAR\nEND:VCALENDAR";
        let ical = parse(input).unwrap();
        assert_eq!(ical.version(), Some("2.0"));
    }

    #[test]
    fn unclosed_components_are_attached() {
        let input = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nBEGIN:VALARM\nACTION:DISPLAY";
        let ical = parse(input).unwrap();
        let event = ical.events()[0];
        assert_eq!(event.uid(), Some("1"));
        assert_eq!(event.alarms()[0].get_text("ACTION"), Some("DISPLAY"));
    }

    #[test]
    fn unknown_components_keep_their_name() {
        let input = "BEGIN:VCALENDAR\nBEGIN:x-custom\nFOO:bar\nEND:X-CUSTOM\nEND:VCALENDAR";
        let ical = parse(input).unwrap();
        let child = &ical.as_component().children()[0];
        assert_eq!(child.kind(), ComponentKind::Unknown);
        assert_eq!(child.name(), "X-CUSTOM");
        assert_eq!(child.get_text("FOO"), Some("bar"));
    }

    #[test_log::test]
    fn unparseable_values_are_kept_raw() {
        let input = "BEGIN:VEVENT\nDTSTART:not-a-date\nRRULE:COUNT=3\nEND:VEVENT";
        let ical = parse(input).unwrap();
        let event = ical.events()[0];
        assert_eq!(
            event.get_value("DTSTART"),
            Some(&Value::Unknown("not-a-date".to_string()))
        );
        assert!(event.get_value("RRULE").is_some_and(Value::is_unknown));
    }

    #[test]
    fn unknown_value_type_is_kept_raw() {
        let ical = parse("BEGIN:VEVENT\nX-THING;VALUE=X-BLOB:abc\nEND:VEVENT").unwrap();
        assert_eq!(
            ical.events()[0].get_value("X-THING"),
            Some(&Value::Unknown("abc".to_string()))
        );
    }

    #[test]
    fn invalid_frequency_is_fatal() {
        let input = "BEGIN:VEVENT\nUID:1\nRRULE:FREQ=SOMETIMES\nEND:VEVENT";
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidFrequency);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn rrule_is_parsed() {
        let ical = parse("BEGIN:VEVENT\nRRULE:FREQ=MONTHLY;BYDAY=-1MO\nEND:VEVENT").unwrap();
        let rrule = ical.events()[0].get_recur("RRULE").unwrap();
        assert_eq!(rrule.freq, Frequency::Monthly);
        assert_eq!(rrule.by_day[0].ordinal, Some(-1));
    }

    #[test]
    fn parse_bytes_decodes_folds_inside_characters() {
        let mut input = b"BEGIN:VEVENT\r\nSUMMARY:caf\xC3".to_vec();
        input.extend_from_slice(b"\r\n \xA9\r\nEND:VEVENT");
        let ical = parse_bytes(&input).unwrap();
        assert_eq!(ical.events()[0].summary(), Some("café"));
        assert_eq!(parse_all_bytes(&input).unwrap().len(), 1);
    }
}

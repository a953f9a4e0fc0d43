//! Parse-then-serialize tests over whole documents.
//!
//! Canonical fixtures must come back byte for byte. Documents the producer
//! wrote differently (LF endings, other fold points) must come back with the
//! same structure.

use super::fixtures::*;
use crate::rfc::ical::ComponentView;
use crate::rfc::ical::build::{serialize, serialize_component};
use crate::rfc::ical::core::{Component, ComponentKind, Value};
use crate::rfc::ical::entity::{Event, ICalendar, Schedulable, Todo};
use crate::rfc::ical::parse::{parse, unfold};

fn reserialize(input: &str) -> String {
    let ical = parse(input).unwrap();
    serialize_component(ical.as_component())
}

/// Compares two trees by name, property lines and children.
fn assert_same_tree(left: &Component, right: &Component) {
    assert_eq!(left.name(), right.name());
    assert_eq!(left.properties(), right.properties(), "in {}", left.name());
    assert_eq!(left.children().len(), right.children().len());
    for (l, r) in left.children().iter().zip(right.children()) {
        assert_same_tree(l, r);
    }
}

#[test]
fn canonical_fixtures_round_trip_exactly() {
    for fixture in CANONICAL_FIXTURES {
        assert_eq!(&reserialize(fixture), fixture);
    }
}

#[test]
fn canonical_fixtures_pass_validation() {
    for fixture in CANONICAL_FIXTURES {
        let ical = parse(fixture).unwrap();
        assert_eq!(&serialize(&ical).unwrap(), fixture);
    }
}

#[test]
fn minimal_round_trip() {
    let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//x//y//EN\r\nBEGIN:VEVENT\r\nUID:1\r\nDTSTAMP:20200101T000000Z\r\nSUMMARY:Minimal\r\nEND:VEVENT\r\nEND:VCALENDAR";
    let ical = parse(&reserialize(input)).unwrap();

    assert_eq!(ical.version(), Some("2.0"));
    assert_eq!(ical.prodid(), Some("-//x//y//EN"));
    assert_eq!(ical.events().len(), 1);
    assert_eq!(ical.events()[0].uid(), Some("1"));
    assert_eq!(ical.events()[0].summary(), Some("Minimal"));
    assert_eq!(serialize_component(ical.as_component()), input);
}

#[test]
fn folded_lf_document_keeps_its_structure() {
    let first = parse(VEVENT_FOLDED_LF).unwrap();
    let text = serialize_component(first.as_component());

    assert!(!text.contains("\n\t"));
    assert!(text.split("\r\n").all(|line| line.len() <= 75));
    assert!(text.lines().any(|line| line.starts_with(' ')));

    let second = parse(&text).unwrap();
    assert_same_tree(first.as_component(), second.as_component());

    let description = second.events()[0].description().unwrap();
    assert!(description.starts_with("This description is long enough that it was folded by the producer"));
    assert!(description.ends_with("out, with the escaped comma intact."));
}

#[test]
fn serialized_output_unfolds_to_logical_lines() {
    let text = reserialize(VEVENT_FOLDED_LF);
    let logical = unfold(&text);
    assert!(logical.lines().any(|line| line.starts_with("DESCRIPTION:") && line.len() > 75));
}

#[test]
fn recurring_event_values_survive() {
    let ical = parse(&reserialize(VEVENT_RECURRING)).unwrap();
    let event = Event::from_component(ical.events()[0].clone()).unwrap();

    let rrule = event.rrule().unwrap();
    assert_eq!(rrule.count, Some(10));
    assert_eq!(rrule.by_day.len(), 1);
    assert_eq!(rrule.by_day[0].to_string(), "1FR");

    let exdates = event.exdates();
    assert_eq!(exdates.len(), 2);
    assert!(
        exdates
            .iter()
            .all(|d| d.as_datetime().and_then(|dt| dt.tzid()) == Some("America/New_York"))
    );

    let rdates = event.as_component().get_values("RDATE");
    assert_eq!(rdates.len(), 2);
    assert!(rdates.iter().all(|v| matches!(v, Value::Date(_))));
}

#[test]
fn todo_alarm_survives() {
    let ical = parse(&reserialize(VTODO_WITH_ALARM)).unwrap();
    let todo = Todo::from_component(ical.todos()[0].clone()).unwrap();

    assert_eq!(todo.priority(), Some(1));
    assert_eq!(todo.categories(), ["FAMILY", "FINANCE"]);
    let alarms = todo.alarms();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].action(), Some("AUDIO"));
}

#[test]
fn vendor_components_keep_their_names() {
    let ical = parse(VENDOR_EXTENSIONS).unwrap();
    let widget = &ical.as_component().children()[0];

    assert_eq!(widget.kind(), ComponentKind::Unknown);
    assert_eq!(widget.name(), "X-VENDOR-WIDGET");
    assert_eq!(widget.children()[0].name(), "X-NESTED");
    assert_eq!(widget.get_text("X-WIDGET-ID"), Some("42"));

    let event = ical.events()[0];
    assert_eq!(event.get_text("X-CUSTOM"), Some("custom, escaped text"));
    assert_eq!(
        event.get_property("X-CUSTOM").and_then(|p| p.get_param_value("X-PARAM")),
        Some("yes")
    );
}

#[test]
fn built_calendar_round_trips_through_parse() {
    use crate::rfc::ical::core::{DateTime, Duration};
    use crate::rfc::ical::entity::{Alarm, Stamped, Trigger};

    let mut event = Event::new("built-1@example.com", DateTime::utc(2026, 3, 1, 8, 0, 0));
    event.set_summary(Some("Planning; part 2"));
    event.set_dtstart(Some(DateTime::utc(2026, 3, 2, 9, 0, 0).into()));
    event.set_duration(Some(Duration::minutes(45)));
    event.add_attendee("mailto:jane@example.com", Some("Doe, Jane"));
    event.add_alarm(Alarm::display(
        Trigger::before_start(Duration::minutes(10)),
        "Planning starts soon",
    ));

    let mut ical = ICalendar::new("-//Example Corp//Planner 1.0//EN");
    ical.add_event(event);
    let text = serialize(&ical).unwrap();

    let parsed = parse(&text).unwrap();
    assert_same_tree(ical.as_component(), parsed.as_component());

    let again = parsed.event("built-1@example.com").unwrap();
    assert_eq!(again.summary(), Some("Planning; part 2"));
    assert_eq!(again.uid(), Some("built-1@example.com"));
    assert_eq!(again.attendees()[0].get_param_value("CN"), Some("Doe, Jane"));
    assert_eq!(serialize(&parsed).unwrap(), text);
}

#[test]
fn carriage_returns_in_text_stay_on_one_line() {
    use crate::rfc::ical::core::DateTime;

    let mut event = Event::new("crlf-1@example.com", DateTime::utc(2026, 3, 1, 8, 0, 0));
    event.set_description(Some("line one\r\nline two\rline three"));

    let mut ical = ICalendar::new("-//Example Corp//Planner 1.0//EN");
    ical.add_event(event);
    let text = serialize(&ical).unwrap();

    assert!(text.contains("DESCRIPTION:line one\\nline two\\nline three\r\n"));
    assert!(text.split("\r\n").all(|line| !line.contains('\r')));

    let parsed = parse(&text).unwrap();
    let again = parsed.event("crlf-1@example.com").unwrap();
    assert_eq!(again.description(), Some("line one\nline two\nline three"));
    assert_eq!(serialize(&parsed).unwrap(), text);
}

use super::*;
use crate::rfc::ical::parse::{parse, parse_duration, parse_rrule, try_parse_content_line};

#[test]
fn codec_errors_carry_no_position() {
    let err = parse_duration("P1X").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidDuration);
    assert!(!err.is_located());
    assert_eq!(err.to_string(), "malformed DURATION: \"P1X\"");
}

#[test]
fn located_error_names_line_and_column() {
    let err = ParseError::value(ParseErrorKind::InvalidFrequency)
        .with_context("FORTNIGHTLY")
        .at(7, 1);
    assert_eq!(
        err.to_string(),
        "unknown recurrence frequency at line 7, column 1: FORTNIGHTLY"
    );
}

#[test]
fn content_line_errors_point_into_the_line() {
    let err = try_parse_content_line("SUMMARY;CN=\"open:value", 4).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedQuote);
    assert_eq!(err.line, 4);
    assert!(err.column > 1);
    assert!(err.kind.is_structural());

    let err = try_parse_content_line("NO-COLON-HERE", 2).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingColon);
}

#[test]
fn unknown_frequency_aborts_and_missing_frequency_does_not() {
    assert!(parse_rrule("FREQ=SOMETIMES").unwrap_err().is_fatal());
    assert!(!parse_rrule("COUNT=3").unwrap_err().is_fatal());

    let err = parse("BEGIN:VEVENT\r\nUID:1\r\nRRULE:FREQ=SOMETIMES\r\nEND:VEVENT").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidFrequency);
    assert_eq!(err.line, 3);
}

#[test]
fn value_kinds_are_not_structural() {
    for kind in [
        ParseErrorKind::InvalidDate,
        ParseErrorKind::InvalidGeo,
        ParseErrorKind::InvalidWeekday,
        ParseErrorKind::InvalidBinary,
    ] {
        assert!(!kind.is_structural(), "{kind}");
        assert!(!kind.is_fatal(), "{kind}");
    }
}

#[test]
fn parse_error_is_a_std_error() {
    fn boxed(err: ParseError) -> Box<dyn std::error::Error> {
        Box::new(err)
    }
    let err = boxed(ParseError::new(ParseErrorKind::MissingPropertyName, 1, 1));
    assert_eq!(err.to_string(), "content line has no name at line 1, column 1");
}

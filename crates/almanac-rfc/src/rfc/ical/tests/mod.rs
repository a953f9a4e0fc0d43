//! Document-level tests for the iCalendar codec.

mod fixtures;
mod round_trip;

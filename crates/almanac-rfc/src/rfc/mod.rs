//! RFC 5545 iCalendar support.
//!
//! - `ical`: content lines, typed values, the component tree and entity views
//! - `validation`: structural rules applied before strict serialization

pub mod ical;
pub mod validation;

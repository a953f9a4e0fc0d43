//! RFC 5545 iCalendar parsing, typed values and serialization.

pub mod error;
pub mod rfc;

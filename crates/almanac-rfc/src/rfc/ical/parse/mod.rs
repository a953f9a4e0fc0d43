//! iCalendar parsing (RFC 5545).
//!
//! - `lexer`: line unfolding and content line tokenizing
//! - `values`: one codec per value type
//! - `parser`: tree assembly and document entry points

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{
    parse_content_line, split_lines, tokenize, tokenize_bytes, try_parse_content_line, unfold,
    unfold_bytes,
};
pub use parser::{parse, parse_all, parse_all_bytes, parse_bytes};
pub use values::{
    parse_binary, parse_boolean, parse_date, parse_datetime, parse_duration, parse_float,
    parse_geo, parse_integer, parse_period, parse_rrule, parse_time, parse_utc_offset,
    parse_value, split_multi_value, unescape_text,
};

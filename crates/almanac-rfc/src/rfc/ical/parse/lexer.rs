//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Normalizes line endings, undoes line folding and splits each logical line
//! into name, parameters and raw value.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Replaces CRLF and bare CR with LF.
fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits input into logical lines, merging folded continuations.
///
/// CRLF, LF and CR all end a line. A line starting with SPACE or TAB
/// continues the previous one: the first character is dropped and the rest
/// appended with no separator (RFC 5545 §3.1). Empty and whitespace-only
/// logical lines are dropped. Each line is paired with the 1-based number
/// of the physical line it started on.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let normalized = normalize_line_endings(input);
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, line) in normalized.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines.retain(|(_, line)| !line.trim().is_empty());
    lines
}

/// Unfolds text into logical lines joined by CRLF.
#[must_use]
pub fn unfold(input: &str) -> String {
    split_lines(input)
        .into_iter()
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Removes folds from raw bytes before any UTF-8 decoding.
///
/// Producers that fold inside a multi-byte sequence leave invalid UTF-8 on
/// each physical line; joining the bytes first restores the character.
/// Line endings in the result are normalized to LF.
#[must_use]
pub fn unfold_bytes(input: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len());
    let mut i = 0;

    while let Some(&byte) = input.get(i) {
        if byte == b'\r' || byte == b'\n' {
            let ending_len = if byte == b'\r' && input.get(i + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            if matches!(input.get(i + ending_len), Some(b' ' | b'\t')) {
                i += ending_len + 1;
            } else {
                result.push(b'\n');
                i += ending_len;
            }
        } else {
            result.push(byte);
            i += 1;
        }
    }

    result
}

/// Parses a single logical line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the name is empty, a quoted parameter value is not
/// closed, or no `:` follows the name and parameters.
pub fn try_parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let Some(name_end) = line.find([':', ';']) else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };

    let name = line[..name_end].trim().to_ascii_uppercase();
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    // `pos` always indexes the ';' or ':' that ended the previous token.
    let mut params = Vec::new();
    let mut pos = name_end;
    while line[pos..].starts_with(';') {
        let (param, next) = parse_parameter(line, pos + 1, line_num)?;
        params.push(param);
        pos = next;
    }

    Ok(ContentLine {
        name,
        params,
        raw_value: line[pos + 1..].to_string(),
    })
}

/// Parses a single logical line, returning `None` if it is malformed.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    try_parse_content_line(line, 0).ok()
}

/// Parses `NAME[=value[,value...]]` starting at `start`.
///
/// Returns the parameter and the position of the `;` or `:` that ends it.
fn parse_parameter(line: &str, start: usize, line_num: usize) -> ParseResult<(Parameter, usize)> {
    let Some(name_len) = line[start..].find(['=', ';', ':']) else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };
    let name = line[start..start + name_len].trim().to_ascii_uppercase();
    if name.is_empty() {
        return Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1)
                .with_context("empty parameter name"),
        );
    }

    let mut pos = start + name_len;
    if !line[pos..].starts_with('=') {
        return Ok((Parameter::new(name, ""), pos));
    }
    pos += 1;

    let mut values = Vec::new();
    loop {
        let (value, next) = parse_param_value(line, pos, line_num)?;
        values.push(value);
        pos = next;
        match line.as_bytes().get(pos) {
            Some(b',') => pos += 1,
            Some(b';' | b':') => break,
            _ => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, pos + 1)
                        .with_context(format!("parameter {name}")),
                );
            }
        }
    }

    Ok((Parameter::with_values(name, values), pos))
}

/// Parses one parameter value starting at `start`, quoted or not.
///
/// Returns the value and the position just past it.
fn parse_param_value(line: &str, start: usize, line_num: usize) -> ParseResult<(String, usize)> {
    if let Some(quoted) = line[start..].strip_prefix('"') {
        let Some(close) = quoted.find('"') else {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedQuote,
                line_num,
                start + 1,
            ));
        };
        return Ok((quoted[..close].to_string(), start + 1 + close + 1));
    }

    let Some(len) = line[start..].find([',', ';', ':']) else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };
    Ok((line[start..start + len].to_string(), start + len))
}

/// Tokenizes text into content lines paired with their starting line number.
pub(crate) fn tokenize_numbered(input: &str) -> Vec<(usize, ContentLine)> {
    split_lines(input)
        .into_iter()
        .filter_map(|(line_num, line)| match try_parse_content_line(&line, line_num) {
            Ok(content_line) => Some((line_num, content_line)),
            Err(error) => {
                tracing::debug!(line = line_num, %error, "Dropping malformed content line");
                None
            }
        })
        .collect()
}

/// Tokenizes text into content lines. Malformed lines are dropped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<ContentLine> {
    tokenize_numbered(input)
        .into_iter()
        .map(|(_, content_line)| content_line)
        .collect()
}

/// Decodes bytes after byte-level unfolding; invalid UTF-8 becomes U+FFFD.
pub(crate) fn decode_unfolded(input: &[u8]) -> String {
    String::from_utf8_lossy(&unfold_bytes(input)).into_owned()
}

/// Tokenizes raw bytes, unfolding before UTF-8 decoding.
#[must_use]
pub fn tokenize_bytes(input: &[u8]) -> Vec<ContentLine> {
    tokenize(&decode_unfolded(input))
}

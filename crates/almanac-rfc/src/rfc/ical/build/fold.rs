//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit.
///
/// The first segment holds up to 75 octets, each continuation one SPACE
/// plus up to 74 octets. A segment ends early rather than split a UTF-8
/// character. Segments are joined with CRLF; no CRLF is appended.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut segments = Vec::with_capacity(line.len() / (MAX_LINE_OCTETS - 1) + 1);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut end = limit;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        segments.push(head);
        rest = tail;
        limit = MAX_LINE_OCTETS - 1;
    }
    segments.push(rest);

    segments.join("\r\n ")
}

//! Escaping for TEXT values and parameter values.

const TEXT_SPECIALS: [char; 5] = ['\\', ',', ';', '\n', '\r'];

/// Escapes a TEXT value (RFC 5545 §3.3.11).
///
/// `\`, `,` and `;` gain a backslash. Every line break (CRLF, LF or a bare
/// CR) becomes `\n`, since a raw CR would end the content line.
#[must_use]
pub fn escape_text(s: &str) -> String {
    if !s.contains(TEXT_SPECIALS) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + s.len() / 8 + 1);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '\\' | ',' | ';' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Prepares a parameter value for writing.
///
/// Parameter values cannot contain `"`, so it is replaced by `'`. Values
/// containing `;`, `:` or `,` are wrapped in double quotes.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let value = s.replace('"', "'");
    if value.contains([';', ':', ',']) {
        format!("\"{value}\"")
    } else {
        value
    }
}

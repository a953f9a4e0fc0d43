//! Errors raised while reading iCalendar text.

use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

/// A parse failure, optionally located in the input.
///
/// Codecs report errors with `line == 0`; the document parser fills in the
/// position with [`ParseError::at`] when an error aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line, 0 when unknown.
    pub line: usize,
    /// 1-based column, 0 when unknown.
    pub column: usize,
    /// Offending input or a short explanation.
    pub context: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// An error from a value codec, not yet tied to a line.
    #[must_use]
    pub fn value(kind: ParseErrorKind) -> Self {
        Self::new(kind, 0, 0)
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    #[must_use]
    pub const fn is_located(&self) -> bool {
        self.line > 0
    }

    /// Whether the document parse must stop instead of keeping the raw
    /// value as `Value::Unknown`.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())?;
        if self.is_located() {
            write!(f, " at line {}, column {}", self.line, self.column)?;
        }
        match &self.context {
            Some(context) => write!(f, ": {context}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    // Document and content-line structure.
    UnexpectedEof,
    MissingPropertyName,
    MissingColon,
    InvalidParameter,
    UnclosedQuote,

    // Value codecs.
    InvalidDate,
    InvalidTime,
    InvalidDateTime,
    InvalidDuration,
    InvalidPeriod,
    InvalidUtcOffset,
    InvalidInteger,
    InvalidFloat,
    InvalidBinary,
    InvalidGeo,

    // Recurrence rules.
    InvalidRRule,
    InvalidFrequency,
    InvalidWeekday,
}

impl ParseErrorKind {
    /// Only an unknown `FREQ` is fatal: a rule without a usable frequency
    /// cannot be represented, while every other failure keeps the raw text.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::InvalidFrequency)
    }

    /// True for errors about the shape of a content line rather than its
    /// value.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::UnexpectedEof
                | Self::MissingPropertyName
                | Self::MissingColon
                | Self::InvalidParameter
                | Self::UnclosedQuote
        )
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedEof => "no content lines in input",
            Self::MissingPropertyName => "content line has no name",
            Self::MissingColon => "content line has no ':' before its value",
            Self::InvalidParameter => "malformed parameter",
            Self::UnclosedQuote => "quoted parameter value is not closed",
            Self::InvalidDate => "malformed DATE",
            Self::InvalidTime => "malformed TIME",
            Self::InvalidDateTime => "malformed DATE-TIME",
            Self::InvalidDuration => "malformed DURATION",
            Self::InvalidPeriod => "malformed PERIOD",
            Self::InvalidUtcOffset => "malformed UTC-OFFSET",
            Self::InvalidInteger => "malformed INTEGER",
            Self::InvalidFloat => "malformed FLOAT",
            Self::InvalidBinary => "BINARY value is not valid base64",
            Self::InvalidGeo => "malformed GEO",
            Self::InvalidRRule => "malformed RECUR",
            Self::InvalidFrequency => "unknown recurrence frequency",
            Self::InvalidWeekday => "unknown weekday",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

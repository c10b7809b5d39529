//! Parse error types.
//!
//! Errors raised when finalizing an accumulated stream: empty streams,
//! JSON that cannot be parsed even after repair, and decoded objects that
//! do not match the expected shape.

use std::fmt;

/// Error produced while finalizing a structured stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parse error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Stream completed with no usable content
    EmptyStream,
    /// Accumulated text is not valid JSON, even after repair
    JsonParse {
        /// The raw candidate text, for diagnostics
        raw: String,
        /// Description of the underlying JSON error
        message: String,
    },
    /// Decoded JSON does not match the expected shape
    SchemaValidation {
        /// The offending field
        field: String,
        /// Why the field failed validation
        reason: String,
    },
}

impl ParseError {
    /// Creates a new ParseError with the given kind.
    #[must_use]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty stream error.
    #[must_use]
    pub fn empty_stream() -> Self {
        Self::new(ParseErrorKind::EmptyStream)
    }

    /// Creates a JSON parse error carrying the raw candidate text.
    #[must_use]
    pub fn json_parse(raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::JsonParse {
            raw: raw.into(),
            message: message.into(),
        })
    }

    /// Creates a schema validation error naming the offending field.
    #[must_use]
    pub fn schema_validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::SchemaValidation {
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Returns true if the stream completed with no usable content.
    #[must_use]
    pub fn is_empty_stream(&self) -> bool {
        matches!(self.kind, ParseErrorKind::EmptyStream)
    }

    /// Returns true if the accumulated text failed to parse as JSON.
    #[must_use]
    pub fn is_json_parse(&self) -> bool {
        matches!(self.kind, ParseErrorKind::JsonParse { .. })
    }

    /// Returns true if the decoded object failed shape validation.
    #[must_use]
    pub fn is_schema_validation(&self) -> bool {
        matches!(self.kind, ParseErrorKind::SchemaValidation { .. })
    }

    /// Returns the raw candidate text for JSON parse errors.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::JsonParse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Returns the offending field for schema validation errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::SchemaValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::EmptyStream => {
                write!(f, "no data received: stream completed with an empty buffer")
            }
            ParseErrorKind::JsonParse { raw, message } => {
                write!(
                    f,
                    "failed to parse structured payload as JSON: {}; raw text: {:?}",
                    message, raw
                )
            }
            ParseErrorKind::SchemaValidation { field, reason } => {
                write!(f, "schema validation failed for field '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}

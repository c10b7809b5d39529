//! Stream accumulation and finalization.
//!
//! A [`StreamAccumulator`] collects text fragments from one streaming
//! completion in arrival order. Once the upstream stream signals completion,
//! [`StreamAccumulator::finalize`] splits off any reasoning block, parses the
//! remaining JSON (with a best-effort textual repair fallback), validates it
//! against a [`SchemaShape`], and deserializes it into the caller's type.
//!
//! `finalize` consumes the accumulator, so a finished stream cannot accept
//! late fragments and a result cannot be produced twice.

use crate::parser::error::ParseError;
use crate::parser::repair::repair;
use crate::parser::split::ReasoningMarkers;
use crate::schema::{SchemaShape, ROOT_FIELD};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// A parsed structured response: the optional reasoning preamble plus the
/// validated payload value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredResult<T> {
    /// Reasoning text emitted before the payload, if any
    pub reasoning: Option<String>,
    /// The validated payload
    pub value: T,
}

/// Accumulator for one streaming structured response.
///
/// Owned by a single logical caller; independent streams each get their own
/// accumulator and share nothing.
#[derive(Debug, Clone)]
pub struct StreamAccumulator {
    /// Accumulated text content
    buffer: String,
    /// Number of fragments received
    fragments: usize,
    /// Markers delimiting the reasoning block
    markers: ReasoningMarkers,
}

impl Default for StreamAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAccumulator {
    /// Creates an accumulator with the default `<think>`/`</think>` markers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_markers(ReasoningMarkers::default())
    }

    /// Creates an accumulator with custom reasoning markers.
    #[must_use]
    pub fn with_markers(markers: ReasoningMarkers) -> Self {
        Self {
            buffer: String::new(),
            fragments: 0,
            markers,
        }
    }

    /// Appends a fragment to the buffer.
    ///
    /// Fragments must be pushed in arrival order; empty fragments are
    /// accepted and contribute nothing.
    pub fn push_fragment(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
        self.fragments += 1;
        trace!(
            fragment_len = fragment.len(),
            buffer_len = self.buffer.len(),
            "accumulated fragment"
        );
    }

    /// Returns the accumulated text so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the number of fragments received.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    /// Returns true if no text has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finalizes the stream: splits off the reasoning block, parses the
    /// payload, validates it against `schema`, and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// - [`ParseErrorKind::EmptyStream`](crate::parser::ParseErrorKind::EmptyStream)
    ///   when the buffer holds no usable content.
    /// - [`ParseErrorKind::JsonParse`](crate::parser::ParseErrorKind::JsonParse)
    ///   when the payload is not valid JSON even after repair; carries the
    ///   raw candidate text.
    /// - [`ParseErrorKind::SchemaValidation`](crate::parser::ParseErrorKind::SchemaValidation)
    ///   when the decoded object does not satisfy `schema`, naming the
    ///   offending field.
    pub fn finalize<T>(self, schema: &SchemaShape) -> Result<StructuredResult<T>, ParseError>
    where
        T: DeserializeOwned,
    {
        if self.buffer.trim().is_empty() {
            return Err(ParseError::empty_stream());
        }

        let split = self.markers.split(&self.buffer);
        let candidate = split.payload.trim();

        let decoded = parse_candidate(candidate)?;
        schema.validate(&decoded)?;

        // Shape validation is shallow; a nested mismatch can still fail here.
        let value = serde_json::from_value(decoded)
            .map_err(|e| ParseError::schema_validation(ROOT_FIELD, e.to_string()))?;

        Ok(StructuredResult {
            reasoning: split.reasoning,
            value,
        })
    }
}

/// Parses the payload candidate, falling back to textual repair on failure.
fn parse_candidate(candidate: &str) -> Result<serde_json::Value, ParseError> {
    match serde_json::from_str(candidate) {
        Ok(value) => Ok(value),
        Err(direct_err) => {
            if let Some(repaired) = repair(candidate) {
                debug!(candidate_len = candidate.len(), "attempting brace-wrap repair");
                if let Ok(value) = serde_json::from_str(&repaired) {
                    return Ok(value);
                }
            }
            debug!(error = %direct_err, "payload failed to parse as JSON");
            Err(ParseError::json_parse(candidate, direct_err.to_string()))
        }
    }
}

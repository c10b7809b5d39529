//! Reasoning-block extraction.
//!
//! Reasoning-capable models (e.g. DeepSeek-R1) emit a free-text "thinking"
//! preamble delimited by marker tags before the structured payload. This
//! module separates the two.

/// Marker pair delimiting a reasoning block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningMarkers {
    /// Marker that opens the reasoning block
    start: String,
    /// Marker that closes the reasoning block
    end: String,
}

/// Result of splitting model output into reasoning and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningSplit {
    /// Trimmed text between the markers, if a complete pair was found
    pub reasoning: Option<String>,
    /// The structured-payload candidate; the whole input when no pair was found
    pub payload: String,
}

impl Default for ReasoningMarkers {
    fn default() -> Self {
        Self::new("<think>", "</think>")
    }
}

impl ReasoningMarkers {
    /// Creates a marker pair with the given start and end tags.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the start marker.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end marker.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Splits `text` into an optional reasoning block and the payload
    /// candidate.
    ///
    /// The reasoning block is the text between the first start marker and the
    /// first end marker after it, trimmed of surrounding whitespace. The
    /// payload is everything after the end marker. When no complete marker
    /// pair is present the whole input is the payload and `reasoning` is
    /// `None`. Pure function; calling it twice on the same input yields
    /// identical results.
    #[must_use]
    pub fn split(&self, text: &str) -> ReasoningSplit {
        if let Some(start_idx) = text.find(&self.start) {
            let body_start = start_idx + self.start.len();
            if let Some(end_offset) = text[body_start..].find(&self.end) {
                let reasoning = text[body_start..body_start + end_offset].trim().to_string();
                let payload = text[body_start + end_offset + self.end.len()..].to_string();
                return ReasoningSplit {
                    reasoning: Some(reasoning),
                    payload,
                };
            }
        }

        ReasoningSplit {
            reasoning: None,
            payload: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_with_marker_pair() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("<think>Let me analyze this</think>{\"a\": 1}");

        assert_eq!(result.reasoning.as_deref(), Some("Let me analyze this"));
        assert_eq!(result.payload, "{\"a\": 1}");
    }

    #[test]
    fn split_without_markers() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("{\"a\": 1}");

        assert_eq!(result.reasoning, None);
        assert_eq!(result.payload, "{\"a\": 1}");
    }

    #[test]
    fn split_trims_reasoning() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("<think>\n  thinking...\n</think>{}");

        assert_eq!(result.reasoning.as_deref(), Some("thinking..."));
    }

    #[test]
    fn split_with_unclosed_marker_keeps_whole_input() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("<think>never closed {\"a\": 1}");

        assert_eq!(result.reasoning, None);
        assert_eq!(result.payload, "<think>never closed {\"a\": 1}");
    }

    #[test]
    fn split_empty_input() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("");

        assert_eq!(result.reasoning, None);
        assert_eq!(result.payload, "");
    }

    #[test]
    fn split_empty_reasoning_block() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("<think></think>{\"a\": 1}");

        assert_eq!(result.reasoning.as_deref(), Some(""));
        assert_eq!(result.payload, "{\"a\": 1}");
    }

    #[test]
    fn split_drops_text_before_start_marker() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("Sure! <think>hmm</think>{\"a\": 1}");

        assert_eq!(result.reasoning.as_deref(), Some("hmm"));
        assert_eq!(result.payload, "{\"a\": 1}");
    }

    #[test]
    fn split_is_idempotent() {
        let markers = ReasoningMarkers::default();
        let input = "<think>ok</think>{\"a\": 1}";

        let first = markers.split(input);
        let second = markers.split(input);

        assert_eq!(first, second);
    }

    #[test]
    fn split_with_custom_markers() {
        let markers = ReasoningMarkers::new("<reasoning>", "</reasoning>");
        let result = markers.split("<reasoning>steps</reasoning>{\"b\": 2}");

        assert_eq!(result.reasoning.as_deref(), Some("steps"));
        assert_eq!(result.payload, "{\"b\": 2}");
    }

    #[test]
    fn split_uses_first_end_marker() {
        let markers = ReasoningMarkers::default();
        let result = markers.split("<think>a</think>middle</think>{\"a\": 1}");

        assert_eq!(result.reasoning.as_deref(), Some("a"));
        assert_eq!(result.payload, "middle</think>{\"a\": 1}");
    }
}

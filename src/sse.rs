//! Chat-completion SSE chunk decoding.
//!
//! Decodes the `data: {...}` lines emitted by OpenAI-compatible streaming
//! chat-completion endpoints into the text fragments the parser consumes.
//! This is pure text decoding; reading bytes off the wire is the transport's
//! job.

use serde::Deserialize;

/// Streaming chunk from an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChunk {
    /// Response ID assigned by the provider
    #[serde(default)]
    pub id: Option<String>,
    /// The choices in this chunk
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

/// A choice in a streaming chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    /// Incremental content for this choice
    #[serde(default)]
    pub delta: ChunkDelta,
    /// Set on the final chunk of a choice
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Delta content in a streaming chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    /// Text content generated in this chunk
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Returns the text content of the first choice, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
    }
}

/// Parses one SSE line into a chunk.
///
/// Returns `None` for lines without a `data: ` prefix, for the `[DONE]`
/// sentinel, and for lines that fail to decode — undecodable lines are
/// skipped rather than failing the stream, since keep-alive comments and
/// partial lines are routine in SSE traffic.
#[must_use]
pub fn parse_sse_line(line: &str) -> Option<ChatCompletionChunk> {
    let data = line.strip_prefix("data: ")?;

    if data == "[DONE]" {
        return None;
    }

    serde_json::from_str(data).ok()
}

/// Extracts the content fragments from a block of SSE text, in order.
#[must_use]
pub fn content_fragments(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(parse_sse_line)
        .filter_map(|chunk| chunk.content().map(String::from))
        .collect()
}

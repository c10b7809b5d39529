//! # structured-stream: streaming structured-output parsing
//!
//! Converts the text fragments emitted by a streaming chat-completion API
//! into one validated structured value. Reasoning-capable models interleave
//! a free-text "thinking" preamble with the JSON payload; this crate
//! separates the two, accumulates fragments in arrival order, applies a
//! best-effort textual repair to near-JSON payloads, and validates the
//! decoded object against a declared shape before handing it back as a
//! typed value.
//!
//! ## Architecture
//!
//! - **Parser**: per-request [`StreamAccumulator`](parser::StreamAccumulator)
//!   with ordered append and a consuming `finalize`
//! - **Schema**: structural [`SchemaShape`](schema::SchemaShape) validation
//!   of decoded objects (required fields, type compatibility)
//! - **SSE**: decoding of OpenAI-compatible `data:` chunk lines into
//!   fragments
//!
//! The crate performs no I/O: fragment delivery, retries, and cancellation
//! belong to the transport and the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use structured_stream::prelude::*;
//!
//! let mut acc = StreamAccumulator::new();
//! for fragment in ["<think>", "ok", "</think>", "{\"a\":", " 1}"] {
//!     acc.push_fragment(fragment);
//! }
//!
//! let schema = SchemaShape::new().required("a", FieldType::Integer);
//! let result: StructuredResult<serde_json::Value> = acc.finalize(&schema).unwrap();
//!
//! assert_eq!(result.reasoning.as_deref(), Some("ok"));
//! assert_eq!(result.value["a"], 1);
//! ```

pub mod parser;
pub mod schema;
pub mod sse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::parser::{
        collect_structured, collect_structured_with, ParseError, ParseErrorKind,
        ReasoningMarkers, ReasoningSplit, StreamAccumulator, StructuredResult,
    };
    pub use crate::schema::{FieldType, SchemaShape};
    pub use crate::sse::{content_fragments, parse_sse_line, ChatCompletionChunk};
}

//! Streaming structured-response parsing.
//!
//! This module contains the stream accumulator, the reasoning-block splitter,
//! the textual repair heuristic, and the parse error types.

mod accumulator;
mod collect;
mod error;
mod repair;
mod split;

pub use accumulator::{StreamAccumulator, StructuredResult};
pub use collect::{collect_structured, collect_structured_with};
pub use error::{ParseError, ParseErrorKind};
pub use repair::repair;
pub use split::{ReasoningMarkers, ReasoningSplit};

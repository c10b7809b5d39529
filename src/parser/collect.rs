//! Async draining of fragment streams.
//!
//! Helpers that consume a `futures::Stream` of text fragments and finalize
//! the result in one call. Transport errors are the caller's concern; by the
//! time fragments reach these helpers they are plain strings.

use crate::parser::accumulator::{StreamAccumulator, StructuredResult};
use crate::parser::error::ParseError;
use crate::schema::SchemaShape;
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;

/// Drains a fragment stream through a fresh accumulator and finalizes it.
///
/// # Errors
///
/// Returns the same errors as [`StreamAccumulator::finalize`].
pub async fn collect_structured<T, S>(
    fragments: S,
    schema: &SchemaShape,
) -> Result<StructuredResult<T>, ParseError>
where
    T: DeserializeOwned,
    S: Stream<Item = String> + Unpin,
{
    collect_structured_with(fragments, StreamAccumulator::new(), schema).await
}

/// Drains a fragment stream through a caller-built accumulator (e.g. one
/// configured with custom reasoning markers) and finalizes it.
///
/// # Errors
///
/// Returns the same errors as [`StreamAccumulator::finalize`].
pub async fn collect_structured_with<T, S>(
    mut fragments: S,
    mut accumulator: StreamAccumulator,
    schema: &SchemaShape,
) -> Result<StructuredResult<T>, ParseError>
where
    T: DeserializeOwned,
    S: Stream<Item = String> + Unpin,
{
    while let Some(fragment) = fragments.next().await {
        accumulator.push_fragment(&fragment);
    }
    accumulator.finalize(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::split::ReasoningMarkers;
    use crate::schema::FieldType;
    use futures::stream;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn collects_and_finalizes() {
        let fragments = stream::iter(
            ["<think>", "ok", "</think>", "{\"a\":", " 1}"]
                .into_iter()
                .map(String::from),
        );
        let schema = SchemaShape::new().required("a", FieldType::Integer);

        let result: StructuredResult<Value> =
            collect_structured(fragments, &schema).await.unwrap();

        assert_eq!(result.reasoning.as_deref(), Some("ok"));
        assert_eq!(result.value, json!({"a": 1}));
    }

    #[test]
    fn empty_stream_fails() {
        let fragments = stream::iter(Vec::<String>::new());

        let error = tokio_test::block_on(collect_structured::<Value, _>(
            fragments,
            &SchemaShape::new(),
        ))
        .unwrap_err();

        assert!(error.is_empty_stream());
    }

    #[tokio::test]
    async fn custom_markers_via_accumulator() {
        let fragments = stream::iter(
            ["<r>", "why", "</r>", "{\"b\": true}"].into_iter().map(String::from),
        );
        let accumulator =
            StreamAccumulator::with_markers(ReasoningMarkers::new("<r>", "</r>"));
        let schema = SchemaShape::new().required("b", FieldType::Boolean);

        let result: StructuredResult<Value> =
            collect_structured_with(fragments, accumulator, &schema)
                .await
                .unwrap();

        assert_eq!(result.reasoning.as_deref(), Some("why"));
        assert_eq!(result.value, json!({"b": true}));
    }
}

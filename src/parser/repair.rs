//! Textual repair of near-JSON payloads.
//!
//! Models sometimes emit the body of a JSON object without the surrounding
//! braces. The repair heuristic wraps such text so a second parse attempt
//! can succeed. It is best-effort and only consulted after a direct parse
//! has already failed.

/// Attempts a textual repair of a payload candidate that failed to parse.
///
/// Returns the brace-wrapped candidate when it looks like the body of an
/// object (does not start with `{` but contains a `:` key-value separator),
/// `None` when no repair applies. The caller re-attempts the parse on the
/// returned text; a failure there still surfaces the original candidate.
#[must_use]
pub fn repair(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        return None;
    }
    if !trimmed.contains(':') {
        return None;
    }
    Some(format!("{{{}}}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_key_value_text() {
        let repaired = repair("\"message\": \"hi\", \"confidence\": 0.5").unwrap();
        assert_eq!(repaired, "{\"message\": \"hi\", \"confidence\": 0.5}");
    }

    #[test]
    fn trims_before_wrapping() {
        let repaired = repair("  \"a\": 1\n").unwrap();
        assert_eq!(repaired, "{\"a\": 1}");
    }

    #[test]
    fn skips_text_already_starting_with_brace() {
        assert_eq!(repair("{\"a\": 1}"), None);
        assert_eq!(repair("  {broken"), None);
    }

    #[test]
    fn skips_text_without_key_value_separator() {
        assert_eq!(repair("just some prose"), None);
    }

    #[test]
    fn skips_empty_candidate() {
        assert_eq!(repair(""), None);
        assert_eq!(repair("   \n"), None);
    }
}

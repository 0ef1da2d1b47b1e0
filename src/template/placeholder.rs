//! Placeholder extraction for template bodies.
//!
//! Templates embed a small marker language inside `{{` / `}}` delimiters:
//!
//! - `{{identifier}}` - variable with an empty default
//! - `{{identifier=default text}}` - variable with a default offered at
//!   prompt time
//! - `{{__name}}` - built-in function reference
//! - `{{!free text}}` - comment, removed entirely on substitution
//!
//! The marker pattern stops at the first `}` inside the delimiters, so
//! nested braces are not supported and truncate the match early. This
//! matches the historical behavior of the template format and existing
//! template files depend on it; changing it would require `}}` to be the
//! only terminator and is deliberately left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one `{{...}}` marker. `[^}]+` makes the inner content end at
/// the first `}`, mirroring the original format.
pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("invalid placeholder regex"));

/// Classification of a placeholder marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// User-supplied value, collected interactively.
    Variable,
    /// Zero-argument function resolved from the builtin registry.
    BuiltIn,
    /// Removed entirely on substitution; never prompted for.
    Comment,
}

/// A classified marker found inside `{{` / `}}` delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// Identifier (for `Variable`/`BuiltIn`) or comment text (for `Comment`).
    pub key: String,
    /// Text after the first `=` for `Variable` markers; empty otherwise.
    /// Only ever used to seed the interactive prompt, never as a
    /// substitution fallback.
    pub default_value: String,
}

impl Placeholder {
    fn variable(key: &str, default_value: &str) -> Self {
        Self {
            kind: PlaceholderKind::Variable,
            key: key.to_string(),
            default_value: default_value.to_string(),
        }
    }

    fn built_in(key: &str) -> Self {
        Self {
            kind: PlaceholderKind::BuiltIn,
            key: key.to_string(),
            default_value: String::new(),
        }
    }

    fn comment(key: &str) -> Self {
        Self {
            kind: PlaceholderKind::Comment,
            key: key.to_string(),
            default_value: String::new(),
        }
    }
}

/// Classify the inner text of one marker.
///
/// The kind is determined purely by the first characters of the trimmed
/// inner text: `__` means builtin, `!` means comment, anything else is a
/// variable. Variables split on the first `=` only; both sides are trimmed.
///
/// Shared between [`extract`] and the substitutor so the two passes can
/// never disagree on a marker's kind.
pub(crate) fn classify(inner: &str) -> Placeholder {
    let inner = inner.trim();

    if let Some(name) = inner.strip_prefix("__") {
        return Placeholder::built_in(name);
    }

    if let Some(text) = inner.strip_prefix('!') {
        return Placeholder::comment(text);
    }

    match inner.split_once('=') {
        Some((key, default_value)) => Placeholder::variable(key.trim(), default_value.trim()),
        None => Placeholder::variable(inner, ""),
    }
}

/// Extract every placeholder from `text`, in order of appearance.
///
/// Duplicate keys each yield their own descriptor; deduplication for
/// prompting is [`unique_variables`]'s job. Pure function, never fails:
/// malformed markers (e.g. an unmatched `{{`) simply produce no match.
pub fn extract(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| classify(&caps[1]))
        .collect()
}

/// Filter to `Variable` placeholders, deduplicated by key.
///
/// The first occurrence of each key wins (so its default is the one
/// offered at the prompt) and first-occurrence order is preserved.
pub fn unique_variables(placeholders: &[Placeholder]) -> Vec<&Placeholder> {
    let mut seen = std::collections::HashSet::new();
    placeholders
        .iter()
        .filter(|p| p.kind == PlaceholderKind::Variable)
        .filter(|p| seen.insert(p.key.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_yields_nothing() {
        assert!(extract("no markers here").is_empty());
        assert!(extract("").is_empty());
        assert!(extract("single {brace} only").is_empty());
    }

    #[test]
    fn extracts_variable_without_default() {
        let placeholders = extract("{{foo}}");
        assert_eq!(placeholders, vec![Placeholder::variable("foo", "")]);
    }

    #[test]
    fn extracts_variable_with_default() {
        let placeholders = extract("{{foo=bar}}");
        assert_eq!(placeholders, vec![Placeholder::variable("foo", "bar")]);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let placeholders = extract("{{url=https://example.com/?a=b}}");
        assert_eq!(
            placeholders,
            vec![Placeholder::variable("url", "https://example.com/?a=b")]
        );
    }

    #[test]
    fn trims_key_and_default() {
        let placeholders = extract("{{ name = World }}");
        assert_eq!(placeholders, vec![Placeholder::variable("name", "World")]);
    }

    #[test]
    fn extracts_builtin() {
        let placeholders = extract("{{__uuid}}");
        assert_eq!(placeholders, vec![Placeholder::built_in("uuid")]);
    }

    #[test]
    fn extracts_comment() {
        let placeholders = extract("{{!note}}");
        assert_eq!(placeholders, vec![Placeholder::comment("note")]);
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let placeholders = extract("{{b}} {{!c}} {{__year}} {{a}}");
        let keys: Vec<&str> = placeholders.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "c", "year", "a"]);
    }

    #[test]
    fn duplicates_are_not_deduplicated_by_extract() {
        let placeholders = extract("{{x}} and {{x}} again");
        assert_eq!(placeholders.len(), 2);
    }

    #[test]
    fn inner_content_stops_at_first_closing_brace() {
        // Nested braces are unsupported: inner content cannot contain `}`,
        // so an inner `{{` is swallowed into the outer marker's key.
        let placeholders = extract("{{outer {{inner}}");
        assert_eq!(
            placeholders,
            vec![Placeholder::variable("outer {{inner", "")]
        );
        let placeholders = extract("{{a}}}");
        assert_eq!(placeholders, vec![Placeholder::variable("a", "")]);
    }

    #[test]
    fn unmatched_open_marker_is_not_an_error() {
        assert!(extract("dangling {{never closed").is_empty());
    }

    #[test]
    fn empty_marker_is_not_a_match() {
        // `[^}]+` requires at least one character of inner content.
        assert!(extract("{{}}").is_empty());
    }

    #[test]
    fn unique_variables_dedupes_by_key_keeping_first_default() {
        let placeholders = extract("{{name=first}} {{other}} {{name=second}}");
        let unique = unique_variables(&placeholders);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].key, "name");
        assert_eq!(unique[0].default_value, "first");
        assert_eq!(unique[1].key, "other");
    }

    #[test]
    fn unique_variables_excludes_builtins_and_comments() {
        let placeholders = extract("{{__year}} {{!note}} {{name}}");
        let unique = unique_variables(&placeholders);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].key, "name");
    }

    #[test]
    fn classify_is_prefix_driven() {
        assert_eq!(classify("__year").kind, PlaceholderKind::BuiltIn);
        assert_eq!(classify("!anything at all").kind, PlaceholderKind::Comment);
        assert_eq!(classify("plain").kind, PlaceholderKind::Variable);
        // Prefixes are stripped from the key.
        assert_eq!(classify("__year").key, "year");
        assert_eq!(classify("!drop this").key, "drop this");
    }
}

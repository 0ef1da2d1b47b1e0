//! Placeholder substitution for template bodies.
//!
//! Re-scans the raw template text with the same marker pattern and
//! classification rules as the extractor and replaces every marker:
//!
//! - comments are removed,
//! - builtins are looked up in the registry and invoked per occurrence,
//! - variables are looked up by key in the supplied map.
//!
//! Missing variables and unknown builtins render as empty strings rather
//! than failing; partial input still produces best-effort output. Note in
//! particular that a variable's `=default` text is NOT used as a fallback
//! here. The default only seeds the interactive prompt, so a key absent
//! from `variables` renders empty even when the marker carries a default.
//! Inherited behavior, kept deliberately; see DESIGN.md.

use crate::template::builtins::BuiltinRegistry;
use crate::template::placeholder::{PLACEHOLDER_REGEX, PlaceholderKind, classify};
use regex::Captures;
use std::collections::HashMap;

/// Replace every `{{...}}` marker in `text`. Content outside markers is
/// unchanged byte-for-byte; text without markers passes through untouched.
pub fn substitute(
    text: &str,
    variables: &HashMap<String, String>,
    builtins: &BuiltinRegistry,
) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| {
            let placeholder = classify(&caps[1]);
            match placeholder.kind {
                PlaceholderKind::Comment => String::new(),
                PlaceholderKind::BuiltIn => builtins.call(&placeholder.key).unwrap_or_default(),
                PlaceholderKind::Variable => variables
                    .get(&placeholder.key)
                    .cloned()
                    .unwrap_or_default(),
            }
        })
        .into_owned()
}

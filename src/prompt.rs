//! Interactive prompting for tbox.
//!
//! Thin wrappers around `inquire`. All the interesting logic (which keys to
//! prompt for, in which order, with which defaults) is decided by pure
//! functions in the `template` module; this module only performs the
//! terminal I/O, so it stays untested and small.

use crate::error::{Result, TboxError};
use crate::template::{Placeholder, unique_variables};
use inquire::{Confirm, Text};
use std::collections::HashMap;

/// Collect values for every unique `Variable` placeholder.
///
/// One prompt per unique key, in first-occurrence order, offering the
/// placeholder's default as the prefilled answer. An empty submission
/// accepts the default.
pub fn collect_variables(placeholders: &[Placeholder]) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();

    for placeholder in unique_variables(placeholders) {
        let answer = Text::new(&placeholder.key)
            .with_default(&placeholder.default_value)
            .prompt()
            .map_err(prompt_error)?;
        values.insert(placeholder.key.clone(), answer);
    }

    Ok(values)
}

/// Yes/no confirmation, defaulting to "no".
pub fn confirm(message: &str) -> Result<bool> {
    Confirm::new(message)
        .with_default(false)
        .prompt()
        .map_err(prompt_error)
}

/// Free-text prompt with a prefilled current value. Used by `alias edit`.
pub fn text(message: &str, current: &str) -> Result<String> {
    Text::new(message)
        .with_default(current)
        .prompt()
        .map_err(prompt_error)
}

fn prompt_error(err: inquire::InquireError) -> TboxError {
    TboxError::UserError(format!("prompt cancelled: {}", err))
}

//! External editor invocation.
//!
//! The configured editor command may carry its own arguments (for example
//! `code --wait`), so it is split into shell words before spawning. The
//! target file path is appended as the final argument and the editor
//! inherits the terminal.

use crate::error::{Result, TboxError};
use std::path::Path;
use std::process::Command;

/// Open `path` in the configured editor and wait for it to exit.
pub fn open(editor: &str, path: &Path) -> Result<()> {
    let mut words = shell_words::split(editor).map_err(|e| {
        TboxError::ConfigError(format!("invalid editor command '{}': {}", editor, e))
    })?;

    if words.is_empty() {
        return Err(TboxError::ConfigError(
            "editor command is empty".to_string(),
        ));
    }

    let program = words.remove(0);
    let status = Command::new(&program)
        .args(&words)
        .arg(path)
        .status()
        .map_err(|e| TboxError::EditorError(format!("failed to launch '{}': {}", program, e)))?;

    if !status.success() {
        return Err(TboxError::EditorError(format!(
            "'{}' exited with {}",
            editor, status
        )));
    }

    Ok(())
}

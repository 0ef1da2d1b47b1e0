//! Error types for the tbox CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tbox operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum TboxError {
    /// User provided invalid arguments, referenced a missing template or
    /// alias, or cancelled an interactive prompt.
    #[error("{0}")]
    UserError(String),

    /// Configuration file exists but failed schema validation.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// The configured editor could not be launched or exited non-zero.
    #[error("editor failed: {0}")]
    EditorError(String),
}

impl TboxError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TboxError::UserError(_) => exit_codes::USER_ERROR,
            TboxError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            TboxError::EditorError(_) => exit_codes::EDITOR_FAILURE,
        }
    }
}

/// Result type alias for tbox operations.
pub type Result<T> = std::result::Result<T, TboxError>;

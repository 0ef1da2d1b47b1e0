//! Command implementations for tbox.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler resolves the state directory context
//! itself, so `main` stays a thin shell.

mod alias;
mod template;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Template(cmd) => template::dispatch(cmd),
        Command::Alias(cmd) => alias::dispatch(cmd),
    }
}

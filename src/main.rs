//! Tbox: personal CLI for reusable text templates and command aliases.
//!
//! This is the main entry point for the `tbox` CLI. It ensures the state
//! directory exists, expands aliases in argv, parses arguments, dispatches
//! to the appropriate command handler, and handles errors with proper exit
//! codes.

mod cli;
mod commands;
pub mod alias;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
pub mod template;

use cli::Cli;
use context::Context;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // First-run setup and alias expansion are best-effort: a broken state
    // directory must not prevent `tbox --help` from working.
    let args = match Context::resolve() {
        Ok(ctx) => {
            if let Err(err) = config::setup(&ctx) {
                eprintln!("Warning: {}", err);
            }
            let aliases = alias::load(&ctx);
            alias::expand_args(args, &aliases.aliases)
        }
        Err(_) => args,
    };

    let cli = Cli::parse_args_from(args);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

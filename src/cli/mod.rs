//! CLI argument parsing for tbox.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.
//!
//! Parsing goes through [`Cli::parse_args_from`] rather than `Cli::parse`
//! so that alias expansion can rewrite argv first.

use clap::{Parser, Subcommand};

/// Tbox: personal CLI for reusable text templates and command aliases.
///
/// Templates are plain text files with `{{placeholder}}` markers, stored
/// under `~/.tbox/templates/`. Aliases are shorthand names that expand to
/// longer tbox invocations before argument parsing.
#[derive(Parser, Debug)]
#[command(name = "tbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tbox.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage templates.
    Template(TemplateCommand),

    /// Manage aliases for commands.
    Alias(AliasCommand),
}

/// Template subcommands.
#[derive(Parser, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Available template actions.
#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Create a new empty template.
    Create(TemplateCreateArgs),

    /// Render a template to a file, prompting for placeholder values.
    Use(TemplateUseArgs),

    /// Print the raw content of a template.
    Read(TemplateReadArgs),

    /// List all templates.
    List,

    /// Open a template in the configured editor.
    Edit(TemplateEditArgs),

    /// Delete a template (asks for confirmation).
    Delete(TemplateDeleteArgs),
}

/// Arguments for the `template create` command.
#[derive(Parser, Debug)]
pub struct TemplateCreateArgs {
    /// Name for the new template.
    pub name: String,

    /// Open the editor on the new template after creating it.
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `template use` command.
#[derive(Parser, Debug)]
pub struct TemplateUseArgs {
    /// Template to render.
    pub name: String,

    /// Destination file for the rendered output.
    pub filename: String,
}

/// Arguments for the `template read` command.
#[derive(Parser, Debug)]
pub struct TemplateReadArgs {
    /// Template to print.
    pub name: String,
}

/// Arguments for the `template edit` command.
#[derive(Parser, Debug)]
pub struct TemplateEditArgs {
    /// Template to edit.
    pub name: String,
}

/// Arguments for the `template delete` command.
#[derive(Parser, Debug)]
pub struct TemplateDeleteArgs {
    /// Template to delete.
    pub name: String,
}

/// Alias subcommands.
#[derive(Parser, Debug)]
pub struct AliasCommand {
    #[command(subcommand)]
    pub action: AliasAction,
}

/// Available alias actions.
#[derive(Subcommand, Debug)]
pub enum AliasAction {
    /// List all aliases.
    List(AliasListArgs),

    /// Create a new alias.
    Create(AliasCreateArgs),

    /// Delete one or more aliases.
    Delete(AliasDeleteArgs),

    /// Edit an alias interactively.
    Edit(AliasEditArgs),
}

/// Arguments for the `alias list` command.
#[derive(Parser, Debug)]
pub struct AliasListArgs {
    /// Also show alias descriptions.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `alias create` command.
#[derive(Parser, Debug)]
pub struct AliasCreateArgs {
    /// Name of the new alias.
    pub name: String,

    /// Command line the alias expands to (quote it).
    pub command: String,

    /// Optional description shown by `alias list --verbose`.
    pub description: Option<String>,
}

/// Arguments for the `alias delete` command.
#[derive(Parser, Debug)]
pub struct AliasDeleteArgs {
    /// Alias names to delete.
    pub names: Vec<String>,

    /// Delete all aliases.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the `alias edit` command.
#[derive(Parser, Debug)]
pub struct AliasEditArgs {
    /// Alias to edit.
    pub name: String,
}

impl Cli {
    /// Parse a prepared argv (after alias expansion).
    pub fn parse_args_from<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Cli::parse_from(argv)
    }
}

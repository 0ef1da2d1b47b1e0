//! Template storage and the placeholder engine.
//!
//! Templates are plain text files named `<name>.tmpl` under the templates
//! directory. This module provides the file-level operations the `template`
//! subcommands are built on; the placeholder mini-language lives in the
//! submodules.

pub mod builtins;
pub mod placeholder;
pub mod substitute;

pub use builtins::BuiltinRegistry;
pub use placeholder::{Placeholder, PlaceholderKind, extract, unique_variables};
pub use substitute::substitute;

use crate::context::{Context, template_name_from_file};
use crate::error::{Result, TboxError};
use crate::fs::atomic_write_file;
use std::fs;

/// Whether a template with this name exists.
pub fn exists(ctx: &Context, name: &str) -> bool {
    ctx.template_path(name).is_file()
}

/// Create an empty template file. Fails if the name is already taken.
pub fn create(ctx: &Context, name: &str) -> Result<()> {
    if exists(ctx, name) {
        return Err(TboxError::UserError(format!(
            "template '{}' already exists",
            name
        )));
    }

    atomic_write_file(ctx.template_path(name), "")
}

/// Read a template's raw body.
pub fn read(ctx: &Context, name: &str) -> Result<String> {
    let path = ctx.template_path(name);

    if !path.is_file() {
        return Err(TboxError::UserError(format!(
            "template '{}' not found",
            name
        )));
    }

    fs::read_to_string(&path).map_err(|e| {
        TboxError::UserError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}

/// List template names (without the `.tmpl` suffix), sorted.
pub fn list(ctx: &Context) -> Result<Vec<String>> {
    let entries = fs::read_dir(&ctx.templates_dir).map_err(|e| {
        TboxError::UserError(format!(
            "failed to read templates directory '{}': {}",
            ctx.templates_dir.display(),
            e
        ))
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| template_name_from_file(&entry.path()))
        .collect();

    names.sort();
    Ok(names)
}

/// Delete a template file.
pub fn delete(ctx: &Context, name: &str) -> Result<()> {
    let path = ctx.template_path(name);

    if !path.is_file() {
        return Err(TboxError::UserError(format!(
            "template '{}' not found",
            name
        )));
    }

    fs::remove_file(&path).map_err(|e| {
        TboxError::UserError(format!(
            "failed to delete template '{}': {}",
            path.display(),
            e
        ))
    })
}

//! Configuration model for tbox.
//!
//! `~/.tbox/config.json` holds user settings (currently just the editor
//! command). The file is validated against an embedded JSON Schema before
//! deserialization; unknown fields are allowed for forward compatibility.
//!
//! Failure behavior is asymmetric on purpose: an unreadable or syntactically
//! broken file falls back to defaults with a warning, while a file that
//! parses but fails schema validation is a hard error, since it means the
//! user edited the file into a shape tbox would misinterpret.

use crate::alias;
use crate::context::Context;
use crate::error::{Result, TboxError};
use crate::fs::atomic_write_file;
use colored::Colorize;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::sync::LazyLock;

/// Embedded schema for `config.json`, compiled once on first use.
const CONFIG_SCHEMA_JSON: &str = include_str!("../schemas/config.schema.json");

static CONFIG_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(CONFIG_SCHEMA_JSON).expect("embedded config schema is valid JSON");
    jsonschema::validator_for(&schema).expect("embedded config schema compiles")
});

/// User configuration, stored as `config.json` in the state directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editor command used by `template create --edit` and `template edit`.
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: default_editor().to_string(),
        }
    }
}

fn default_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "nano" }
}

impl Config {
    /// Load the config for a context.
    ///
    /// An unreadable or unparseable file warns and falls back to defaults.
    /// A file that parses but fails schema validation is an error.
    pub fn load(ctx: &Context) -> Result<Self> {
        let raw = match fs::read_to_string(&ctx.config_path) {
            Ok(raw) => raw,
            Err(_) => {
                eprintln!(
                    "{}",
                    format!(
                        "Error reading config file: {}",
                        ctx.config_path.display()
                    )
                    .red()
                );
                return Ok(Self::default());
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(_) => {
                eprintln!(
                    "{}",
                    format!(
                        "Error reading config file: {}",
                        ctx.config_path.display()
                    )
                    .red()
                );
                return Ok(Self::default());
            }
        };

        Self::from_value(value)
            .map_err(|e| TboxError::ConfigError(format!("{}: {}", ctx.config_path.display(), e)))
    }

    /// Validate a JSON value against the config schema, then deserialize.
    ///
    /// The error is a plain string here; `load` wraps it with the file path.
    fn from_value(value: Value) -> std::result::Result<Self, String> {
        let errors: Vec<String> = CONFIG_VALIDATOR
            .iter_errors(&value)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();

        if !errors.is_empty() {
            return Err(errors.join("; "));
        }

        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, ctx: &Context) -> Result<()> {
        atomic_write_file(&ctx.config_path, &to_pretty_json(self)?)
    }
}

/// First-run setup: create the state root and templates directory, and seed
/// `config.json` / `aliases.json` with defaults when absent. Existing files
/// are left untouched.
pub fn setup(ctx: &Context) -> Result<()> {
    fs::create_dir_all(&ctx.templates_dir).map_err(|e| {
        TboxError::UserError(format!(
            "failed to create '{}': {}",
            ctx.templates_dir.display(),
            e
        ))
    })?;

    if !ctx.config_path.exists() {
        Config::default().save(ctx)?;
    }

    if !ctx.aliases_path.exists() {
        alias::save(ctx, &alias::AliasFile::default())?;
    }

    Ok(())
}

/// Serialize with two-space indentation and a trailing newline.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| TboxError::UserError(format!("failed to serialize JSON: {}", e)))
}

//! Command aliases for tbox.
//!
//! `~/.tbox/aliases.json` maps short names to structured records of the
//! shape `{ "command": "...", "description": "..." }`. Before clap parses
//! argv, the first positional argument is checked against the map; on a hit
//! the alias is replaced by its command split into shell words, so
//! `tbox tmc foo` becomes `tbox template create foo`.
//!
//! Unlike the config file, a broken alias file never aborts the CLI: any
//! load failure silently falls back to the default alias set, since alias
//! expansion runs before every single invocation.

use crate::context::Context;
use crate::error::Result;
use crate::fs::atomic_write_file;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::sync::LazyLock;

/// Embedded schema for `aliases.json`, compiled once on first use.
const ALIASES_SCHEMA_JSON: &str = include_str!("../schemas/aliases.schema.json");

static ALIASES_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(ALIASES_SCHEMA_JSON).expect("embedded aliases schema is valid JSON");
    jsonschema::validator_for(&schema).expect("embedded aliases schema compiles")
});

/// One alias: the command line it expands to plus an optional description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AliasEntry {
    pub fn new(command: &str, description: Option<&str>) -> Self {
        Self {
            command: command.to_string(),
            description: description.map(str::to_string),
        }
    }
}

/// Contents of `aliases.json`. A `BTreeMap` keeps listing and on-disk
/// order stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasFile {
    pub aliases: BTreeMap<String, AliasEntry>,
}

impl Default for AliasFile {
    /// The seed alias set written on first run.
    fn default() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert(
            "tmc".to_string(),
            AliasEntry::new("template create", Some("Create a new template")),
        );
        Self { aliases }
    }
}

/// Load the alias file, falling back to defaults on any failure
/// (missing file, bad JSON, schema violation).
pub fn load(ctx: &Context) -> AliasFile {
    let Ok(raw) = fs::read_to_string(&ctx.aliases_path) else {
        return AliasFile::default();
    };

    let Ok(value) = serde_json::from_str::<Value>(&raw) else {
        return AliasFile::default();
    };

    if !ALIASES_VALIDATOR.is_valid(&value) {
        return AliasFile::default();
    }

    serde_json::from_value(value).unwrap_or_default()
}

/// Write the alias file as pretty-printed JSON.
pub fn save(ctx: &Context, aliases: &AliasFile) -> Result<()> {
    atomic_write_file(&ctx.aliases_path, &crate::config::to_pretty_json(aliases)?)
}

/// Expand an alias in argv before argument parsing.
///
/// `args[0]` is the binary name; `args[1]` is the candidate alias. On a hit
/// the alias token is replaced by the entry's command split into shell
/// words, with the remaining arguments appended unchanged. Expansion is
/// single-pass: the expansion result is never re-expanded. Anything that
/// prevents expansion (no match, unsplittable command) returns argv as-is.
pub fn expand_args(args: Vec<String>, aliases: &BTreeMap<String, AliasEntry>) -> Vec<String> {
    if args.len() < 2 {
        return args;
    }

    let Some(entry) = aliases.get(&args[1]) else {
        return args;
    };

    let Ok(expansion) = shell_words::split(&entry.command) else {
        return args;
    };

    let mut expanded = Vec::with_capacity(args.len() + expansion.len());
    expanded.push(args[0].clone());
    expanded.extend(expansion);
    expanded.extend(args[2..].iter().cloned());
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn alias_map(pairs: &[(&str, &str)]) -> BTreeMap<String, AliasEntry> {
        pairs
            .iter()
            .map(|(name, command)| (name.to_string(), AliasEntry::new(command, None)))
            .collect()
    }

    #[test]
    fn expands_alias_into_subcommand_words() {
        let aliases = alias_map(&[("tmc", "template create")]);
        let expanded = expand_args(args(&["tbox", "tmc", "notes"]), &aliases);
        assert_eq!(expanded, args(&["tbox", "template", "create", "notes"]));
    }

    #[test]
    fn passes_through_unknown_first_argument() {
        let aliases = alias_map(&[("tmc", "template create")]);
        let original = args(&["tbox", "template", "list"]);
        assert_eq!(expand_args(original.clone(), &aliases), original);
    }

    #[test]
    fn preserves_trailing_arguments_and_flags() {
        let aliases = alias_map(&[("tmc", "template create")]);
        let expanded = expand_args(args(&["tbox", "tmc", "notes", "--edit"]), &aliases);
        assert_eq!(
            expanded,
            args(&["tbox", "template", "create", "notes", "--edit"])
        );
    }

    #[test]
    fn respects_quoting_in_alias_command() {
        let aliases = alias_map(&[("uq", r#"template use "quarterly report""#)]);
        let expanded = expand_args(args(&["tbox", "uq", "out.md"]), &aliases);
        assert_eq!(
            expanded,
            args(&["tbox", "template", "use", "quarterly report", "out.md"])
        );
    }

    #[test]
    fn bare_binary_invocation_is_untouched() {
        let aliases = alias_map(&[("tmc", "template create")]);
        assert_eq!(expand_args(args(&["tbox"]), &aliases), args(&["tbox"]));
    }

    #[test]
    fn expansion_is_single_pass() {
        // An alias expanding to another alias's name is not re-expanded.
        let aliases = alias_map(&[("a", "b"), ("b", "template list")]);
        let expanded = expand_args(args(&["tbox", "a"]), &aliases);
        assert_eq!(expanded, args(&["tbox", "b"]));
    }

    #[test]
    fn unsplittable_command_leaves_args_untouched() {
        let aliases = alias_map(&[("bad", "unbalanced \"quote")]);
        let original = args(&["tbox", "bad"]);
        assert_eq!(expand_args(original.clone(), &aliases), original);
    }

    #[test]
    fn default_alias_file_seeds_tmc() {
        let file = AliasFile::default();
        let entry = file.aliases.get("tmc").unwrap();
        assert_eq!(entry.command, "template create");
        assert!(entry.description.is_some());
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::from_root(dir.path().join(".tbox"));

        assert_eq!(load(&ctx), AliasFile::default());
    }

    #[test]
    fn load_invalid_json_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::from_root(dir.path().join(".tbox"));
        fs::create_dir_all(&ctx.root).unwrap();
        fs::write(&ctx.aliases_path, "not json at all").unwrap();

        assert_eq!(load(&ctx), AliasFile::default());
    }

    #[test]
    fn load_schema_invalid_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::from_root(dir.path().join(".tbox"));
        fs::create_dir_all(&ctx.root).unwrap();
        // Bare-string aliases are the legacy shape; the schema requires
        // structured records.
        fs::write(
            &ctx.aliases_path,
            r#"{"aliases": {"tmc": "template create"}}"#,
        )
        .unwrap();

        assert_eq!(load(&ctx), AliasFile::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::from_root(dir.path().join(".tbox"));

        let mut file = AliasFile::default();
        file.aliases.insert(
            "tml".to_string(),
            AliasEntry::new("template list", None),
        );
        save(&ctx, &file).unwrap();

        assert_eq!(load(&ctx), file);
    }

    #[test]
    fn description_is_omitted_from_json_when_absent() {
        let entry = AliasEntry::new("template list", None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("description"));
    }
}

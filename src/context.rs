//! State directory resolution for tbox.
//!
//! All tbox state lives under a single per-user directory (`~/.tbox` by
//! default). Commands resolve a [`Context`] once and use it to locate the
//! config file, the alias file, and the templates directory.

use crate::error::{Result, TboxError};
use std::env;
use std::path::{Path, PathBuf};

/// Default state directory name under the user's home directory.
pub const TBOX_DIR_NAME: &str = ".tbox";

/// Templates subdirectory name within the state directory.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Environment variable that overrides the state directory location.
/// Used by tests to isolate state from the real home directory.
pub const TBOX_HOME_ENV: &str = "TBOX_HOME";

/// File extension for stored templates.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Resolved paths for tbox state. All paths are absolute once resolved
/// from the home directory.
#[derive(Debug, Clone)]
pub struct Context {
    /// State root (default: `~/.tbox`).
    pub root: PathBuf,

    /// Directory holding `.tmpl` files (default: `~/.tbox/templates`).
    pub templates_dir: PathBuf,

    /// Path to `config.json`.
    pub config_path: PathBuf,

    /// Path to `aliases.json`.
    pub aliases_path: PathBuf,
}

impl Context {
    /// Resolve the state directory from the environment.
    ///
    /// Honors the `TBOX_HOME` override when set and non-empty; otherwise
    /// uses `~/.tbox`.
    pub fn resolve() -> Result<Self> {
        if let Ok(root) = env::var(TBOX_HOME_ENV)
            && !root.is_empty()
        {
            return Ok(Self::from_root(PathBuf::from(root)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            TboxError::UserError("could not determine home directory".to_string())
        })?;

        Ok(Self::from_root(home.join(TBOX_DIR_NAME)))
    }

    /// Build a context rooted at a specific directory.
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        let templates_dir = root.join(TEMPLATES_DIR_NAME);
        let config_path = root.join("config.json");
        let aliases_path = root.join("aliases.json");

        Self {
            root,
            templates_dir,
            config_path,
            aliases_path,
        }
    }

    /// Path of the template file for a given template name.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }
}

/// Strip the template extension from a file name, if present.
pub fn template_name_from_file(file_name: &Path) -> Option<String> {
    let stem = file_name.file_stem()?.to_str()?;
    match file_name.extension().and_then(|e| e.to_str()) {
        Some(TEMPLATE_EXTENSION) => Some(stem.to_string()),
        _ => None,
    }
}

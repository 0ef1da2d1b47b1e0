//! Atomic file writes for tbox state.
//!
//! Config, alias, and rendered output files are written by creating a
//! temporary file in the target directory, syncing it to disk, and renaming
//! it over the target. A crash mid-write leaves at worst a stray
//! `.{filename}.tmp` file, never a truncated target.

use crate::error::{Result, TboxError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TboxError::UserError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target, so the final
/// rename stays on one filesystem.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TboxError::UserError(format!("invalid path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", file_name)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let result = File::create(path)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .map_err(|e| TboxError::UserError(format!("failed to write '{}': {}", path.display(), e)));

    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // On POSIX, rename atomically replaces the destination. Windows refuses
    // to rename over an existing file, so remove the target and retry.
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(_) if cfg!(windows) && target.exists() => fs::remove_file(target)
            .and_then(|_| fs::rename(source, target))
            .map_err(|e| {
                let _ = fs::remove_file(source);
                TboxError::UserError(format!("failed to replace '{}': {}", target.display(), e))
            }),
        Err(e) => {
            let _ = fs::remove_file(source);
            Err(TboxError::UserError(format!(
                "failed to replace '{}': {}",
                target.display(),
                e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        atomic_write(&path, b"hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        atomic_write(&path, b"replacement").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.txt");

        atomic_write_file(&path, "nested content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested content");
    }

    #[test]
    fn leaves_no_temp_file_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        atomic_write(&path, b"content").unwrap();

        assert!(!dir.path().join(".out.txt.tmp").exists());
    }

    #[test]
    fn handles_empty_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");

        atomic_write(&path, b"").unwrap();

        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/dir/file.json")).unwrap();
        assert_eq!(temp, PathBuf::from("/some/dir/.file.json.tmp"));
    }
}

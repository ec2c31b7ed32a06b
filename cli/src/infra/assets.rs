//! Embedded bootstrap script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Default script uploaded by `rd bootstrap` when no `--script` is given.
pub const BOOTSTRAP_SCRIPT: &str = include_str!("../../assets/bootstrap.sh");

/// Remote file name of the default script.
pub const BOOTSTRAP_FILE_NAME: &str = "bootstrap.sh";

/// Write the embedded script to a fresh temporary directory.
///
/// Returns `(dir, path)`; the script is removed when `dir` is dropped.
///
/// # Errors
///
/// Returns an error if the temporary directory or file cannot be created.
pub fn write_bootstrap_script() -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("cannot create temporary directory")?;
    let path = dir.path().join(BOOTSTRAP_FILE_NAME);
    std::fs::write(&path, BOOTSTRAP_SCRIPT)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok((dir, path))
}

//! Default path helpers and symlink checks.
//! Determines the OS-appropriate config path and detects symlinked ancestors
//! before anything is created under them.

use anyhow::{Context, Result};
use dirs::config_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// OS-appropriate default config path (`<config_dir>/plan_sync/config.xml`).
pub fn default_config_path() -> Result<PathBuf> {
    let base = config_dir().context("could not determine an OS config directory")?;
    Ok(base.join("plan_sync").join("config.xml"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

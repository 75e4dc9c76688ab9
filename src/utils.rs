//! Small filesystem helpers shared by config validation.

use std::fs;
use std::io;
use std::path::Path;

/// Check writability with a non-destructive probe: create a uniquely named
/// temp file and remove it again.
pub(crate) fn is_writable_probe(dir: &Path) -> io::Result<()> {
    let probe = dir.join(format!(".plan_sync_probe_{}.tmp", std::process::id()));
    fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)?;
    fs::remove_file(&probe)?;
    Ok(())
}

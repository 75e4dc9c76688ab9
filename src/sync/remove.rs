//! Delete phase: clear legacy filenames out of the plans directory.
//! A missing file is skipped silently; any other failure is fatal, since a
//! partially-cleaned directory would let stale files coexist with the new set.

use anyhow::Result;
use std::fs;
use std::io;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::PlanSyncError;
use crate::output as out;

use super::types::RemovalReport;

/// Delete each `name` under `cfg.plans_dir` if a file exists there.
/// Names are joined with the plans directory directly; callers pass plain
/// filenames, not paths. Returns the names actually removed, in call order.
pub fn remove_legacy(cfg: &Config, names: &[&str]) -> Result<RemovalReport> {
    let mut report = RemovalReport::default();

    for name in names {
        let path = cfg.plans_dir.join(name);

        if cfg.dry_run {
            match path.symlink_metadata() {
                // A directory under a legacy name cannot be removed with
                // remove_file, so a real run would abort here.
                Ok(meta) if meta.is_dir() => {
                    warn!(name, path = %path.display(), "a directory occupies this legacy name; a real run would fail");
                    out::print_warn(&format!(
                        "A directory occupies legacy name {name}; a real run would fail here."
                    ));
                }
                Ok(_) => {
                    out::print_user(&format!("Would delete: {name}"));
                    report.removed.push((*name).to_string());
                }
                Err(_) => {}
            }
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!(name, path = %path.display(), "deleted legacy file");
                out::print_user(&format!("Deleted: {name}"));
                report.removed.push((*name).to_string());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(name, "legacy file already absent");
            }
            Err(e) => {
                return Err(PlanSyncError::RemoveFailed { path, source: e }.into());
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn removes_present_and_skips_absent() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("old-a.md").write_str("stale").unwrap();

        let cfg = Config::new(dir.path());
        let report = remove_legacy(&cfg, &["old-a.md", "old-b.md"]).unwrap();

        assert_eq!(report.removed, vec!["old-a.md".to_string()]);
        assert!(!dir.child("old-a.md").path().exists());
    }

    #[test]
    fn dry_run_reports_without_deleting() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("old-a.md").write_str("stale").unwrap();

        let mut cfg = Config::new(dir.path());
        cfg.dry_run = true;
        let report = remove_legacy(&cfg, &["old-a.md"]).unwrap();

        assert_eq!(report.count(), 1);
        assert!(dir.child("old-a.md").path().exists());
    }

    #[test]
    fn dry_run_does_not_count_directory_squatting_a_legacy_name() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("old-a.md").create_dir_all().unwrap();
        dir.child("old-b.md").write_str("stale").unwrap();

        let mut cfg = Config::new(dir.path());
        cfg.dry_run = true;
        let report = remove_legacy(&cfg, &["old-a.md", "old-b.md"]).unwrap();

        // The directory is not deletable, so only the plain file is reported.
        assert_eq!(report.removed, vec!["old-b.md".to_string()]);
        assert!(dir.child("old-a.md").path().is_dir());
    }
}

//! Config validation logic.
//! Ensures the plans directory exists (creating it if missing) and is
//! writable before the delete phase is allowed to start.

use anyhow::Result;
use std::fs;
use tracing::{debug, info};

use crate::errors::PlanSyncError;
use crate::utils::is_writable_probe;

use super::types::Config;

impl Config {
    /// Validate the plans directory: create if missing, require a directory,
    /// and probe writability. All failures map to `PlanSyncError::TargetInvalid`.
    pub fn validate(&self) -> Result<()> {
        let dir = &self.plans_dir;

        if dir.exists() {
            if !dir.is_dir() {
                return Err(PlanSyncError::TargetInvalid {
                    path: dir.clone(),
                    reason: "exists but is not a directory".into(),
                }
                .into());
            }
        } else if self.dry_run {
            // Nothing to probe; a dry run against a missing directory just
            // reports every document as would-create.
            debug!(path = %dir.display(), "plans directory missing (dry-run)");
            return Ok(());
        } else {
            fs::create_dir_all(dir).map_err(|e| PlanSyncError::TargetInvalid {
                path: dir.clone(),
                reason: format!("could not create: {e}"),
            })?;
            info!("Created plans directory: {}", dir.display());
        }

        if !self.dry_run {
            is_writable_probe(dir).map_err(|e| PlanSyncError::TargetInvalid {
                path: dir.clone(),
                reason: format!("not writable: {e}"),
            })?;
            debug!("plans directory writable: {}", dir.display());
        }

        info!(
            "Config validated: plans_dir='{}' log_file='{}'",
            dir.display(),
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn creates_missing_plans_dir() {
        let td = assert_fs::TempDir::new().unwrap();
        let cfg = Config::new(td.path().join("nested").join("plans"));
        cfg.validate().unwrap();
        assert!(cfg.plans_dir.is_dir());
    }

    #[test]
    fn rejects_file_at_plans_dir_path() {
        let td = assert_fs::TempDir::new().unwrap();
        let f = td.child("not-a-dir");
        f.write_str("x").unwrap();

        let cfg = Config::new(f.path());
        let err = cfg.validate().unwrap_err();
        let pe = err.downcast_ref::<PlanSyncError>().unwrap();
        assert_eq!(pe.exit_code(), 2);
    }
}

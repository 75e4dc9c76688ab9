//! The synchronizer: a linear two-phase run.
//! Legacy files are deleted first, then every catalog document is written.

mod remove;
mod types;
mod write;

pub use remove::remove_legacy;
pub use types::{PlanDocument, RemovalReport, SyncReport, WriteReport};
pub use write::materialize;

use anyhow::Result;

use crate::config::Config;

/// Run one full sync: delete phase, then write phase, exactly once.
/// A fatal error in either phase aborts the run; completed actions stay in
/// effect (no rollback).
pub fn sync_plans(cfg: &Config, legacy: &[&str], docs: &[PlanDocument]) -> Result<SyncReport> {
    let removed = remove_legacy(cfg, legacy)?;
    let written = materialize(cfg, docs)?;
    Ok(SyncReport { removed, written })
}

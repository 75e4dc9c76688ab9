//! Write phase: materialize every document with full-overwrite semantics.
//! Writes are independent; order only matters for log output. A failed write
//! aborts the remaining documents and leaves the directory partially updated.

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::PlanSyncError;
use crate::output as out;

use super::types::{PlanDocument, WriteReport};

/// Create or overwrite `cfg.plans_dir/<name>` with exactly `body` for each
/// document, in order. Prior file content is fully discarded. A repeated name
/// within `docs` is last-write-wins and is logged as such.
pub fn materialize(cfg: &Config, docs: &[PlanDocument]) -> Result<WriteReport> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(docs.len());
    let mut report = WriteReport::default();

    for doc in docs {
        if !seen.insert(doc.name.as_str()) {
            warn!(name = %doc.name, "duplicate plan name; last write wins");
        }

        let path = cfg.plans_dir.join(&doc.name);

        if cfg.dry_run {
            out::print_user(&format!("Would create: {}", doc.name));
            report.written.push(doc.name.clone());
            continue;
        }

        fs::write(&path, doc.body.as_bytes()).map_err(|e| PlanSyncError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        info!(name = %doc.name, bytes = doc.body.len(), "wrote plan document");
        out::print_user(&format!("Created: {}", doc.name));
        report.written.push(doc.name.clone());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn overwrites_prior_content_completely() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("01-a.md")
            .write_str("a much longer stale body that must vanish")
            .unwrap();

        let cfg = Config::new(dir.path());
        let docs = vec![PlanDocument::new("01-a.md", "A")];
        let report = materialize(&cfg, &docs).unwrap();

        assert_eq!(report.count(), 1);
        dir.child("01-a.md").assert("A");
    }

    #[test]
    fn non_ascii_bodies_round_trip_exactly() {
        let dir = assert_fs::TempDir::new().unwrap();
        let body = "# 01: premake設定\n\n## 目的\n見積もり: 2ファイル\n";

        let cfg = Config::new(dir.path());
        materialize(&cfg, &[PlanDocument::new("01-a.md", body)]).unwrap();

        let read = std::fs::read(dir.child("01-a.md").path()).unwrap();
        assert_eq!(read, body.as_bytes());
    }

    #[test]
    fn duplicate_name_is_last_write_wins() {
        let dir = assert_fs::TempDir::new().unwrap();

        let cfg = Config::new(dir.path());
        let docs = vec![
            PlanDocument::new("01-a.md", "first"),
            PlanDocument::new("01-a.md", "second"),
        ];
        let report = materialize(&cfg, &docs).unwrap();

        // Both writes are counted; the later body is what remains on disk.
        assert_eq!(report.count(), 2);
        dir.child("01-a.md").assert("second");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = assert_fs::TempDir::new().unwrap();

        let mut cfg = Config::new(dir.path());
        cfg.dry_run = true;
        let report = materialize(&cfg, &[PlanDocument::new("01-a.md", "A")]).unwrap();

        assert_eq!(report.count(), 1);
        assert!(!dir.child("01-a.md").path().exists());
    }
}

//! A legacy name that never existed is skipped silently, not an error.

use assert_fs::prelude::*;
use plan_sync::{remove_legacy, sync_plans, Config, PlanDocument};

#[test]
fn absent_legacy_files_are_skipped() {
    let dir = assert_fs::TempDir::new().unwrap();

    let cfg = Config::new(dir.path());
    let report = remove_legacy(&cfg, &["never-existed.md", "also-missing.md"]).unwrap();
    assert!(report.removed.is_empty());
}

#[test]
fn run_succeeds_with_partially_present_legacy_set() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("01-old.md").write_str("stale").unwrap();

    let cfg = Config::new(dir.path());
    let report = sync_plans(
        &cfg,
        &["00-old.md", "01-old.md", "02-old.md"],
        &[PlanDocument::new("01-a.md", "A")],
    )
    .unwrap();

    assert_eq!(report.removed.removed, vec!["01-old.md".to_string()]);
    assert_eq!(report.written.count(), 1);
}

//! End-to-end check of the console contract: one line per deletion, one per
//! creation, in call order, then a blank line and the total.

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::PathBuf;

use plan_sync::{plan_documents, CATALOG_LEN, LEGACY_FILES};

/// Write an empty config next to the test data and return its path, so the
/// binary never picks up a real user config through the default location.
fn isolated_config(td: &assert_fs::TempDir) -> PathBuf {
    let cfg = td.child("test-config.xml");
    cfg.write_str("<config></config>").unwrap();
    cfg.path().to_path_buf()
}

#[test]
fn full_run_emits_contract_lines_and_writes_catalog() {
    let td = assert_fs::TempDir::new().unwrap();
    let dir = td.child("plans");
    dir.create_dir_all().unwrap();
    dir.child(LEGACY_FILES[0]).write_str("stale").unwrap();
    dir.child("unrelated.txt").write_str("keep me").unwrap();

    let assert = Command::cargo_bin("plan_sync")
        .unwrap()
        .arg("--plans-dir")
        .arg(dir.path())
        .env("PLAN_SYNC_CONFIG", isolated_config(&td))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    let deleted: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with("Deleted: "))
        .collect();
    assert_eq!(deleted, vec![format!("Deleted: {}", LEGACY_FILES[0])]);

    let created: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with("Created: "))
        .collect();
    assert_eq!(created.len(), CATALOG_LEN);
    assert_eq!(created[0], "Created: 01-premake-setup.md");
    assert_eq!(created[CATALOG_LEN - 1], "Created: 53-integration-test.md");

    assert_eq!(
        lines.last().copied(),
        Some(format!("Total: {CATALOG_LEN} plan documents created").as_str())
    );

    // Deletions come before creations.
    let first_created = lines.iter().position(|l| l.starts_with("Created: ")).unwrap();
    let last_deleted = lines
        .iter()
        .rposition(|l| l.starts_with("Deleted: "))
        .unwrap();
    assert!(last_deleted < first_created);

    // Filesystem state: legacy gone, unrelated untouched, catalog verbatim.
    assert!(!dir.child(LEGACY_FILES[0]).path().exists());
    dir.child("unrelated.txt").assert("keep me");
    let docs = plan_documents();
    let sample = &docs[0];
    let bytes = std::fs::read(dir.path().join(&sample.name)).unwrap();
    assert_eq!(bytes, sample.body.as_bytes());
}

#[test]
fn invalid_plans_dir_exits_with_code_2() {
    let td = assert_fs::TempDir::new().unwrap();
    let file = td.child("not-a-dir");
    file.write_str("x").unwrap();

    Command::cargo_bin("plan_sync")
        .unwrap()
        .arg("--plans-dir")
        .arg(file.path())
        .env("PLAN_SYNC_CONFIG", isolated_config(&td))
        .assert()
        .failure()
        .code(2);
}

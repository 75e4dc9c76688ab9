//! Dry-run reports every action without touching the filesystem.

use assert_cmd::Command;
use assert_fs::prelude::*;
use plan_sync::{CATALOG_LEN, LEGACY_FILES};

#[test]
fn dry_run_leaves_directory_untouched() {
    let td = assert_fs::TempDir::new().unwrap();
    let dir = td.child("plans");
    dir.create_dir_all().unwrap();
    dir.child(LEGACY_FILES[0]).write_str("stale").unwrap();

    // Pin the config so a real user config on the host cannot leak in.
    let cfg = td.child("test-config.xml");
    cfg.write_str("<config></config>").unwrap();

    let assert = Command::cargo_bin("plan_sync")
        .unwrap()
        .arg("--plans-dir")
        .arg(dir.path())
        .arg("--dry-run")
        .env("PLAN_SYNC_CONFIG", cfg.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(&format!("Would delete: {}", LEGACY_FILES[0])));
    assert_eq!(
        stdout.lines().filter(|l| l.starts_with("Would create: ")).count(),
        CATALOG_LEN
    );
    assert!(stdout.contains(&format!(
        "Total: {CATALOG_LEN} plan documents would be created"
    )));

    // Nothing deleted, nothing written.
    dir.child(LEGACY_FILES[0]).assert("stale");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

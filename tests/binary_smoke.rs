// use macro form directly; no import needed
use std::process::Command;

#[test]
fn binary_print_config_succeeds() {
    let me = assert_cmd::cargo::cargo_bin!("plan_sync");
    let out = Command::new(me)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(
        out.status.success(),
        "binary should succeed with --print-config"
    );
}

#[test]
fn binary_list_prints_catalog_without_writing() {
    let td = tempfile::tempdir().unwrap();

    // Pin the config to a known empty file in a separate directory so the
    // working directory stays empty for the assertion below.
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg = cfg_dir.path().join("test-config.xml");
    std::fs::write(&cfg, "<config></config>").expect("write test config");

    let me = assert_cmd::cargo::cargo_bin!("plan_sync");
    let out = Command::new(me)
        .arg("--list")
        .current_dir(td.path())
        .env("PLAN_SYNC_CONFIG", &cfg)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), plan_sync::CATALOG_LEN);
    assert_eq!(lines[0], "01-premake-setup.md");

    // --list must not touch the filesystem.
    assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 0);
}

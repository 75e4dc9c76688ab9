//! Verify XML config is parsed and used without touching user state.

use std::fs;
use tempfile::tempdir;

use plan_sync::{load_config_from_xml_path, LogLevel};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let plans_dir = td.path().join("plans");
    let log_file = td.path().join("plan_sync.log");

    let xml = format!(
        r#"
<config>
  <plans_dir>{}</plans_dir>
  <log_level>info</log_level>
  <log_file>{}</log_file>
  <dry_run>true</dry_run>
</config>
"#,
        plans_dir.display(),
        log_file.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.plans_dir, plans_dir, "plans_dir mismatch");
    assert_eq!(
        cfg.log_file.as_deref(),
        Some(log_file.as_path()),
        "log_file mismatch"
    );
    assert_eq!(cfg.log_level, LogLevel::Info, "log_level mismatch");
    assert!(cfg.dry_run, "dry_run should be true");
}

#[test]
fn missing_fields_use_defaults() {
    let td = tempdir().expect("create tempdir");
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><log_level>quiet</log_level></config>").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(
        cfg.plans_dir,
        std::path::PathBuf::from(plan_sync::config::PLANS_DIR_DEFAULT)
    );
    assert!(cfg.log_file.is_none());
    assert!(!cfg.dry_run);
}

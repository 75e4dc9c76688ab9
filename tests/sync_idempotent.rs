//! Running the full catalog sync twice must converge: the second run removes
//! nothing and rewrites byte-identical content.

use assert_fs::prelude::*;
use plan_sync::{plan_documents, sync_plans, Config, LEGACY_FILES};
use std::collections::BTreeMap;
use std::path::Path;

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                std::fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

#[test]
fn second_run_is_a_no_op_on_disk() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(LEGACY_FILES[0]).write_str("stale").unwrap();

    let cfg = Config::new(dir.path());
    let docs = plan_documents();

    let first = sync_plans(&cfg, &LEGACY_FILES, &docs).unwrap();
    assert_eq!(first.removed.count(), 1);
    assert_eq!(first.written.count(), docs.len());
    let after_first = snapshot(dir.path());

    let second = sync_plans(&cfg, &LEGACY_FILES, &docs).unwrap();
    assert_eq!(second.removed.count(), 0, "legacy files already gone");
    assert_eq!(second.written.count(), docs.len());
    let after_second = snapshot(dir.path());

    assert_eq!(after_first, after_second);
}

#[test]
fn written_files_match_catalog_bodies_exactly() {
    let dir = assert_fs::TempDir::new().unwrap();

    let cfg = Config::new(dir.path());
    let docs = plan_documents();
    sync_plans(&cfg, &LEGACY_FILES, &docs).unwrap();

    for doc in &docs {
        let bytes = std::fs::read(dir.path().join(&doc.name)).unwrap();
        assert_eq!(bytes, doc.body.as_bytes(), "content drift: {}", doc.name);
    }
}

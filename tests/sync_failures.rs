//! Fatal-error paths: both phases abort immediately, already-completed work
//! stays on disk, and each failure maps to its distinct exit code.

use assert_fs::prelude::*;
use plan_sync::{materialize, remove_legacy, Config, PlanDocument, PlanSyncError};

#[test]
fn directory_squatting_a_legacy_name_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("00-old.md").create_dir_all().unwrap();

    let cfg = Config::new(dir.path());
    let err = remove_legacy(&cfg, &["00-old.md"]).unwrap_err();
    let pe = err.downcast_ref::<PlanSyncError>().unwrap();
    assert!(matches!(pe, PlanSyncError::RemoveFailed { .. }));
    assert_eq!(pe.exit_code(), 3);
}

#[test]
fn remove_failure_aborts_before_later_names() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("00-old.md").create_dir_all().unwrap();
    dir.child("01-old.md").write_str("stale").unwrap();

    let cfg = Config::new(dir.path());
    assert!(remove_legacy(&cfg, &["00-old.md", "01-old.md"]).is_err());
    // The name after the failure was never touched.
    dir.child("01-old.md").assert("stale");
}

#[test]
fn unwritable_document_path_is_fatal_and_aborts_remaining_writes() {
    let dir = assert_fs::TempDir::new().unwrap();
    // "sub" is a file, so "sub/doc.md" cannot be created.
    dir.child("sub").write_str("not a directory").unwrap();

    let cfg = Config::new(dir.path());
    let docs = vec![
        PlanDocument::new("01-a.md", "A"),
        PlanDocument::new("sub/doc.md", "B"),
        PlanDocument::new("02-c.md", "C"),
    ];
    let err = materialize(&cfg, &docs).unwrap_err();
    let pe = err.downcast_ref::<PlanSyncError>().unwrap();
    assert!(matches!(pe, PlanSyncError::WriteFailed { .. }));
    assert_eq!(pe.exit_code(), 4);

    // Work before the failure remains; work after was never attempted.
    dir.child("01-a.md").assert("A");
    assert!(!dir.child("02-c.md").path().exists());
}

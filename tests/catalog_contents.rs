//! Integrity checks over the built-in catalog data.

use plan_sync::{plan_documents, CATALOG_LEN, LEGACY_FILES};
use std::collections::HashSet;

#[test]
fn catalog_has_expected_shape() {
    let docs = plan_documents();
    assert_eq!(docs.len(), CATALOG_LEN);
    assert_eq!(docs.first().unwrap().name, "01-premake-setup.md");
    assert_eq!(docs.last().unwrap().name, "53-integration-test.md");
}

#[test]
fn catalog_names_are_unique_markdown_filenames() {
    let docs = plan_documents();
    let names: HashSet<_> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names.len(), docs.len(), "duplicate name in catalog");
    for doc in &docs {
        assert!(doc.name.ends_with(".md"), "not markdown: {}", doc.name);
        assert!(
            !doc.name.contains('/') && !doc.name.contains('\\'),
            "catalog names must be plain filenames: {}",
            doc.name
        );
    }
}

#[test]
fn catalog_bodies_are_nonempty_newline_terminated() {
    for doc in plan_documents() {
        assert!(!doc.body.is_empty(), "empty body: {}", doc.name);
        assert!(
            doc.body.ends_with('\n'),
            "body must end with newline: {}",
            doc.name
        );
        // Every subplan carries the same section skeleton.
        assert!(doc.body.contains("## 目的"), "missing objective: {}", doc.name);
        assert!(doc.body.contains("## TODO"), "missing TODO: {}", doc.name);
    }
}

#[test]
fn legacy_set_is_disjoint_from_catalog() {
    let docs = plan_documents();
    let names: HashSet<_> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(LEGACY_FILES.len(), 17);
    for legacy in LEGACY_FILES {
        assert!(
            !names.contains(legacy),
            "legacy name also in catalog: {legacy}"
        );
    }
}

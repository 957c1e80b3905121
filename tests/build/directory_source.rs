//! Engines over a directory of files.

use crate::common::{write_collection, LEASES};
use owleye::{DirectorySource, DocumentSource, EngineConfig, EngineError, SearchEngine};
use std::fs;

fn engine_over(dir: &std::path::Path) -> SearchEngine<DirectorySource> {
    SearchEngine::open(DirectorySource::new(dir), EngineConfig::default()).unwrap()
}

#[test]
fn test_directory_collection_searchable() {
    let dir = tempfile::tempdir().unwrap();
    write_collection(dir.path(), &[("a.txt", LEASES[0].1), ("b.txt", LEASES[1].1)]);

    let engine = engine_over(dir.path());
    assert_eq!(engine.documents().unwrap(), vec!["a.txt", "b.txt"]);

    let results = engine.search("term five", None).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document, "a.txt");
}

#[test]
fn test_other_extensions_ignored_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_collection(dir.path(), &[("a.txt", "lease"), ("b.md", "lease"), ("c", "lease")]);

    let engine = engine_over(dir.path());
    assert_eq!(engine.stats().documents, 1);
    assert_eq!(engine.alternative_search_results("lease").unwrap().len(), 1);
}

#[test]
fn test_extension_filter() {
    let dir = tempfile::tempdir().unwrap();
    write_collection(dir.path(), &[("a.txt", "lease"), ("b.md", "lease"), ("c.MD", "lease")]);

    let source = DirectorySource::new(dir.path()).with_extensions([".md"]);
    assert_eq!(source.list_documents().unwrap(), vec!["b.md", "c.MD"]);
}

#[test]
fn test_filesystem_changes_seen_on_search() {
    let dir = tempfile::tempdir().unwrap();
    write_collection(dir.path(), &[("a.txt", "base rent")]);
    let engine = engine_over(dir.path());

    fs::write(dir.path().join("b.txt"), "base salary").unwrap();
    let results = engine.search("base", None).unwrap();
    assert_eq!(results.len(), 2);

    fs::remove_file(dir.path().join("a.txt")).unwrap();
    let results = engine.search("base", None).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document, "b.txt");
    assert_eq!(engine.stats().documents, 1);
}

#[test]
fn test_invalid_utf8_file_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_collection(dir.path(), &[("a.txt", "base rent")]);
    fs::write(dir.path().join("bin.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let engine = engine_over(dir.path());
    let report = engine.build_index().unwrap();
    assert_eq!(report.stats.documents, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].document, "bin.txt");
    assert!(report.skipped[0].reason.contains("UTF-8"));
}

#[test]
fn test_scope_cannot_escape_directory() {
    let outer = tempfile::tempdir().unwrap();
    let inner = outer.path().join("docs");
    fs::create_dir(&inner).unwrap();
    fs::write(outer.path().join("secret.txt"), "password").unwrap();
    write_collection(&inner, &[("a.txt", "lease")]);

    let engine = engine_over(&inner);
    assert!(matches!(
        engine.search("password", Some("../secret.txt")),
        Err(EngineError::NotFound(_))
    ));
}

#[test]
fn test_missing_directory_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let result = SearchEngine::open(DirectorySource::new(&missing), EngineConfig::default());
    assert!(matches!(result, Err(EngineError::Source(_))));
}

//! Conjunctive search: every term must be a token of the document.

use crate::common::{memory_engine, no_rebuild, shared_engine, CONTRACTS, LEASES};
use owleye::testing::MemorySource;
use owleye::{EngineConfig, EngineError, SearchEngine};

fn documents(results: &[owleye::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.document.as_str()).collect()
}

#[test]
fn test_both_documents_match_both_terms() {
    let engine = memory_engine(LEASES);
    let results = engine.search("term five", None).unwrap();

    assert_eq!(documents(&results), vec!["a.doc", "b.doc"]);
    assert!(results.iter().all(|r| r.match_percentage == 100.0));
}

#[test]
fn test_single_term_single_document() {
    let engine = memory_engine(LEASES);
    let results = engine.search("lease", None).unwrap();
    assert_eq!(documents(&results), vec!["a.doc"]);
}

#[test]
fn test_query_is_case_insensitive() {
    let engine = memory_engine(LEASES);
    let results = engine.search("LEASE Term", None).unwrap();
    assert_eq!(documents(&results), vec!["a.doc"]);
}

#[test]
fn test_terms_match_whole_tokens() {
    let engine = memory_engine(LEASES);
    // "years" in a.doc is a different token from "year"
    let results = engine.search("year", None).unwrap();
    assert_eq!(documents(&results), vec!["b.doc"]);
}

#[test]
fn test_missing_term_excludes_document() {
    let engine = memory_engine(LEASES);
    assert!(engine.search("term renewal", None).unwrap().is_empty());
}

#[test]
fn test_repeated_terms_still_full_match() {
    let engine = memory_engine(LEASES);
    let results = engine.search("term term", None).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.match_percentage == 100.0));
}

#[test]
fn test_scoped_search() {
    let engine = memory_engine(LEASES);

    let results = engine.search("term", Some("b.doc")).unwrap();
    assert_eq!(documents(&results), vec!["b.doc"]);

    assert!(engine.search("lease", Some("b.doc")).unwrap().is_empty());
}

#[test]
fn test_scoped_search_unknown_document() {
    let engine = memory_engine(LEASES);
    let err = engine.search("term", Some("missing.doc")).unwrap_err();
    assert!(matches!(err, EngineError::NotFound(ref name) if name == "missing.doc"));
    assert!(err.to_string().contains("missing.doc"));
}

#[test]
fn test_whitespace_query_rejected() {
    let engine = memory_engine(LEASES);
    assert!(matches!(engine.search("", None), Err(EngineError::EmptyQuery)));
    assert!(matches!(engine.search(" \t\n ", None), Err(EngineError::EmptyQuery)));
}

#[test]
fn test_unreadable_document_is_skipped() {
    let source = MemorySource::from_pairs(LEASES);
    source.insert_failing("broken.doc", "corrupt");
    let engine = SearchEngine::open(source, EngineConfig::default()).unwrap();

    let results = engine.search("term", None).unwrap();
    assert_eq!(documents(&results), vec!["a.doc", "b.doc"]);
}

#[test]
fn test_empty_collection_has_no_results() {
    let engine = memory_engine(&[]);
    assert!(engine.search("anything", None).unwrap().is_empty());
}

#[test]
fn test_scan_sees_new_documents_without_rebuild() {
    let (source, engine) = shared_engine(LEASES, no_rebuild());
    source.insert("c.doc", "term five");

    let results = engine.search("term five", None).unwrap();
    assert_eq!(documents(&results), vec!["a.doc", "b.doc", "c.doc"]);
    // The snapshot was not rebuilt
    assert_eq!(engine.stats().documents, 2);
}

#[test]
fn test_results_carry_snippets() {
    let engine = memory_engine(CONTRACTS);
    let results = engine.search("base rent", None).unwrap();

    assert_eq!(documents(&results), vec!["lease.txt"]);
    let lines: Vec<usize> = results[0].matches.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert!(results[0].matches[0]
        .context
        .contains("<mark>base</mark> <mark>rent</mark> monthly"));
}

#[test]
fn test_custom_highlight_markers() {
    let config = EngineConfig {
        highlight_open: "[[".to_string(),
        highlight_close: "]]".to_string(),
        ..EngineConfig::default()
    };
    let engine = SearchEngine::open(MemorySource::from_pairs(LEASES), config).unwrap();
    let results = engine.search("lease", None).unwrap();
    assert_eq!(results[0].matches[0].context, "the [[lease]] term is five years");
}

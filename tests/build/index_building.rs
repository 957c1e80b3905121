//! Snapshot contents after `build_index`.

use crate::common::{memory_engine, CONTRACTS, LEASES};
use owleye::testing::MemorySource;
use owleye::{build_snapshot, tokenize, EngineConfig, PostingMode, SearchEngine};

#[test]
fn test_ngram_counts_from_phrase() {
    let engine = memory_engine(&[("r.txt", "net profit sharing agreement")]);
    let snapshot = engine.snapshot();
    let ngrams = snapshot.ngrams();

    for unigram in ["net", "profit", "sharing", "agreement"] {
        assert_eq!(ngrams.count(&[unigram]), 1);
    }
    assert_eq!(ngrams.count(&["net", "profit"]), 1);
    assert_eq!(ngrams.count(&["profit", "sharing"]), 1);
    assert_eq!(ngrams.count(&["sharing", "agreement"]), 1);
    assert_eq!(ngrams.count(&["net", "profit", "sharing"]), 1);
    assert_eq!(ngrams.count(&["profit", "sharing", "agreement"]), 1);
    assert_eq!(ngrams.len(), 9);
}

#[test]
fn test_ngram_counts_are_global() {
    let engine = memory_engine(&[("a.txt", "base rent"), ("b.txt", "base rent due")]);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.ngrams().count(&["base", "rent"]), 2);
    assert_eq!(snapshot.ngrams().count(&["rent", "due"]), 1);
}

#[test]
fn test_ngrams_do_not_cross_documents() {
    let engine = memory_engine(&[("a.txt", "base"), ("b.txt", "rent")]);
    assert_eq!(engine.snapshot().ngrams().count(&["base", "rent"]), 0);
}

#[test]
fn test_vocabulary_and_postings() {
    let engine = memory_engine(LEASES);
    let snapshot = engine.snapshot();

    assert!(snapshot.vocabulary().contains("lease"));
    assert!(snapshot.vocabulary().contains("years"));
    assert!(!snapshot.vocabulary().contains("Lease"));

    assert_eq!(snapshot.inverted().postings("term"), ["a.doc", "b.doc"]);
    assert_eq!(snapshot.inverted().postings("lease"), ["a.doc"]);
    assert!(snapshot.inverted().postings("absent").is_empty());
}

#[test]
fn test_per_document_postings_deduplicated() {
    let engine = memory_engine(&[("a.txt", "rent rent rent")]);
    assert_eq!(engine.snapshot().inverted().postings("rent"), ["a.txt"]);
}

#[test]
fn test_per_occurrence_postings_repeat() {
    let config = EngineConfig {
        posting_mode: PostingMode::PerOccurrence,
        ..EngineConfig::default()
    };
    let engine =
        SearchEngine::open(MemorySource::from_pairs(&[("a.txt", "rent rent rent")]), config).unwrap();
    assert_eq!(engine.snapshot().inverted().postings("rent").len(), 3);
}

#[test]
fn test_empty_collection_builds_empty_snapshot() {
    let engine = memory_engine(&[]);
    let snapshot = engine.snapshot();
    assert!(snapshot.is_empty());
    assert!(snapshot.vocabulary().is_empty());
    assert!(snapshot.ngrams().is_empty());
    assert!(snapshot.inverted().is_empty());
}

#[test]
fn test_stats() {
    let engine = memory_engine(CONTRACTS);
    let stats = engine.stats();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.vocabulary, engine.snapshot().vocabulary().len());
    assert_eq!(stats.unigrams, stats.vocabulary);
    assert!(stats.bigrams > 0 && stats.trigrams > 0);
}

#[test]
fn test_engine_matches_direct_snapshot_build() {
    let tokens: Vec<(String, Vec<String>)> = CONTRACTS
        .iter()
        .map(|(name, text)| (name.to_string(), tokenize(text)))
        .collect();
    let direct = build_snapshot(
        PostingMode::PerDocument,
        tokens.iter().map(|(n, t)| (n.as_str(), t.as_slice())),
    );

    let engine = memory_engine(CONTRACTS);
    assert_eq!(engine.stats(), direct.stats());
    assert_eq!(engine.snapshot().vocabulary(), direct.vocabulary());
    assert_eq!(engine.snapshot().documents(), direct.documents());
}

#[test]
fn test_build_report_serializes() {
    let engine = memory_engine(LEASES);
    let report = engine.build_index().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stats"]["documents"], 2);
    assert!(json["skipped"].as_array().unwrap().is_empty());
}

//! Autocomplete over the n-gram vocabulary.

use crate::common::{memory_engine, no_rebuild, shared_engine, CONTRACTS};
use owleye::{is_stop_word, EngineConfig, EngineError};

#[test]
fn test_prefix_suggestions() {
    let engine = memory_engine(&[("r.txt", "net profit sharing agreement")]);
    assert_eq!(
        engine.autocomplete("net").unwrap(),
        vec!["net", "net profit", "net profit sharing"]
    );
}

#[test]
fn test_trailing_space_narrows_to_phrases() {
    let engine = memory_engine(&[("r.txt", "net profit sharing agreement")]);
    assert_eq!(
        engine.autocomplete("net ").unwrap(),
        vec!["net profit", "net profit sharing"]
    );
}

#[test]
fn test_idempotent() {
    let engine = memory_engine(CONTRACTS);
    let first = engine.autocomplete("re").unwrap();
    let second = engine.autocomplete("re").unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_never_suggests_stopwords() {
    let engine = memory_engine(CONTRACTS);
    for prefix in ["t", "a", "d", "o", "e"] {
        for suggestion in engine.autocomplete(prefix).unwrap() {
            assert!(
                !suggestion.split(' ').any(is_stop_word),
                "{suggestion:?} contains a stopword"
            );
        }
    }
}

#[test]
fn test_blank_prefix_rejected() {
    let engine = memory_engine(CONTRACTS);
    assert!(matches!(engine.autocomplete(""), Err(EngineError::EmptyQuery)));
    assert!(matches!(engine.autocomplete("   "), Err(EngineError::EmptyQuery)));
    assert!(matches!(
        engine.autocomplete_ranked(" ", None),
        Err(EngineError::EmptyQuery)
    ));
}

#[test]
fn test_empty_collection() {
    let engine = memory_engine(&[]);
    assert!(engine.autocomplete("net").unwrap().is_empty());
}

#[test]
fn test_reads_last_snapshot() {
    let (source, engine) = shared_engine(&[("a.txt", "base rent")], no_rebuild());
    source.insert("b.txt", "royalty");
    assert!(engine.autocomplete("roy").unwrap().is_empty());

    engine.build_index().unwrap();
    assert_eq!(engine.autocomplete("roy").unwrap(), vec!["royalty"]);
}

#[test]
fn test_conjunctive_search_refreshes_suggestions() {
    let (source, engine) = shared_engine(&[("a.txt", "base rent")], EngineConfig::default());
    source.insert("b.txt", "royalty");

    engine.search("royalty", None).unwrap();
    assert_eq!(engine.autocomplete("roy").unwrap(), vec!["royalty"]);
}

#[test]
fn test_ranked_by_frequency() {
    let engine = memory_engine(&[("a.txt", "base rent"), ("b.txt", "base rent due")]);
    let ranked = engine.autocomplete_ranked("base", None).unwrap();

    let texts: Vec<&str> = ranked.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["base", "base rent", "base rent due"]);
    assert_eq!(ranked[0].frequency, 2);
    assert_eq!(ranked[2].frequency, 1);

    assert_eq!(engine.autocomplete_ranked("base", Some(1)).unwrap().len(), 1);
}

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use owleye::testing::MemorySource;
use owleye::{EngineConfig, SearchEngine};
use std::fs;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-document lease collection.
pub const LEASES: &[(&str, &str)] = &[
    ("a.doc", "The Lease term is five years"),
    ("b.doc", "Five year term only"),
];

/// A small multi-line contract collection.
pub const CONTRACTS: &[(&str, &str)] = &[
    (
        "lease.txt",
        "COMMERCIAL LEASE\nThe tenant shall pay base rent monthly.\nBase rent is due on the first day.\nLate rent accrues interest.\nThis lease renews annually.",
    ),
    (
        "royalty.txt",
        "ROYALTY AGREEMENT\nThe licensee pays a royalty on net profit.\nNet profit sharing agreement applies to all sales.",
    ),
    (
        "employment.txt",
        "EMPLOYMENT CONTRACT\nThe employee receives a monthly salary.\nThe term of employment is two years.",
    ),
];

// ============================================================================
// ENGINES
// ============================================================================

/// Engine over in-memory documents with the default config.
pub fn memory_engine(pairs: &[(&str, &str)]) -> SearchEngine<MemorySource> {
    SearchEngine::open(MemorySource::from_pairs(pairs), EngineConfig::default())
        .expect("open in-memory engine")
}

/// Engine plus a handle to its source, for tests that change the collection.
pub fn shared_engine(
    pairs: &[(&str, &str)],
    config: EngineConfig,
) -> (Arc<MemorySource>, SearchEngine<MemorySource>) {
    let source = Arc::new(MemorySource::from_pairs(pairs));
    let engine = SearchEngine::from_shared(Arc::clone(&source), config).expect("open shared engine");
    (source, engine)
}

/// Default config with rebuild-on-search turned off.
pub fn no_rebuild() -> EngineConfig {
    EngineConfig {
        always_rebuild: false,
        ..EngineConfig::default()
    }
}

// ============================================================================
// FILESYSTEM
// ============================================================================

/// Write `(name, text)` pairs as files under `dir`.
pub fn write_collection(dir: &Path, pairs: &[(&str, &str)]) {
    for (name, text) in pairs {
        fs::write(dir.join(name), text).expect("write fixture");
    }
}


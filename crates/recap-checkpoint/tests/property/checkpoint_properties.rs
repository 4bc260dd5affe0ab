//! Property tests for recap-checkpoint: key sanitization and store round trips.

use proptest::prelude::*;

use recap_checkpoint::{sanitize_key, CheckpointStore, SourceSignature};
use recap_core::models::{CheckpointPhase, Segment};
use recap_core::{JobSource, RecapConfig};

fn signature_for(text: &str) -> SourceSignature {
    let source = JobSource::new(vec![Segment::new(0.0, 1.0, text)]);
    SourceSignature::compute(&source, &RecapConfig::default())
}

fn phase_strategy() -> impl Strategy<Value = CheckpointPhase> {
    prop_oneof![Just(CheckpointPhase::Summarize), Just(CheckpointPhase::Merge)]
}

// =============================================================================
// Sanitized keys only carry file-name-safe chars
// =============================================================================
proptest! {
    #[test]
    fn sanitized_key_is_path_safe(key in "\\PC{0,40}") {
        let sanitized = sanitize_key(&key);
        prop_assert!(sanitized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        prop_assert_eq!(sanitized.chars().count(), key.chars().count());
    }

    #[test]
    fn safe_keys_are_unchanged(key in "[A-Za-z0-9_-]{0,40}") {
        prop_assert_eq!(sanitize_key(&key), key);
    }
}

// =============================================================================
// Whatever is written reads back intact under the same signature
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn write_then_read_returns_same_partials(
        key in "\\PC{1,24}",
        partials in prop::collection::vec("\\PC{0,60}", 0..8),
        phase in phase_strategy(),
    ) {
        let tmp = tempfile::tempdir().unwrap();
        let store = CheckpointStore::open(tmp.path()).unwrap();
        let sig = signature_for("lecture");

        store.write(&key, &sig, &partials, phase).unwrap();
        let loaded = store.read(&key, &sig).unwrap();

        prop_assert_eq!(loaded.partials, partials);
        prop_assert_eq!(loaded.phase, phase);
        prop_assert_eq!(loaded.source_signature.as_str(), sig.as_str());
    }

    #[test]
    fn other_signature_never_reads_back(
        partials in prop::collection::vec("[a-z ]{0,30}", 0..6),
        original in "[a-z]{1,12}",
        changed in "[A-Z]{1,12}",
    ) {
        let tmp = tempfile::tempdir().unwrap();
        let store = CheckpointStore::open(tmp.path()).unwrap();

        store
            .write("job", &signature_for(&original), &partials, CheckpointPhase::Summarize)
            .unwrap();

        prop_assert!(store.read("job", &signature_for(&changed)).is_none());
        prop_assert!(!store.path_for("job").exists());
    }
}

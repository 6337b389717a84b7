// tests/membership.rs

use banner_allowlist::{ALLOWED_BANNER_PATHS, allowed_paths, is_allowed};
use itertools::Itertools;

#[test]
fn every_listed_path_is_allowed() {
    for &path in allowed_paths() {
        assert!(is_allowed(path), "expected {path} to be allowed");
    }
}

#[test]
fn list_length_matches_source_data() {
    assert_eq!(allowed_paths().len(), 304);
}

#[test]
fn entries_are_well_formed() {
    for path in allowed_paths() {
        assert!(!path.is_empty());
        assert!(path.starts_with('/'), "entry {path} missing leading slash");
    }
}

#[test]
fn accessor_is_stable_across_calls() {
    assert_eq!(allowed_paths(), allowed_paths());
    assert_eq!(allowed_paths(), ALLOWED_BANNER_PATHS);
}

#[test]
fn json_round_trip_preserves_the_multiset() {
    let encoded = serde_json::to_string(ALLOWED_BANNER_PATHS).unwrap();
    let decoded: Vec<String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.len(), ALLOWED_BANNER_PATHS.len());

    // Compare as multisets so duplicate entries must survive the round trip.
    let original = ALLOWED_BANNER_PATHS.iter().copied().counts();
    let reloaded = decoded.iter().map(String::as_str).counts();
    assert_eq!(original, reloaded);
}

#[test]
fn concurrent_readers_observe_the_same_membership() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                assert!(is_allowed("/"));
                assert!(is_allowed("/vue/tools/libraries/"));
                assert!(!is_allowed("/vue/tools/libraries"));
                assert!(!is_allowed("/golang/start/"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

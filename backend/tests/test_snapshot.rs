//! Snapshot Tests - Save/Resume Generator State
//!
//! Critical invariants tested:
//! - Determinism: a resumed generator continues the exact stream
//! - Integrity: tampered snapshots are rejected by digest
//! - Shape: state vectors of the wrong size are rejected

use correlated_noise_core_rs::rng::{RngManager, RngSnapshot, SnapshotError, WordWidth};

fn advanced(width: WordWidth, seed: u64, draws: usize) -> RngManager {
    let mut rng = RngManager::new(width, seed);
    for _ in 0..draws {
        rng.next_f64();
    }
    rng
}

#[test]
fn test_resume_continues_stream() {
    for width in [WordWidth::W32, WordWidth::W64] {
        // Mid-block and exactly at a block boundary
        for draws in [0, 17, width.state_words()] {
            let mut original = advanced(width, 42, draws);
            let mut resumed = RngManager::restore(&original.snapshot()).unwrap();
            for _ in 0..1000 {
                assert_eq!(original.next_word(), resumed.next_word());
            }
            assert_eq!(original.regenerations(), resumed.regenerations());
        }
    }
}

#[test]
fn test_json_round_trip_resumes() {
    let mut original = advanced(WordWidth::W64, 5, 100);
    let json = original.snapshot().to_json().unwrap();

    let snapshot = RngSnapshot::from_json(&json).unwrap();
    assert_eq!(snapshot.width, WordWidth::W64);
    assert_eq!(snapshot.words.len(), 312);

    let mut resumed = RngManager::restore(&snapshot).unwrap();
    assert_eq!(original.next_f64(), resumed.next_f64());
}

#[test]
fn test_snapshot_is_deterministic() {
    let a = advanced(WordWidth::W32, 8, 50).snapshot();
    let b = advanced(WordWidth::W32, 8, 50).snapshot();
    assert_eq!(a, b);
    assert_eq!(a.digest.len(), 64);
}

#[test]
fn test_tampered_word_rejected() {
    let mut snapshot = advanced(WordWidth::W64, 1, 10).snapshot();
    snapshot.words[3] ^= 1;

    match RngManager::restore(&snapshot) {
        Err(SnapshotError::DigestMismatch { expected, actual }) => {
            assert_ne!(expected, actual);
        }
        other => panic!("expected digest mismatch, got {:?}", other),
    }
}

#[test]
fn test_tampered_cursor_rejected() {
    let mut snapshot = advanced(WordWidth::W32, 1, 10).snapshot();
    snapshot.cursor += 1;
    assert!(matches!(
        RngManager::restore(&snapshot),
        Err(SnapshotError::DigestMismatch { .. })
    ));
}

#[test]
fn test_wrong_shape_rejected_even_with_valid_digest() {
    let mut snapshot = advanced(WordWidth::W64, 1, 10).snapshot();
    snapshot.words.truncate(100);
    snapshot.digest = snapshot.compute_digest();

    assert_eq!(
        RngManager::restore(&snapshot).unwrap_err(),
        SnapshotError::MalformedState {
            width: WordWidth::W64,
            words: 100,
            cursor: snapshot.cursor,
        }
    );
}

#[test]
fn test_32_bit_word_overflow_rejected() {
    let mut snapshot = advanced(WordWidth::W32, 1, 10).snapshot();
    snapshot.words[0] = u64::from(u32::MAX) + 1;
    snapshot.digest = snapshot.compute_digest();
    assert!(matches!(
        RngManager::restore(&snapshot),
        Err(SnapshotError::MalformedState { .. })
    ));
}

#[test]
fn test_invalid_json_reports_serialization_error() {
    assert!(matches!(
        RngSnapshot::from_json("{not json"),
        Err(SnapshotError::Serialization(_))
    ));
}

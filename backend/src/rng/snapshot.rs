//! Generator checkpoints
//!
//! A snapshot records the complete engine state so a stream can be stopped
//! and resumed bit-exactly, possibly in another process.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restore + draw produces exactly the values the
//!   original generator would have produced next
//! - **Integrity**: the SHA-256 digest covers width, cursor, last word,
//!   regeneration count and every state word; any edit is rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::{TwistedEngine, WordWidth};

/// Errors raised while restoring a generator.
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("Snapshot digest mismatch: expected {expected}, computed {actual}")]
    DigestMismatch { expected: String, actual: String },

    #[error("Malformed {width} generator state: {words} words, cursor {cursor}")]
    MalformedState {
        width: WordWidth,
        words: usize,
        cursor: usize,
    },

    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),
}

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    pub width: WordWidth,

    /// Raw state words (32-bit words are zero-extended)
    pub words: Vec<u64>,

    /// Index of the next word to temper
    pub cursor: usize,

    pub last_word: u64,

    pub regenerations: u64,

    /// Hex SHA-256 of the fields above
    pub digest: String,
}

impl RngSnapshot {
    pub(crate) fn capture<E: TwistedEngine>(engine: &E) -> Self {
        let mut snapshot = Self {
            width: engine.width(),
            words: engine.words(),
            cursor: engine.cursor(),
            last_word: engine.last_word(),
            regenerations: engine.regenerations(),
            digest: String::new(),
        };
        snapshot.digest = snapshot.compute_digest();
        snapshot
    }

    /// SHA-256 over the little-endian encoding of every state field.
    pub fn compute_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.bits().to_le_bytes());
        hasher.update((self.cursor as u64).to_le_bytes());
        hasher.update(self.last_word.to_le_bytes());
        hasher.update(self.regenerations.to_le_bytes());
        for word in &self.words {
            hasher.update(word.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    /// Check the stored digest against the state it describes.
    pub fn verify(&self) -> Result<(), SnapshotError> {
        let actual = self.compute_digest();
        if actual != self.digest {
            return Err(SnapshotError::DigestMismatch {
                expected: self.digest.clone(),
                actual,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }
}

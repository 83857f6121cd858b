//! Checkpoint - Save/Load Generator State
//!
//! A snapshot captures everything needed to resume a stream mid-way and
//! still restart it from the beginning: the three state words, the carry
//! and the stored seed.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact stream
//! - **Range**: state words are finite and in `[0, 1)`
//! - **Grid**: state words are multiples of 2^-32
//! - **Seed Matching**: `seed_hash` must match the stored seed

use crate::error::AleaError;
use crate::generator::{debug_enabled, Alea, AleaState};
use crate::mash::TWO_POW_32;
use crate::seed::SeedValue;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AleaSnapshot {
    pub s0: f64,
    pub s1: f64,
    pub s2: f64,
    pub c: u32,

    /// Seed used by `restart`
    pub initial_args: Vec<SeedValue>,

    /// SHA256 of the canonical JSON of `initial_args`
    pub seed_hash: String,
}

impl AleaSnapshot {
    pub fn to_json(&self) -> Result<String, AleaError> {
        serde_json::to_string(self).map_err(|e| {
            AleaError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AleaError> {
        serde_json::from_str(json).map_err(|e| {
            AleaError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }

    fn state(&self) -> AleaState {
        AleaState {
            s0: self.s0,
            s1: self.s1,
            s2: self.s2,
            c: self.c,
        }
    }
}

// ============================================================================
// Seed Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a seed sequence
///
/// Hashes the JSON array of the seed's text forms, so the hash only
/// depends on what the hasher actually sees.
pub fn compute_seed_hash(seed: &[SeedValue]) -> Result<String, AleaError> {
    let json = serde_json::to_string(seed)
        .map_err(|e| AleaError::Serialization(format!("Seed serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks:
/// - State words are finite fractions in `[0, 1)`
/// - State words are multiples of 2^-32, as every seeded or drawn word is
/// - Seed hash matches the stored seed
pub fn validate_snapshot(snapshot: &AleaSnapshot) -> Result<(), AleaError> {
    for (name, word) in [("s0", snapshot.s0), ("s1", snapshot.s1), ("s2", snapshot.s2)] {
        if !word.is_finite() || !(0.0..1.0).contains(&word) {
            return Err(AleaError::StateValidation(format!(
                "State word {} out of range [0, 1): {}",
                name, word
            )));
        }
        let scaled = word * TWO_POW_32;
        if scaled != scaled.trunc() {
            return Err(AleaError::StateValidation(format!(
                "State word {} is not a multiple of 2^-32: {}",
                name, word
            )));
        }
    }

    let expected = compute_seed_hash(&snapshot.initial_args)?;
    if expected != snapshot.seed_hash {
        return Err(AleaError::StateValidation(format!(
            "Seed hash mismatch: expected {}, got {}",
            expected, snapshot.seed_hash
        )));
    }

    Ok(())
}

impl Alea {
    /// Capture the current state for later resumption
    pub fn snapshot(&self) -> Result<AleaSnapshot, AleaError> {
        let state = self.state();
        Ok(AleaSnapshot {
            s0: state.s0,
            s1: state.s1,
            s2: state.s2,
            c: state.c,
            initial_args: self.initial_args().to_vec(),
            seed_hash: compute_seed_hash(self.initial_args())?,
        })
    }

    /// Rebuild a generator from a validated snapshot
    pub fn restore(snapshot: AleaSnapshot) -> Result<Self, AleaError> {
        validate_snapshot(&snapshot)?;

        if debug_enabled() {
            eprintln!(
                "[ALEA DEBUG] Restoring snapshot: seed_hash={}, carry={}",
                snapshot.seed_hash, snapshot.c
            );
        }

        let state = snapshot.state();
        Ok(Alea::from_parts(state, snapshot.initial_args))
    }
}

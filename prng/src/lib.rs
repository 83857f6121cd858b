//! Alea PRNG - Rust Engine
//!
//! Deterministic pseudo-random number generation seeded from arbitrary
//! values, output-compatible with Johannes Baagøe's Alea algorithm.
//!
//! # Architecture
//!
//! - **mash**: Seed hasher folding text into 32-bit fractions
//! - **seed**: Seed values and entropy sources
//! - **generator**: Three-word multiply-with-carry generator
//! - **config**: Serde configuration (explicit seed or entropy)
//! - **checkpoint**: Snapshot save/restore
//! - **shared**: Mutex-guarded handle for multi-threaded callers
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same stream, bit for bit
//! 2. State words stay in `[0, 1)`, carry stays non-negative
//! 3. Not cryptographically secure

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod generator;
pub mod mash;
pub mod seed;
pub mod shared;

// Re-exports for convenience
pub use checkpoint::{compute_seed_hash, validate_snapshot, AleaSnapshot};
pub use config::{AleaConfig, SeedSource};
pub use error::AleaError;
pub use generator::{Alea, AleaState};
pub use mash::Mash;
pub use seed::{
    entropy_seed, seed_values, EntropySource, OsEntropy, SeedValue, DEFAULT_ENTROPY_WORDS,
};
pub use shared::SharedAlea;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn alea_prng(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyAlea>()?;
    Ok(())
}

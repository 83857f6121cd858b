//! Thread-shareable generator handle
//!
//! `Alea` itself has no internal synchronization. `SharedAlea` wraps one
//! generator in `Arc<Mutex<_>>` so every draw, cycle, seed and restart on
//! that instance is serialized. Clones share the same stream.

use crate::checkpoint::AleaSnapshot;
use crate::error::AleaError;
use crate::generator::Alea;
use crate::seed::SeedValue;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct SharedAlea {
    inner: Arc<Mutex<Alea>>,
}

impl SharedAlea {
    pub fn new(rng: Alea) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    // No operation can panic halfway through a state update, so a poisoned
    // lock still guards a consistent generator.
    fn lock(&self) -> MutexGuard<'_, Alea> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn random(&self) -> f64 {
        self.lock().random()
    }

    pub fn fract53(&self) -> f64 {
        self.lock().fract53()
    }

    pub fn int32(&self) -> u32 {
        self.lock().int32()
    }

    pub fn cycle(&self, runs: Option<i64>) {
        self.lock().cycle(runs)
    }

    pub fn restart(&self) {
        self.lock().restart()
    }

    pub fn seed(&self, seed: Vec<SeedValue>) {
        self.lock().seed(seed)
    }

    pub fn reseed(&self, seed: Option<Vec<SeedValue>>) -> Result<(), AleaError> {
        self.lock().reseed(seed)
    }

    pub fn snapshot(&self) -> Result<AleaSnapshot, AleaError> {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access, e.g. to draw several values atomically
    pub fn with<R>(&self, f: impl FnOnce(&mut Alea) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<Alea> for SharedAlea {
    fn from(rng: Alea) -> Self {
        Self::new(rng)
    }
}

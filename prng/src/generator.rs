//! Alea generator
//!
//! Three fractional state words and a carry, seeded by a [`Mash`] pass over
//! the seed values. Every draw is a multiply-with-carry step:
//!
//! ```text
//! t  = 2091639 * s0 + c * 2^-32
//! s0 = s1
//! s1 = s2
//! c  = floor(t)
//! s2 = t - c        (the drawn value)
//! ```
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit. All state words stay on the
//! 2^-32 grid, so `int32` is exact and snapshots reproduce the stream.

use crate::error::AleaError;
use crate::mash::{trunc_u32, Mash, TWO_POW_32, TWO_POW_NEG_32};
use crate::seed::{entropy_seed, seed_values, EntropySource, OsEntropy, SeedValue};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MULTIPLIER: f64 = 2_091_639.0;

/// 2^21
const TWO_POW_21: f64 = 2_097_152.0;

/// 2^-53
const TWO_POW_NEG_53: f64 = 1.110_223_024_625_156_5e-16;

/// Opt-in diagnostics, enabled by setting `ALEA_DEBUG=1`
pub(crate) fn debug_enabled() -> bool {
    std::env::var("ALEA_DEBUG").is_ok()
}

/// Raw generator state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AleaState {
    pub s0: f64,
    pub s1: f64,
    pub s2: f64,
    pub c: u32,
}

impl AleaState {
    /// Derive the initial state for a seed sequence
    fn seeded(seed: &[SeedValue]) -> Self {
        let mut mash = Mash::new();
        let mut state = AleaState {
            s0: mash.mash_str(" "),
            s1: mash.mash_str(" "),
            s2: mash.mash_str(" "),
            c: 1,
        };

        for value in seed {
            state.s0 = subtract_wrapping(state.s0, mash.mash_str(value.as_str()));
            state.s1 = subtract_wrapping(state.s1, mash.mash_str(value.as_str()));
            state.s2 = subtract_wrapping(state.s2, mash.mash_str(value.as_str()));
        }

        state
    }

    /// True when every word is a finite fraction in `[0, 1)`
    pub fn is_valid(&self) -> bool {
        [self.s0, self.s1, self.s2]
            .iter()
            .all(|s| s.is_finite() && (0.0..1.0).contains(s))
    }
}

#[inline]
fn subtract_wrapping(word: f64, amount: f64) -> f64 {
    let next = word - amount;
    if next < 0.0 {
        next + 1.0
    } else {
        next
    }
}

/// Seeded Alea generator
///
/// # Example
/// ```
/// use alea_prng::Alea;
///
/// let mut rng = Alea::new(["test"]);
/// let first = rng.random();
/// assert!((0.0..1.0).contains(&first));
///
/// rng.restart();
/// assert_eq!(rng.random(), first);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Alea {
    state: AleaState,
    /// Seed the generator was last (re)initialized with
    initial_args: Vec<SeedValue>,
}

impl Alea {
    /// Create a generator from an explicit seed sequence
    ///
    /// An empty sequence is a valid seed.
    pub fn new<I>(seed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SeedValue>,
    {
        let initial_args = seed_values(seed);
        let state = AleaState::seeded(&initial_args);
        Self {
            state,
            initial_args,
        }
    }

    /// Create a generator seeded from operating-system entropy
    pub fn from_entropy() -> Result<Self, AleaError> {
        Self::from_entropy_source(&mut OsEntropy)
    }

    /// Create a generator seeded from the given entropy source
    pub fn from_entropy_source<E: EntropySource + ?Sized>(
        entropy: &mut E,
    ) -> Result<Self, AleaError> {
        Ok(Self::new(entropy_seed(entropy)?))
    }

    /// Rebuild a generator from saved parts. Callers validate first.
    pub(crate) fn from_parts(state: AleaState, initial_args: Vec<SeedValue>) -> Self {
        Self {
            state,
            initial_args,
        }
    }

    /// Replace the stored seed and reinitialize
    pub fn seed<I>(&mut self, seed: I)
    where
        I: IntoIterator,
        I::Item: Into<SeedValue>,
    {
        self.initial_args = seed_values(seed);
        self.init_state("explicit");
    }

    /// Reseed with `seed`, or with fresh OS entropy when `None`
    pub fn reseed(&mut self, seed: Option<Vec<SeedValue>>) -> Result<(), AleaError> {
        self.reseed_with(seed, &mut OsEntropy)
    }

    /// Reseed with `seed`, or with words from `entropy` when `None`.
    ///
    /// The entropy words become the stored seed, so a later [`Alea::restart`]
    /// replays the same stream.
    pub fn reseed_with<E: EntropySource + ?Sized>(
        &mut self,
        seed: Option<Vec<SeedValue>>,
        entropy: &mut E,
    ) -> Result<(), AleaError> {
        match seed {
            Some(values) => {
                self.initial_args = values;
                self.init_state("explicit");
            }
            None => {
                self.initial_args = entropy_seed(entropy)?;
                self.init_state("entropy");
            }
        }
        Ok(())
    }

    /// Reinitialize from the stored seed
    pub fn restart(&mut self) {
        self.init_state("restart");
    }

    fn init_state(&mut self, source: &str) {
        if debug_enabled() {
            eprintln!(
                "[ALEA DEBUG] Seeding ({}) with {} value(s)",
                source,
                self.initial_args.len()
            );
        }
        self.state = AleaState::seeded(&self.initial_args);
    }

    /// Draw a 32-bit fraction in `[0, 1)`
    pub fn random(&mut self) -> f64 {
        let AleaState { s0, s1, s2, c } = self.state;
        let t = MULTIPLIER * s0 + c as f64 * TWO_POW_NEG_32;
        // t < 2^21 + 1, so truncation is the floor
        let carry = trunc_u32(t);
        let drawn = t - carry as f64;

        self.state = AleaState {
            s0: s1,
            s1: s2,
            s2: drawn,
            c: carry,
        };
        drawn
    }

    /// Draw a 53-bit fraction in `[0, 1)`
    ///
    /// Consumes two draws: the first supplies the high 32 bits, the second
    /// the next 21.
    pub fn fract53(&mut self) -> f64 {
        let high = self.random();
        let low = (self.random() * TWO_POW_21).floor();
        high + low * TWO_POW_NEG_53
    }

    /// Draw an unsigned 32-bit integer
    pub fn int32(&mut self) -> u32 {
        // Draws sit on the 2^-32 grid, so the product is an exact integer
        (self.random() * TWO_POW_32) as u32
    }

    /// Discard `runs` draws. `None` and anything below 1 discard one.
    pub fn cycle(&mut self, runs: Option<i64>) {
        let runs = runs.unwrap_or(1).max(1);
        for _ in 0..runs {
            self.random();
        }
    }

    /// Current state words and carry
    pub fn state(&self) -> AleaState {
        self.state
    }

    /// Seed the generator was last initialized with
    pub fn initial_args(&self) -> &[SeedValue] {
        &self.initial_args
    }
}

impl RngCore for Alea {
    fn next_u32(&mut self) -> u32 {
        self.int32()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.int32());
        let high = u64::from(self.int32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.int32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Alea {
    /// Three little-endian 32-bit words, the same shape as an entropy seed
    type Seed = [u8; 12];

    fn from_seed(seed: Self::Seed) -> Self {
        let words: Vec<u32> = seed
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Self::new(words)
    }
}

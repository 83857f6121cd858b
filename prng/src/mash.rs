//! Mash seed hasher
//!
//! Folds a sequence of seed values into successive 32-bit fractions.
//! Each call advances a private accumulator, so calling `mash` twice on the
//! same input yields two different values. A fresh `Mash` must be built
//! whenever an uncorrelated hash state is needed.
//!
//! # Truncation
//!
//! Every place the accumulator is narrowed goes through [`trunc_u32`]:
//! truncate toward zero, keep the low 32 bits. Between those points the
//! accumulator keeps its full f64 value (it can exceed 2^32 and carry
//! sub-integer bits into the next code unit). Outputs depend on both.

use crate::seed::SeedValue;

/// Initial accumulator value (0xefc8249d)
pub const MASH_INITIAL: u32 = 4_022_871_197;

const MASH_MULTIPLIER: f64 = 0.025_196_032_824_169_38;

/// 2^32
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^-32
pub(crate) const TWO_POW_NEG_32: f64 = 2.328_306_436_538_696_3e-10;

/// Truncate toward zero and keep the low 32 bits.
///
/// `x` must be finite and non-negative; the accumulator never leaves
/// `[0, 2^34)` so the `u64` cast is lossless before narrowing.
#[inline]
pub(crate) fn trunc_u32(x: f64) -> u32 {
    (x as u64) as u32
}

/// Stateful seed hasher
///
/// # Example
/// ```
/// use alea_prng::Mash;
///
/// let mut mash = Mash::new();
/// let a = mash.mash(" ");
/// let b = mash.mash(" ");
/// assert_ne!(a, b);
/// assert!((0.0..1.0).contains(&a));
/// ```
#[derive(Debug, Clone)]
pub struct Mash {
    n: f64,
}

impl Mash {
    /// Create a hasher with a fresh accumulator
    pub fn new() -> Self {
        Self {
            n: MASH_INITIAL as f64,
        }
    }

    /// Hash one value's textual form into a fraction in `[0, 1)`.
    ///
    /// The text is consumed as UTF-16 code units.
    pub fn mash(&mut self, data: impl Into<SeedValue>) -> f64 {
        self.mash_str(data.into().as_str())
    }

    /// Same as [`Mash::mash`] without the conversion.
    pub fn mash_str(&mut self, data: &str) -> f64 {
        let mut n = self.n;

        for unit in data.encode_utf16() {
            n += unit as f64;
            let mut h = MASH_MULTIPLIER * n;
            n = trunc_u32(h) as f64;
            h -= n;
            h *= n;
            n = trunc_u32(h) as f64;
            h -= n;
            n += h * TWO_POW_32;
        }

        self.n = n;
        trunc_u32(n) as f64 * TWO_POW_NEG_32
    }
}

impl Default for Mash {
    fn default() -> Self {
        Self::new()
    }
}

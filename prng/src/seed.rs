//! Seed values and entropy sources
//!
//! A seed is an ordered list of values that have a textual form. Only the
//! text reaches the hasher, so `42`, `42u8` and `"42"` seed identically.
//!
//! When no seed is given, [`DEFAULT_ENTROPY_WORDS`] random 32-bit words are
//! drawn from an [`EntropySource`] and used as the seed instead.

use crate::error::AleaError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of random words used when seeding from entropy
pub const DEFAULT_ENTROPY_WORDS: usize = 3;

/// One seed element, stored as its textual representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeedValue(String);

impl SeedValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeedValue {
    fn from(s: &str) -> Self {
        SeedValue(s.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(s: String) -> Self {
        SeedValue(s)
    }
}

impl From<&String> for SeedValue {
    fn from(s: &String) -> Self {
        SeedValue(s.clone())
    }
}

impl From<&SeedValue> for SeedValue {
    fn from(v: &SeedValue) -> Self {
        v.clone()
    }
}

impl From<char> for SeedValue {
    fn from(c: char) -> Self {
        SeedValue(c.to_string())
    }
}

impl From<bool> for SeedValue {
    fn from(b: bool) -> Self {
        SeedValue(b.to_string())
    }
}

macro_rules! seed_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SeedValue {
                fn from(v: $t) -> Self {
                    SeedValue(v.to_string())
                }
            }
        )*
    };
}

seed_value_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<f64> for SeedValue {
    fn from(v: f64) -> Self {
        SeedValue(format_number(v))
    }
}

impl From<f32> for SeedValue {
    fn from(v: f32) -> Self {
        SeedValue(format_number(v as f64))
    }
}

/// Text form of a float in the usual number spelling: shortest digits,
/// positional for exponents in `-7 < e < 21`, otherwise `1e+21` / `1e-7`.
/// Non-finite values and negative zero get their names.
fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e-7"
    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return v.to_string(),
    };

    if (-6..21).contains(&exponent) {
        v.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    }
}

// Config files may spell seed elements as strings, numbers or booleans.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeedValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
}

impl<'de> Deserialize<'de> for SeedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSeedValue::deserialize(deserializer)? {
            RawSeedValue::Text(s) => SeedValue(s),
            RawSeedValue::Unsigned(v) => v.into(),
            RawSeedValue::Signed(v) => v.into(),
            RawSeedValue::Float(v) => v.into(),
            RawSeedValue::Flag(v) => v.into(),
        })
    }
}

/// Collect anything iterable into a seed sequence
pub fn seed_values<I>(values: I) -> Vec<SeedValue>
where
    I: IntoIterator,
    I::Item: Into<SeedValue>,
{
    values.into_iter().map(Into::into).collect()
}

/// Source of random 32-bit words for entropy seeding
pub trait EntropySource {
    /// Fill `words` with random values
    fn fill_words(&mut self, words: &mut [u32]) -> Result<(), AleaError>;
}

/// Operating-system entropy via `OsRng`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_words(&mut self, words: &mut [u32]) -> Result<(), AleaError> {
        let mut bytes = vec![0u8; words.len() * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AleaError::Entropy(e.to_string()))?;

        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }
}

/// Draw a fresh entropy seed of [`DEFAULT_ENTROPY_WORDS`] words
pub fn entropy_seed<E: EntropySource + ?Sized>(
    entropy: &mut E,
) -> Result<Vec<SeedValue>, AleaError> {
    let mut words = [0u32; DEFAULT_ENTROPY_WORDS];
    entropy.fill_words(&mut words)?;
    Ok(seed_values(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(u32);

    impl EntropySource for Counting {
        fn fill_words(&mut self, words: &mut [u32]) -> Result<(), AleaError> {
            for w in words.iter_mut() {
                self.0 += 1;
                *w = self.0;
            }
            Ok(())
        }
    }

    #[test]
    fn test_numbers_and_strings_share_text() {
        assert_eq!(SeedValue::from(42u8), SeedValue::from("42"));
        assert_eq!(SeedValue::from(-7i64), SeedValue::from("-7"));
        assert_eq!(SeedValue::from(1.5f64), SeedValue::from("1.5"));
        assert_eq!(SeedValue::from(42.0f64), SeedValue::from("42"));
        assert_eq!(SeedValue::from(true), SeedValue::from("true"));
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(SeedValue::from(f64::NAN).as_str(), "NaN");
        assert_eq!(SeedValue::from(f64::INFINITY).as_str(), "Infinity");
        assert_eq!(SeedValue::from(f64::NEG_INFINITY).as_str(), "-Infinity");
        assert_eq!(SeedValue::from(-0.0f64).as_str(), "0");
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(SeedValue::from(1e21f64).as_str(), "1e+21");
        assert_eq!(SeedValue::from(2.5e300f64).as_str(), "2.5e+300");
        assert_eq!(SeedValue::from(1e-7f64).as_str(), "1e-7");
        assert_eq!(SeedValue::from(-1.5e-7f64).as_str(), "-1.5e-7");
        assert_eq!(SeedValue::from(1.23e-18f64).as_str(), "1.23e-18");
    }

    #[test]
    fn test_float_positional_bounds() {
        assert_eq!(SeedValue::from(1e20f64).as_str(), "100000000000000000000");
        assert_eq!(SeedValue::from(1e-6f64).as_str(), "0.000001");
        assert_eq!(SeedValue::from(-2.5f64).as_str(), "-2.5");
    }

    #[test]
    fn test_entropy_seed_uses_three_words() {
        let mut source = Counting(0);
        let seed = entropy_seed(&mut source).unwrap();
        assert_eq!(seed, seed_values(["1", "2", "3"]));
    }

    #[test]
    fn test_os_entropy_fills_words() {
        let mut words = [0u32; 8];
        OsEntropy.fill_words(&mut words).unwrap();
        // 8 zero words from the OS is not a realistic outcome
        assert!(words.iter().any(|&w| w != 0));
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let values: Vec<SeedValue> = serde_json::from_str(r#"["test", 42, -3, 1.5, true]"#).unwrap();
        assert_eq!(values, seed_values(["test", "42", "-3", "1.5", "true"]));

        let values: Vec<SeedValue> = serde_json::from_str("[1e21, 1e-7]").unwrap();
        assert_eq!(values, seed_values(["1e+21", "1e-7"]));
    }
}

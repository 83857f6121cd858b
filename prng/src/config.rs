//! Generator configuration
//!
//! Construction never touches ambient randomness implicitly: a config says
//! either which values to seed with, or that OS entropy should be used.
//!
//! ```json
//! { "seed": { "type": "Values", "values": ["test", 42] } }
//! { "seed": { "type": "Entropy" } }
//! ```

use crate::error::AleaError;
use crate::generator::Alea;
use crate::seed::{EntropySource, OsEntropy, SeedValue};
use serde::{Deserialize, Serialize};

/// Where the initial seed comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedSource {
    /// Explicit seed sequence (may be empty)
    Values { values: Vec<SeedValue> },
    /// Random words from the entropy source
    Entropy,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AleaConfig {
    pub seed: SeedSource,
}

impl AleaConfig {
    /// Config for an explicit seed sequence
    pub fn with_values(values: Vec<SeedValue>) -> Self {
        Self {
            seed: SeedSource::Values { values },
        }
    }

    /// Config for entropy seeding
    pub fn entropy() -> Self {
        Self {
            seed: SeedSource::Entropy,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AleaError> {
        serde_json::from_str(json)
            .map_err(|e| AleaError::Config(format!("Config parse failed: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, AleaError> {
        serde_json::to_string(self)
            .map_err(|e| AleaError::Serialization(format!("Config serialization failed: {}", e)))
    }
}

impl Alea {
    /// Build a generator from a config, using OS entropy if requested
    pub fn from_config(config: &AleaConfig) -> Result<Self, AleaError> {
        Self::from_config_with(config, &mut OsEntropy)
    }

    /// Build a generator from a config with a caller-supplied entropy source
    pub fn from_config_with<E: EntropySource + ?Sized>(
        config: &AleaConfig,
        entropy: &mut E,
    ) -> Result<Self, AleaError> {
        match &config.seed {
            SeedSource::Values { values } => Ok(Alea::new(values)),
            SeedSource::Entropy => Alea::from_entropy_source(entropy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_values;

    #[test]
    fn test_values_config_from_json() {
        let config = AleaConfig::from_json(r#"{"seed": {"type": "Values", "values": ["test"]}}"#)
            .unwrap();
        assert_eq!(config, AleaConfig::with_values(seed_values(["test"])));

        let mut rng = Alea::from_config(&config).unwrap();
        assert_eq!(rng.random(), 0.5442283214069903);
    }

    #[test]
    fn test_numeric_values_in_config() {
        let config =
            AleaConfig::from_json(r#"{"seed": {"type": "Values", "values": [1, 2, 3]}}"#).unwrap();
        let mut rng = Alea::from_config(&config).unwrap();
        assert_eq!(rng.random(), 0.9087351586204022);
    }

    #[test]
    fn test_entropy_config() {
        let config = AleaConfig::from_json(r#"{"seed": {"type": "Entropy"}}"#).unwrap();
        assert_eq!(config, AleaConfig::entropy());

        let rng = Alea::from_config(&config).unwrap();
        assert_eq!(rng.initial_args().len(), crate::seed::DEFAULT_ENTROPY_WORDS);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let err = AleaConfig::from_json(r#"{"seed": {"type": "Clock"}}"#).unwrap_err();
        assert!(matches!(err, AleaError::Config(_)));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = AleaConfig::with_values(seed_values(["a", "b"]));
        let json = config.to_json().unwrap();
        assert_eq!(AleaConfig::from_json(&json).unwrap(), config);
    }
}

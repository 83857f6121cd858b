//! Error types
//!
//! Drawing never fails. Errors only come from the edges: the entropy
//! source, snapshot (de)serialization and configuration.

use thiserror::Error;

/// Errors from seeding, checkpointing and configuration
#[derive(Debug, Error, PartialEq)]
pub enum AleaError {
    #[error("Entropy source failed: {0}")]
    Entropy(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State validation failed: {0}")]
    StateValidation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

//! PyO3 bindings
//!
//! Exposes the generator to Python as `Alea`.

pub mod generator;

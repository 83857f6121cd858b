//! PyO3 wrapper for Alea
//!
//! # Example (from Python)
//!
//! ```python
//! from alea_prng import Alea
//!
//! rng = Alea(["test"])
//! value = rng.random()
//! rng.cycle(3)
//! rng.restart()
//! assert rng.random() == value
//! ```

use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyInt, PyList};

use crate::generator::Alea as RustAlea;
use crate::checkpoint::AleaSnapshot;
use crate::seed::SeedValue;

/// Convert one Python object into a seed value.
///
/// Numbers and booleans go through the Rust conversions so a Python seed
/// list hashes like the same list built in Rust (`True` → `"true"`,
/// `1e-07` → `"1e-7"`). Anything else uses `str()`.
fn seed_value_from_py(item: &Bound<'_, PyAny>) -> PyResult<SeedValue> {
    // bool first: it is a subclass of int
    if item.is_instance_of::<PyBool>() {
        return Ok(SeedValue::from(item.extract::<bool>()?));
    }
    if item.is_instance_of::<PyInt>() {
        if let Ok(v) = item.extract::<i128>() {
            return Ok(SeedValue::from(v));
        }
    }
    if item.is_instance_of::<PyFloat>() {
        return Ok(SeedValue::from(item.extract::<f64>()?));
    }
    Ok(SeedValue::from(item.str()?.extract::<String>()?))
}

/// Convert a Python list into seed values
fn seed_from_py(values: &Bound<'_, PyList>) -> PyResult<Vec<SeedValue>> {
    values.iter().map(|item| seed_value_from_py(&item)).collect()
}

fn runtime_error(context: &str, e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{}: {}", context, e))
}

/// Python wrapper for the Rust generator
#[pyclass(name = "Alea")]
pub struct PyAlea {
    inner: RustAlea,
}

#[pymethods]
impl PyAlea {
    /// Create a generator; `None` seeds from OS entropy
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<&Bound<'_, PyList>>) -> PyResult<Self> {
        let inner = match seed {
            Some(values) => RustAlea::new(seed_from_py(values)?),
            None => RustAlea::from_entropy()
                .map_err(|e| runtime_error("Failed to seed generator", e))?,
        };
        Ok(PyAlea { inner })
    }

    fn random(&mut self) -> f64 {
        self.inner.random()
    }

    fn fract53(&mut self) -> f64 {
        self.inner.fract53()
    }

    fn int32(&mut self) -> u32 {
        self.inner.int32()
    }

    #[pyo3(signature = (runs=None))]
    fn cycle(&mut self, runs: Option<i64>) {
        self.inner.cycle(runs)
    }

    fn restart(&mut self) {
        self.inner.restart()
    }

    /// Reseed; `None` draws fresh OS entropy
    #[pyo3(signature = (seed=None))]
    fn seed(&mut self, seed: Option<&Bound<'_, PyList>>) -> PyResult<()> {
        let values = seed.map(seed_from_py).transpose()?;
        self.inner
            .reseed(values)
            .map_err(|e| runtime_error("Failed to reseed generator", e))
    }

    /// Stored seed, as strings
    fn initial_args(&self) -> Vec<String> {
        self.inner
            .initial_args()
            .iter()
            .map(|v| v.as_str().to_string())
            .collect()
    }

    /// Snapshot as a JSON string
    fn snapshot(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .and_then(|s| s.to_json())
            .map_err(|e| runtime_error("Snapshot failed", e))
    }

    /// Create a generator from a JSON snapshot
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let snapshot = AleaSnapshot::from_json(json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        let inner = RustAlea::restore(snapshot)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(PyAlea { inner })
    }
}

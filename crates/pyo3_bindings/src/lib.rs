//! PyO3 bindings for the tradeflow feature extractor.
//!
//! Exposes the Rust feature computation to Python:
//! - `Trade` records
//! - `compute_features(trades) -> dict[str, float]`
//! - A configurable `FeatureExtractor`

use std::collections::BTreeMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use tradeflow_core::{
    Error as RustError, FeatureConfig as RustFeatureConfig, Trade as RustTrade, FEATURE_NAMES,
};
use tradeflow_features::FeatureExtractor;

// ============================================================================
// Python-exposed Types
// ============================================================================

/// A single trade from the exchange.
#[pyclass]
#[derive(Clone)]
pub struct Trade {
    #[pyo3(get, set)]
    pub price: f64,
    #[pyo3(get, set)]
    pub quantity: f64,
    #[pyo3(get, set)]
    pub side: String,
    #[pyo3(get, set)]
    pub timestamp: i64,
}

#[pymethods]
impl Trade {
    #[new]
    fn new(price: f64, quantity: f64, side: String, timestamp: i64) -> Self {
        Trade { price, quantity, side, timestamp }
    }

    fn __repr__(&self) -> String {
        format!(
            "Trade(price={}, quantity={}, side='{}', timestamp={})",
            self.price, self.quantity, self.side, self.timestamp
        )
    }
}

impl From<&Trade> for RustTrade {
    fn from(t: &Trade) -> Self {
        RustTrade::new(t.price, t.quantity, t.side.as_str(), t.timestamp)
    }
}

fn to_py_err(err: RustError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_rust_trades(trades: &[Trade]) -> Vec<RustTrade> {
    trades.iter().map(RustTrade::from).collect()
}

// ============================================================================
// Extractor
// ============================================================================

/// Python wrapper for FeatureExtractor.
#[pyclass(name = "FeatureExtractor")]
pub struct PyFeatureExtractor {
    inner: FeatureExtractor,
}

#[pymethods]
impl PyFeatureExtractor {
    #[new]
    #[pyo3(signature = (
        denominator_epsilon = 1e-5,
        zero_variance_threshold = 1e-8,
        millis_per_second = 1000.0,
    ))]
    fn new(
        denominator_epsilon: f64,
        zero_variance_threshold: f64,
        millis_per_second: f64,
    ) -> PyResult<Self> {
        let config = RustFeatureConfig {
            denominator_epsilon,
            zero_variance_threshold,
            millis_per_second,
        };
        config.validate().map_err(to_py_err)?;
        Ok(PyFeatureExtractor {
            inner: FeatureExtractor::new(config),
        })
    }

    /// Build from a JSON configuration document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = RustFeatureConfig::from_json(json).map_err(to_py_err)?;
        Ok(PyFeatureExtractor {
            inner: FeatureExtractor::new(config),
        })
    }

    /// Compute features for a window of trades.
    fn compute(&self, trades: Vec<Trade>) -> PyResult<BTreeMap<String, f64>> {
        let trades = to_rust_trades(&trades);
        let features = self.inner.compute(&trades).map_err(to_py_err)?;
        Ok(features.to_map())
    }

    /// Compute features as a list in the given column order.
    fn compute_row(&self, trades: Vec<Trade>, columns: Vec<String>) -> PyResult<Vec<f64>> {
        let trades = to_rust_trades(&trades);
        let features = self.inner.compute(&trades).map_err(to_py_err)?;
        features.select(columns.as_slice()).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "FeatureExtractor(denominator_epsilon={}, zero_variance_threshold={}, \
             millis_per_second={})",
            config.denominator_epsilon, config.zero_variance_threshold, config.millis_per_second
        )
    }
}

/// Compute rolling features from trades using the default configuration.
#[pyfunction]
fn compute_features(trades: Vec<Trade>) -> PyResult<BTreeMap<String, f64>> {
    let trades = to_rust_trades(&trades);
    let features = tradeflow_features::compute_features(&trades).map_err(to_py_err)?;
    Ok(features.to_map())
}

// ============================================================================
// Module Definition
// ============================================================================

/// Trade window feature extraction implemented in Rust.
#[pymodule]
fn feature_extractor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<Trade>()?;
    m.add_class::<PyFeatureExtractor>()?;

    // Functions
    m.add_function(wrap_pyfunction!(compute_features, m)?)?;

    m.add("FEATURE_NAMES", PyTuple::new_bound(m.py(), FEATURE_NAMES))?;

    Ok(())
}

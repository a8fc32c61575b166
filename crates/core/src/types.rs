//! Core data types for the tradeflow system.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Timestamp in milliseconds since Unix epoch (UTC).
pub type TimestampMs = i64;

/// Aggressor side tag of a trade.
///
/// Only the exact tags `"BUY"` and `"SELL"` are recognised; anything else is
/// kept verbatim as [`Side::Other`] and counts towards neither side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Side {
    /// Buyer-initiated trade.
    Buy,
    /// Seller-initiated trade.
    Sell,
    /// Any other tag.
    Other(String),
}

impl Side {
    /// The string tag for this side.
    pub fn as_str(&self) -> &str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
            Side::Other(tag) => tag,
        }
    }

    #[inline]
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }

    #[inline]
    pub fn is_sell(&self) -> bool {
        matches!(self, Side::Sell)
    }
}

impl From<&str> for Side {
    fn from(tag: &str) -> Self {
        match tag {
            "BUY" => Side::Buy,
            "SELL" => Side::Sell,
            other => Side::Other(other.to_string()),
        }
    }
}

impl From<String> for Side {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "BUY" => Side::Buy,
            "SELL" => Side::Sell,
            _ => Side::Other(tag),
        }
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        match side {
            Side::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trade (print) from the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade price.
    pub price: f64,
    /// Trade quantity.
    pub quantity: f64,
    /// Aggressor side.
    pub side: Side,
    /// Timestamp in milliseconds.
    pub timestamp: TimestampMs,
}

impl Trade {
    /// Create a new trade.
    pub fn new(
        price: f64,
        quantity: f64,
        side: impl Into<Side>,
        timestamp: TimestampMs,
    ) -> Self {
        Self {
            price,
            quantity,
            side: side.into(),
            timestamp,
        }
    }
}

/// Number of features in a [`FeatureSet`].
pub const FEATURE_COUNT: usize = 13;

/// Feature names in canonical column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mean_price",
    "price_std",
    "price_range",
    "price_momentum",
    "price_zscore",
    "price_skewness",
    "price_kurtosis",
    "mean_quantity",
    "std_quantity",
    "volume_per_second",
    "buy_sell_ratio",
    "trades_per_second",
    "order_flow_imbalance",
];

/// Summary features over one window of trades.
///
/// Serializes as a flat `name -> value` JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Arithmetic mean of prices.
    pub mean_price: f64,
    /// Population standard deviation of prices.
    pub price_std: f64,
    /// Max price minus min price.
    pub price_range: f64,
    /// Relative change from first to last price.
    pub price_momentum: f64,
    /// Z-score of the last price.
    pub price_zscore: f64,
    /// Standardized third central moment of prices.
    pub price_skewness: f64,
    /// Excess kurtosis of prices.
    pub price_kurtosis: f64,
    /// Arithmetic mean of quantities.
    pub mean_quantity: f64,
    /// Population standard deviation of quantities.
    pub std_quantity: f64,
    /// Total quantity per second of window span.
    pub volume_per_second: f64,
    /// Buy trade count over sell trade count.
    pub buy_sell_ratio: f64,
    /// Trade count per second of window span.
    pub trades_per_second: f64,
    /// Normalized buy/sell count difference, roughly in [-1, 1].
    pub order_flow_imbalance: f64,
}

impl FeatureSet {
    /// Values in [`FEATURE_NAMES`] order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mean_price,
            self.price_std,
            self.price_range,
            self.price_momentum,
            self.price_zscore,
            self.price_skewness,
            self.price_kurtosis,
            self.mean_quantity,
            self.std_quantity,
            self.volume_per_second,
            self.buy_sell_ratio,
            self.trades_per_second,
            self.order_flow_imbalance,
        ]
    }

    /// Look up a feature by its (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values()[idx])
    }

    /// Iterate `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }

    /// Name to value mapping.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(name, value)| (name.to_string(), value)).collect()
    }

    /// Values as a vector in canonical order.
    pub fn to_vector(&self) -> Vec<f64> {
        self.values().to_vec()
    }

    /// Build a model input row with the given column order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<f64>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| Error::data(format!("unknown feature: {name}")))
            })
            .collect()
    }

    /// Whether every feature is finite.
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

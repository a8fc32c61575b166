//! Feature extraction over a window of trades.
//!
//! Combines price moments, quantity moments and order flow counts into a
//! single [`FeatureSet`].

use crate::{
    flow::{time_span_seconds, FlowCounts},
    moments::Moments,
};
use tracing::{debug, warn};
use tradeflow_core::{Error, FeatureConfig, FeatureSet, Result, Trade};

/// Stateless feature extractor.
///
/// Every call recomputes all statistics from the full window it is given.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Create a new extractor from configuration.
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Compute the feature set for `trades`.
    ///
    /// Trades are expected in ascending timestamp order; this is not checked.
    ///
    /// # Errors
    /// - [`Error::EmptyInput`] if `trades` is empty.
    /// - [`Error::NonFiniteInput`] for the first trade with a NaN or infinite
    ///   price or quantity.
    pub fn compute(&self, trades: &[Trade]) -> Result<FeatureSet> {
        if trades.is_empty() {
            warn!("rejecting empty trade window");
            return Err(Error::EmptyInput);
        }
        validate_finite(trades)?;

        let eps = self.config.denominator_epsilon;
        let threshold = self.config.zero_variance_threshold;

        let prices: Vec<f64> = trades.iter().map(|t| t.price).collect();
        let quantities: Vec<f64> = trades.iter().map(|t| t.quantity).collect();

        let price = Moments::from_values(&prices);
        let quantity = Moments::from_values(&quantities);
        let flow = FlowCounts::from_trades(trades);
        let time_span = time_span_seconds(trades, self.config.millis_per_second);

        let first_price = prices[0];
        let last_price = prices[prices.len() - 1];
        let price_momentum = if prices.len() < 2 || first_price == 0.0 {
            0.0
        } else {
            (last_price - first_price) / first_price
        };

        let features = FeatureSet {
            mean_price: price.mean,
            price_std: price.std_dev,
            price_range: price.range(),
            price_momentum,
            price_zscore: price.zscore(last_price, threshold),
            price_skewness: price.skewness(threshold),
            price_kurtosis: price.excess_kurtosis(threshold),
            mean_quantity: quantity.mean,
            std_quantity: quantity.std_dev,
            volume_per_second: quantity.sum / (time_span + eps),
            buy_sell_ratio: flow.buy_sell_ratio(eps),
            trades_per_second: flow.total() as f64 / (time_span + eps),
            order_flow_imbalance: flow.order_flow_imbalance(eps),
        };

        debug!(
            trades = trades.len(),
            buys = flow.buy,
            sells = flow.sell,
            time_span,
            "computed trade window features"
        );

        Ok(features)
    }
}

/// Compute features with the default configuration.
pub fn compute_features(trades: &[Trade]) -> Result<FeatureSet> {
    FeatureExtractor::default().compute(trades)
}

fn validate_finite(trades: &[Trade]) -> Result<()> {
    for (index, trade) in trades.iter().enumerate() {
        let field = if !trade.price.is_finite() {
            "price"
        } else if !trade.quantity.is_finite() {
            "quantity"
        } else {
            continue;
        };
        warn!(index, field, "rejecting trade with non-finite value");
        return Err(Error::non_finite(index, field));
    }
    Ok(())
}

//! Order flow counts and trade timing.
//!
//! Counts buy- and sell-initiated trades in a window and derives the
//! epsilon-guarded ratio and imbalance features from them.

use tradeflow_core::{Side, Trade};

/// Trade counts per side over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowCounts {
    /// Trades tagged `BUY`.
    pub buy: usize,
    /// Trades tagged `SELL`.
    pub sell: usize,
    /// Trades with any other tag.
    pub other: usize,
}

impl FlowCounts {
    /// Count sides over a trade slice.
    pub fn from_trades(trades: &[Trade]) -> Self {
        let mut counts = Self::default();
        for trade in trades {
            counts.add(&trade.side);
        }
        counts
    }

    fn add(&mut self, side: &Side) {
        match side {
            Side::Buy => self.buy += 1,
            Side::Sell => self.sell += 1,
            Side::Other(_) => self.other += 1,
        }
    }

    /// Total number of trades counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.buy + self.sell + self.other
    }

    /// Buy count over sell count, with `eps` added to the denominator.
    pub fn buy_sell_ratio(&self, eps: f64) -> f64 {
        self.buy as f64 / (self.sell as f64 + eps)
    }

    /// (buy - sell) / (buy + sell + eps); 0 when neither side traded.
    pub fn order_flow_imbalance(&self, eps: f64) -> f64 {
        let buy = self.buy as f64;
        let sell = self.sell as f64;
        (buy - sell) / (buy + sell + eps)
    }
}

/// Seconds between the first and last trade; 0 for fewer than two trades.
///
/// Ordering is not checked, so an out-of-order window can yield a negative span.
/// The difference is taken in `i128`, so it is exact over the whole `i64` range.
pub fn time_span_seconds(trades: &[Trade], millis_per_second: f64) -> f64 {
    match (trades.first(), trades.last()) {
        (Some(first), Some(last)) if trades.len() >= 2 => {
            let millis = i128::from(last.timestamp) - i128::from(first.timestamp);
            millis as f64 / millis_per_second
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-5;

    fn make_trade(ts_ms: i64, side: &str) -> Trade {
        Trade::new(50000.0, 1.0, side, ts_ms)
    }

    #[test]
    fn test_counts() {
        let trades = vec![
            make_trade(0, "BUY"),
            make_trade(1, "SELL"),
            make_trade(2, "BUY"),
            make_trade(3, "NONE"),
        ];
        let counts = FlowCounts::from_trades(&trades);
        assert_eq!(counts, FlowCounts { buy: 2, sell: 1, other: 1 });
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_no_sells() {
        let counts = FlowCounts { buy: 1, sell: 0, other: 0 };
        assert_relative_eq!(counts.buy_sell_ratio(EPS), 100_000.0, max_relative = 1e-12);
        assert!(counts.buy_sell_ratio(EPS).is_finite());
        let ofi = counts.order_flow_imbalance(EPS);
        assert_relative_eq!(ofi, 1.0 / 1.00001, max_relative = 1e-12);
    }

    #[test]
    fn test_no_sides() {
        let counts = FlowCounts { buy: 0, sell: 0, other: 3 };
        assert_eq!(counts.buy_sell_ratio(EPS), 0.0);
        assert_eq!(counts.order_flow_imbalance(EPS), 0.0);
    }

    #[test]
    fn test_balanced() {
        let counts = FlowCounts { buy: 5, sell: 5, other: 0 };
        assert_eq!(counts.order_flow_imbalance(EPS), 0.0);
        assert_relative_eq!(counts.buy_sell_ratio(EPS), 5.0 / 5.00001, max_relative = 1e-12);
    }

    #[test]
    fn test_time_span() {
        assert_eq!(time_span_seconds(&[], 1000.0), 0.0);
        assert_eq!(time_span_seconds(&[make_trade(5_000, "BUY")], 1000.0), 0.0);

        let trades = vec![
            make_trade(1_000, "BUY"),
            make_trade(1_500, "SELL"),
            make_trade(3_500, "BUY"),
        ];
        assert_relative_eq!(time_span_seconds(&trades, 1000.0), 2.5);
    }

    #[test]
    fn test_time_span_out_of_order() {
        // Last trade earlier than the first: negative span, no reordering
        let trades = vec![
            make_trade(3_000, "BUY"),
            make_trade(9_000, "SELL"),
            make_trade(1_000, "BUY"),
        ];
        assert_relative_eq!(time_span_seconds(&trades, 1000.0), -2.0);
    }

    #[test]
    fn test_time_span_full_i64_range() {
        let trades = vec![make_trade(i64::MIN, "BUY"), make_trade(i64::MAX, "SELL")];
        let span = time_span_seconds(&trades, 1000.0);
        assert!(span.is_finite() && span > 0.0);
        assert_relative_eq!(span, u64::MAX as f64 / 1000.0, max_relative = 1e-12);

        let reversed = vec![make_trade(i64::MAX, "BUY"), make_trade(i64::MIN, "SELL")];
        assert_relative_eq!(
            time_span_seconds(&reversed, 1000.0),
            -(u64::MAX as f64) / 1000.0,
            max_relative = 1e-12
        );
    }
}

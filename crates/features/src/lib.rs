//! Feature computation for the tradeflow system.
//!
//! This crate handles:
//! - Price and quantity moments (mean, population std, skewness, kurtosis)
//! - Buy/sell counts and order flow imbalance
//! - Trade timing (window span, per-second rates)
//! - The combined feature extractor

pub mod moments;
pub mod flow;
pub mod extractor;

pub use moments::Moments;
pub use flow::{time_span_seconds, FlowCounts};
pub use extractor::{compute_features, FeatureExtractor};

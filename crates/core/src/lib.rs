//! Core types and configuration for the tradeflow system.
//!
//! This crate provides shared types used across all other crates:
//! - Trade records and side tags
//! - The feature set returned by the extractor
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::FeatureConfig;
pub use error::{Error, Result};
pub use types::*;

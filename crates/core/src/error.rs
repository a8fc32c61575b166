//! Error types for the tradeflow feature extractor.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tradeflow system.
#[derive(Error, Debug)]
pub enum Error {
    /// The trade sequence was empty.
    #[error("Invalid input: empty trade sequence")]
    EmptyInput,

    /// A trade carried a NaN or infinite value.
    #[error("Invalid input: non-finite {field} in trade at index {index}")]
    NonFiniteInput {
        /// Position of the offending trade in the input sequence.
        index: usize,
        /// Name of the offending field (`price` or `quantity`).
        field: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (invalid or missing data).
    #[error("Data error: {0}")]
    Data(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a non-finite input error.
    pub fn non_finite(index: usize, field: &'static str) -> Self {
        Error::NonFiniteInput { index, field }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Whether this error reports an empty trade sequence.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_distinguishable() {
        assert!(Error::EmptyInput.is_empty_input());
        assert!(!Error::non_finite(3, "price").is_empty_input());
        assert!(!Error::config("bad").is_empty_input());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::non_finite(2, "quantity").to_string(),
            "Invalid input: non-finite quantity in trade at index 2"
        );
        assert_eq!(Error::EmptyInput.to_string(), "Invalid input: empty trade sequence");
    }
}

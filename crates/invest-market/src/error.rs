//! Error types for market-data lookups

use thiserror::Error;

/// Market-data specific errors
///
/// Every variant is a failed lookup. A lookup that succeeds but carries no
/// previous close is not an error; see [`crate::QuoteInfo::previous_close`].
#[derive(Debug, Error)]
pub enum MarketError {
    /// The provider answered with an error for this symbol
    #[error("Lookup failed for {symbol}: {reason}")]
    LookupFailed { symbol: String, reason: String },

    /// The provider has no record for the symbol
    #[error("Symbol not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for market-data operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::NotFound("ZZZ".to_string());
        assert_eq!(err.to_string(), "Symbol not found: ZZZ");

        let err = MarketError::LookupFailed {
            symbol: "AAPL".to_string(),
            reason: "HTTP 500".to_string(),
        };
        assert_eq!(err.to_string(), "Lookup failed for AAPL: HTTP 500");
    }
}

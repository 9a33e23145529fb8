//! Ticker symbols

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-supplied ticker symbol
///
/// The only rule is non-emptiness. The value is kept verbatim: no trimming and
/// no case folding, since the data provider decides what a valid symbol is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Accept any non-empty string
    pub fn new(symbol: impl Into<String>) -> Option<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            None
        } else {
            Some(Self(symbol))
        }
    }

    /// The symbol as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TickerSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symbol_rejected() {
        assert!(TickerSymbol::new("").is_none());
    }

    #[test]
    fn test_symbol_is_not_normalized() {
        let ticker = TickerSymbol::new(" aapl ").unwrap();
        assert_eq!(ticker.as_str(), " aapl ");
        assert_eq!(ticker.to_string(), " aapl ");
    }
}

//! Input collection and the gate in front of the flow

use invest_market::TickerSymbol;
use serde::Deserialize;
use std::fmt;

/// The submitted form
///
/// Fields are taken as entered: no trimming, no case folding.
#[derive(Clone, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub stock1: String,
    #[serde(default)]
    pub stock2: String,
    /// Masked API key field; only offered when the environment has no key
    #[serde(default)]
    pub api_key: String,
}

impl FormInput {
    /// Input with two symbols and no prompted key
    pub fn new(stock1: impl Into<String>, stock2: impl Into<String>) -> Self {
        Self {
            stock1: stock1.into(),
            stock2: stock2.into(),
            api_key: String::new(),
        }
    }

    /// Attach a prompted API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// The prompted key, if the field was filled in
    pub fn prompted_key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for FormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormInput")
            .field("stock1", &self.stock1)
            .field("stock2", &self.stock2)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "****" })
            .finish()
    }
}

/// Read both ticker fields
pub fn collect_tickers(input: &FormInput) -> (Option<TickerSymbol>, Option<TickerSymbol>) {
    (
        TickerSymbol::new(input.stock1.clone()),
        TickerSymbol::new(input.stock2.clone()),
    )
}

/// Two symbols that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerPair {
    pub first: TickerSymbol,
    pub second: TickerSymbol,
}

impl TickerPair {
    /// Proceed only when both symbols are present
    pub fn gate(first: Option<TickerSymbol>, second: Option<TickerSymbol>) -> Option<Self> {
        Some(Self {
            first: first?,
            second: second?,
        })
    }

    /// Collect and gate in one step
    pub fn from_input(input: &FormInput) -> Option<Self> {
        let (first, second) = collect_tickers(input);
        Self::gate(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_both() {
        assert!(TickerPair::from_input(&FormInput::new("AAPL", "")).is_none());
        assert!(TickerPair::from_input(&FormInput::new("", "MSFT")).is_none());
        assert!(TickerPair::from_input(&FormInput::default()).is_none());

        let pair = TickerPair::from_input(&FormInput::new("AAPL", "MSFT")).unwrap();
        assert_eq!(pair.first.as_str(), "AAPL");
        assert_eq!(pair.second.as_str(), "MSFT");
    }

    #[test]
    fn test_values_pass_through() {
        let (first, second) = collect_tickers(&FormInput::new(" brk-b", "msft "));
        assert_eq!(first.unwrap().as_str(), " brk-b");
        assert_eq!(second.unwrap().as_str(), "msft ");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let input = FormInput::new("AAPL", "MSFT").with_api_key("sk-secret");
        let debug = format!("{input:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("****"));
        assert_eq!(input.prompted_key(), Some("sk-secret"));
        assert_eq!(FormInput::default().prompted_key(), None);
    }
}

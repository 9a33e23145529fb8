//! Market-data provider trait

use crate::{Result, TickerSymbol};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Info record returned by a provider for one symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Symbol as the provider reports it
    pub symbol: String,
    /// Previous regular-market close, if the provider has one
    pub previous_close: Option<f64>,
    /// Trading currency
    pub currency: Option<String>,
    /// Exchange name
    pub exchange: Option<String>,
}

/// Trait for market-data providers
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Look up the info record for a symbol
    async fn quote_info(&self, ticker: &TickerSymbol) -> Result<QuoteInfo>;

    /// Look up the previous regular-market close for a symbol
    ///
    /// `Ok(None)` means the lookup worked but the record has no close;
    /// `Err` means the lookup itself failed.
    async fn previous_close(&self, ticker: &TickerSymbol) -> Result<Option<f64>> {
        Ok(self.quote_info(ticker).await?.previous_close)
    }

    /// Get the provider name (e.g., "yahoo")
    fn name(&self) -> &str;
}

//! Yahoo Finance API client

use crate::error::{MarketError, Result};
use crate::{MarketDataProvider, QuoteInfo, TickerSymbol};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};
use yahoo_finance_api as yahoo;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Yahoo Finance client
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl YahooConfig {
    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Yahoo Finance API client
pub struct YahooFinanceClient {
    connector: yahoo::YahooConnector,
}

impl fmt::Debug for YahooFinanceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YahooFinanceClient").finish_non_exhaustive()
    }
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(YahooConfig::default())
    }

    /// Create a new Yahoo Finance client with custom configuration
    pub fn with_config(config: YahooConfig) -> Result<Self> {
        let connector = yahoo::YahooConnector::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarketError::ConfigError(e.to_string()))?;

        Ok(Self { connector })
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    #[instrument(skip(self, ticker), fields(symbol = %ticker))]
    async fn quote_info(&self, ticker: &TickerSymbol) -> Result<QuoteInfo> {
        debug!("Requesting chart metadata");

        let response = self
            .connector
            .get_latest_quotes(ticker.as_str(), "1d")
            .await
            .map_err(|e| lookup_error(ticker, e))?;

        quote_info_from(ticker, &response)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

/// Classify a connector error for `ticker`
fn lookup_error(ticker: &TickerSymbol, error: yahoo::YahooError) -> MarketError {
    match error {
        yahoo::YahooError::NoResult => MarketError::NotFound(ticker.to_string()),
        yahoo::YahooError::ApiError(message)
            if message
                .code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case("Not Found")) =>
        {
            MarketError::NotFound(ticker.to_string())
        }
        other => MarketError::LookupFailed {
            symbol: ticker.to_string(),
            reason: other.to_string(),
        },
    }
}

fn quote_info_from(ticker: &TickerSymbol, response: &yahoo::YResponse) -> Result<QuoteInfo> {
    // metadata() indexes the first block, so an empty list must be caught first
    if response.chart.result.as_ref().is_some_and(Vec::is_empty) {
        return Err(MarketError::LookupFailed {
            symbol: ticker.to_string(),
            reason: "empty chart result".to_string(),
        });
    }

    let meta = response.metadata().map_err(|e| lookup_error(ticker, e))?;

    Ok(QuoteInfo {
        symbol: if meta.symbol.is_empty() {
            ticker.to_string()
        } else {
            meta.symbol
        },
        previous_close: meta.previous_close.or(meta.chart_previous_close),
        currency: meta.currency,
        exchange: Some(meta.exchange_name).filter(|name| !name.is_empty()),
    })
}

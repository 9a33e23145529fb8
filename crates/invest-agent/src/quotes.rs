//! Previous-close lookups, one ticker at a time

use crate::page::{Block, BlockKind, PresentationSink};
use invest_market::{MarketDataProvider, MarketError, TickerSymbol};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A closing price as the provider reported it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Accept only "truthy" values: zero and NaN count as no price
    pub fn new(value: f64) -> Option<Self> {
        if value == 0.0 || value.is_nan() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    // Shortest round-trip form that keeps `.0` on whole numbers: 150.0, 123.45
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Result of one quote lookup
#[derive(Debug)]
pub enum QuoteOutcome {
    /// The record carried a usable previous close
    Price(Price),
    /// The lookup worked but the previous close was missing, zero, or NaN
    Unavailable,
    /// The lookup itself failed
    LookupFailed(MarketError),
}

impl QuoteOutcome {
    /// Classify a provider result
    pub fn from_lookup(result: invest_market::Result<Option<f64>>) -> Self {
        match result {
            Ok(close) => close.and_then(Price::new).map_or(Self::Unavailable, Self::Price),
            Err(e) => Self::LookupFailed(e),
        }
    }

    /// The block this outcome renders as
    pub fn to_block(&self, ticker: &TickerSymbol) -> Block {
        match self {
            Self::Price(price) => Block::labelled(
                BlockKind::Text,
                format!("{ticker} Closing Price:"),
                price.to_string(),
            ),
            Self::Unavailable => Block::new(
                BlockKind::Warning,
                format!("Previous close data unavailable for {ticker}."),
            ),
            Self::LookupFailed(_) => Block::new(
                BlockKind::Warning,
                format!("Error retrieving financial data for {ticker}."),
            ),
        }
    }
}

/// Fetches and renders previous closes
#[derive(Clone)]
pub struct QuoteFetcher {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteFetcher {
    /// Create a fetcher over a market-data provider
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Look up one ticker's previous close
    pub async fn fetch_quote(&self, ticker: &TickerSymbol) -> QuoteOutcome {
        let outcome = QuoteOutcome::from_lookup(self.provider.previous_close(ticker).await);
        match &outcome {
            QuoteOutcome::Price(price) => debug!(%ticker, %price, "Previous close found"),
            QuoteOutcome::Unavailable => debug!(%ticker, "Previous close missing"),
            QuoteOutcome::LookupFailed(e) => {
                warn!(%ticker, provider = self.provider.name(), error = %e, "Quote lookup failed");
            }
        }
        outcome
    }

    /// Look up one ticker and render its line or warning
    pub async fn render<S: PresentationSink + ?Sized>(&self, ticker: &TickerSymbol, sink: &mut S) {
        let outcome = self.fetch_quote(ticker).await;
        sink.render(outcome.to_block(ticker));
    }
}

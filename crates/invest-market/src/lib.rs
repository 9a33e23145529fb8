//! Market-data access for invest-agent
//!
//! This crate answers one question for a ticker symbol: what was its previous
//! regular-market close? It includes:
//!
//! - [`TickerSymbol`], a pass-through, non-empty symbol
//! - [`QuoteInfo`], the provider's info record for a symbol
//! - [`MarketDataProvider`], the provider trait
//! - [`YahooFinanceClient`], a provider backed by `yahoo_finance_api`

pub mod error;
pub mod provider;
pub mod ticker;
pub mod yahoo;

pub use error::{MarketError, Result};
pub use provider::{MarketDataProvider, QuoteInfo};
pub use ticker::TickerSymbol;
pub use yahoo::{YahooConfig, YahooFinanceClient};

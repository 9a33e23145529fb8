//! Stock comparison agent
//!
//! Takes two ticker symbols, asks a text-completion provider for a comparison
//! report, and looks up each symbol's previous close. Output goes to a
//! [`PresentationSink`] in a fixed order:
//!
//! 1. credential banner (info or warning)
//! 2. title and caption
//! 3. once both symbols are present: the report (or its error banner)
//! 4. the first symbol's closing price (or its warning)
//! 5. the second symbol's closing price (or its warning)
//!
//! The report branch and each quote are isolated: a failure in one never
//! suppresses the others.
//!
//! # Example
//!
//! ```rust,ignore
//! use invest_agent::{AgentConfig, ComparisonFlow, FormInput, Page};
//! use invest_llm::providers::OpenAIProvider;
//! use invest_market::YahooFinanceClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let flow = ComparisonFlow::new(
//!         Arc::new(OpenAIProvider::from_env()?),
//!         Arc::new(YahooFinanceClient::new()?),
//!         AgentConfig::from_env()?,
//!     );
//!
//!     let mut page = Page::new();
//!     flow.run(&FormInput::new("AAPL", "MSFT"), &mut page).await;
//!     for line in page.lines() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod flow;
pub mod input;
pub mod page;
pub mod prompts;
pub mod quotes;
pub mod report;
pub mod terminal;
pub mod web;

pub use config::AgentConfig;
pub use credential::{CredentialResolver, CredentialSource, Resolution};
pub use error::{AgentError, Result};
pub use flow::{ComparisonFlow, FlowOutcome, FlowState};
pub use input::{FormInput, TickerPair};
pub use page::{Block, BlockKind, Page, PresentationSink};
pub use prompts::ComparisonPrompt;
pub use quotes::{Price, QuoteFetcher, QuoteOutcome};
pub use report::ReportRequester;
pub use terminal::TerminalSink;

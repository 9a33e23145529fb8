//! The query-and-report flow
//!
//! One invocation per form submission. The flow starts in
//! [`FlowState::AwaitingInput`] and moves to [`FlowState::Reporting`] only when
//! both ticker fields are non-empty; it never loops or re-enters. All external
//! calls run sequentially so output order is deterministic.

use crate::config::AgentConfig;
use crate::credential::CredentialResolver;
use crate::input::{FormInput, TickerPair};
use crate::page::{PresentationSink, render_header};
use crate::quotes::QuoteFetcher;
use crate::report::ReportRequester;
use invest_llm::LLMProvider;
use invest_market::MarketDataProvider;
use std::sync::Arc;
use tracing::{debug, info};

/// Where an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// At least one ticker field was empty; nothing was fetched
    AwaitingInput,
    /// Report and both quotes were processed
    Reporting,
}

/// Summary of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOutcome {
    pub state: FlowState,
    /// The masked API key field must be offered on the form
    pub credential_prompt: bool,
}

/// Wires the resolver, report requester, and quote fetcher together
#[derive(Clone)]
pub struct ComparisonFlow {
    resolver: CredentialResolver,
    reporter: ReportRequester,
    quotes: QuoteFetcher,
}

impl ComparisonFlow {
    /// Create a flow over a completion provider and a market-data provider
    pub fn new(
        llm: Arc<dyn LLMProvider>,
        market: Arc<dyn MarketDataProvider>,
        config: AgentConfig,
    ) -> Self {
        Self {
            resolver: CredentialResolver::new(config.credential_env),
            reporter: ReportRequester::new(llm, config.model)
                .with_require_credential(config.require_credential),
            quotes: QuoteFetcher::new(market),
        }
    }

    /// Run the flow once, writing everything to `sink`
    pub async fn run<S: PresentationSink + ?Sized>(&self, input: &FormInput, sink: &mut S) -> FlowOutcome {
        let resolution = self.resolver.resolve(input.prompted_key(), sink);
        render_header(sink);

        let Some(pair) = TickerPair::from_input(input) else {
            debug!("Waiting for both ticker symbols");
            return FlowOutcome {
                state: FlowState::AwaitingInput,
                credential_prompt: resolution.prompt_shown,
            };
        };

        info!(first = %pair.first, second = %pair.second, "Comparing stocks");

        self.reporter
            .render(resolution.credential.as_ref(), &pair, sink)
            .await;
        self.quotes.render(&pair.first, sink).await;
        self.quotes.render(&pair.second, sink).await;

        FlowOutcome {
            state: FlowState::Reporting,
            credential_prompt: resolution.prompt_shown,
        }
    }
}

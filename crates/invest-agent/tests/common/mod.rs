//! Fake providers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use invest_agent::{AgentConfig, ComparisonFlow};
use invest_llm::{
    CompletionChoice, CompletionRequest, CompletionResponse, Credential, LLMError, LLMProvider,
    StopReason, TokenUsage,
};
use invest_market::{MarketDataProvider, MarketError, QuoteInfo, TickerSymbol};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Environment variable the tests point the resolver at; never set
pub const UNSET_CREDENTIAL_ENV: &str = "INVEST_AGENT_TEST_UNSET_OPENAI_KEY";

/// One recorded completion call
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub had_credential: bool,
    pub request: CompletionRequest,
}

/// Completion provider answering every call the same way
pub struct FakeLlm {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<RecordedCompletion>>,
}

impl FakeLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMProvider for FakeLlm {
    async fn complete(
        &self,
        credential: Option<&Credential>,
        request: CompletionRequest,
    ) -> invest_llm::Result<CompletionResponse> {
        self.calls.lock().unwrap().push(RecordedCompletion {
            had_credential: credential.is_some(),
            request,
        });

        match &self.reply {
            Ok(text) => Ok(CompletionResponse {
                choices: vec![CompletionChoice {
                    text: text.clone(),
                    stop_reason: StopReason::EndTurn,
                }],
                usage: TokenUsage {
                    input_tokens: 40,
                    output_tokens: 12,
                },
            }),
            Err(message) => Err(LLMError::AuthenticationFailed(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "fake-llm"
    }
}

enum FakeQuote {
    Close(Option<f64>),
    Failure,
}

/// Market-data provider backed by a symbol table
///
/// Symbols not in the table fail the lookup.
#[derive(Default)]
pub struct FakeMarket {
    quotes: HashMap<String, FakeQuote>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_close(mut self, symbol: &str, close: f64) -> Self {
        self.quotes.insert(symbol.to_string(), FakeQuote::Close(Some(close)));
        self
    }

    pub fn with_missing_close(mut self, symbol: &str) -> Self {
        self.quotes.insert(symbol.to_string(), FakeQuote::Close(None));
        self
    }

    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.quotes.insert(symbol.to_string(), FakeQuote::Failure);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataProvider for FakeMarket {
    async fn quote_info(&self, ticker: &TickerSymbol) -> invest_market::Result<QuoteInfo> {
        self.calls.lock().unwrap().push(ticker.to_string());

        match self.quotes.get(ticker.as_str()) {
            Some(FakeQuote::Close(close)) => Ok(QuoteInfo {
                symbol: ticker.to_string(),
                previous_close: *close,
                currency: Some("USD".to_string()),
                exchange: None,
            }),
            Some(FakeQuote::Failure) => Err(MarketError::LookupFailed {
                symbol: ticker.to_string(),
                reason: "malformed response".to_string(),
            }),
            None => Err(MarketError::NotFound(ticker.to_string())),
        }
    }

    fn name(&self) -> &str {
        "fake-market"
    }
}

/// Config whose credential variable is guaranteed to be absent
pub fn test_config() -> AgentConfig {
    AgentConfig::builder()
        .credential_env(UNSET_CREDENTIAL_ENV)
        .build()
        .unwrap()
}

pub fn build_flow(llm: Arc<FakeLlm>, market: Arc<FakeMarket>) -> ComparisonFlow {
    ComparisonFlow::new(llm, market, test_config())
}

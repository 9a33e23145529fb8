//! Comparison report requests

use crate::error::{AgentError, Result};
use crate::input::TickerPair;
use crate::page::{BlockKind, PresentationSink};
use crate::prompts::ComparisonPrompt;
use invest_llm::{CompletionRequest, Credential, LLMError, LLMProvider};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Heading written above the report text
pub const REPORT_HEADING: &str = "OpenAI Report:";

/// Prefix of the report error banner
pub const REPORT_ERROR_PREFIX: &str = "Error generating report:";

/// Maximum tokens generated for a report
pub const REPORT_MAX_TOKENS: usize = 2048;

/// Number of candidates requested
pub const REPORT_CANDIDATES: usize = 1;

/// Sampling temperature for reports
pub const REPORT_TEMPERATURE: f32 = 0.7;

/// Requests and renders the comparison report
#[derive(Clone)]
pub struct ReportRequester {
    provider: Arc<dyn LLMProvider>,
    model: String,
    require_credential: bool,
}

impl ReportRequester {
    /// Create a requester for a provider and model
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            require_credential: false,
        }
    }

    /// Skip the provider call when no credential is available
    pub fn with_require_credential(mut self, required: bool) -> Self {
        self.require_credential = required;
        self
    }

    /// Build the completion request with the fixed report options
    pub fn build_request(&self, prompt: ComparisonPrompt) -> CompletionRequest {
        CompletionRequest::builder(&self.model)
            .prompt(prompt.into_string())
            .max_tokens(REPORT_MAX_TOKENS)
            .n(REPORT_CANDIDATES)
            .temperature(REPORT_TEMPERATURE)
            .build()
    }

    /// Ask the provider for a report comparing the pair
    #[instrument(skip(self, credential, pair), fields(first = %pair.first, second = %pair.second, model = %self.model))]
    pub async fn request_report(&self, credential: Option<&Credential>, pair: &TickerPair) -> Result<String> {
        if self.require_credential && credential.is_none() {
            return Err(AgentError::MissingCredential);
        }

        let prompt = ComparisonPrompt::new(&pair.first, &pair.second)?;
        let request = self.build_request(prompt);
        let response = self.provider.complete(credential, request).await?;

        info!(tokens = response.usage.total(), "Report generated");

        response.text().map(ToString::to_string).ok_or_else(|| {
            LLMError::UnexpectedResponse("No choices in response".to_string()).into()
        })
    }

    /// Request the report and render it, or render a single error banner
    pub async fn render<S: PresentationSink + ?Sized>(
        &self,
        credential: Option<&Credential>,
        pair: &TickerPair,
        sink: &mut S,
    ) {
        match self.request_report(credential, pair).await {
            Ok(text) => {
                sink.render_message(BlockKind::Heading, REPORT_HEADING);
                sink.render_message(BlockKind::Text, &text);
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Report request failed");
                sink.render_message(BlockKind::Error, &format!("{REPORT_ERROR_PREFIX} {e}"));
            }
        }
    }
}

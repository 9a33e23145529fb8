//! OpenAI provider implementation
//!
//! This module implements the LLMProvider trait for OpenAI's text-completion
//! endpoint (`/completions`), used with instruct models such as
//! `gpt-3.5-turbo-instruct`.
//! See: https://platform.openai.com/docs/api-reference/completions
//!
//! # Examples
//!
//! ```no_run
//! use invest_llm::{CompletionRequest, Credential, LLMProvider};
//! use invest_llm::providers::{OpenAIConfig, OpenAIProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OpenAIProvider::with_config(OpenAIConfig::default().with_timeout(60))?;
//!     let credential = Credential::new(std::env::var("OPENAI_API_KEY")?);
//!
//!     let request = CompletionRequest::builder("gpt-3.5-turbo-instruct")
//!         .prompt("Say hello")
//!         .max_tokens(100)
//!         .build();
//!
//!     let response = provider.complete(credential.as_ref(), request).await?;
//!     println!("{}", response.text().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Using with OpenAI-compatible APIs
//!
//! ```no_run
//! use invest_llm::providers::{OpenAIConfig, OpenAIProvider};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // For local deployments exposing the legacy completions route (vLLM, llama.cpp)
//! let local_config = OpenAIConfig::default().with_api_base("http://localhost:8000/v1");
//! let provider = OpenAIProvider::with_config(local_config)?;
//! # Ok(())
//! # }
//! ```

use crate::{
    CompletionChoice, CompletionRequest, CompletionResponse, Credential, LLMError, LLMProvider,
    Result, StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding the API base URL
pub const OPENAI_API_BASE_ENV: &str = "OPENAI_API_BASE";

/// Configuration for OpenAI provider
///
/// Holds transport settings only. The API key is not part of the
/// configuration; it is passed into each [`LLMProvider::complete`] call.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Base URL for the OpenAI API (default: "https://api.openai.com/v1")
    /// Can be customized for OpenAI-compatible APIs like Azure OpenAI, local deployments, etc.
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl OpenAIConfig {
    /// Create config from environment variable
    ///
    /// Reads the base URL from `OPENAI_API_BASE` if set.
    pub fn from_env() -> Self {
        Self::from_api_base(invest_utils::env_value(OPENAI_API_BASE_ENV))
    }

    fn from_api_base(api_base: Option<String>) -> Self {
        Self {
            api_base: api_base.unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self::from_api_base(None)
    }
}

/// OpenAI text-completion provider
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with custom configuration
    pub fn with_config(config: OpenAIConfig) -> Result<Self> {
        if config.api_base.trim().is_empty() {
            return Err(LLMError::ConfigurationError(
                "api_base must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(OpenAIConfig::from_env())
    }

    /// Get the current configuration
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!("{}/completions", self.config.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    #[instrument(skip(self, credential, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(
        &self,
        credential: Option<&Credential>,
        request: CompletionRequest,
    ) -> Result<CompletionResponse> {
        debug!("Sending completion request to {}", self.config.api_base);

        let openai_request = OpenAIRequest {
            model: request.model.clone(),
            prompt: request.prompt,
            max_tokens: request.max_tokens,
            n: request.n,
            temperature: request.temperature,
            stop: request.stop_sequences,
        };

        let mut builder = self
            .client
            .post(self.completions_url())
            .header("Content-Type", "application/json")
            .json(&openai_request);

        // Without a key the request goes out unauthenticated and the API rejects it
        if let Some(credential) = credential {
            builder = builder.bearer_auth(credential.expose());
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            let detail = extract_error_message(&error_text);

            return Err(match status.as_u16() {
                401 => LLMError::AuthenticationFailed(detail),
                429 => LLMError::RateLimitExceeded(detail),
                400 => LLMError::InvalidRequest(detail),
                404 => LLMError::ModelNotFound(request.model),
                _ => LLMError::RequestFailed(format!("HTTP {status}: {detail}")),
            });
        }

        let openai_response: OpenAIResponse = response.json().await.map_err(|e| {
            LLMError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        convert_response(openai_response)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// ============================================================================
// OpenAI-specific wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    prompt: String,
    max_tokens: usize,
    n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stop: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    text: String,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}

// ============================================================================
// Conversion functions
// ============================================================================

fn convert_response(response: OpenAIResponse) -> Result<CompletionResponse> {
    if response.choices.is_empty() {
        return Err(LLMError::UnexpectedResponse(
            "No choices in response".to_string(),
        ));
    }

    let usage = response
        .usage
        .map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    debug!(
        "Received {} choice(s), tokens: {}/{}",
        response.choices.len(),
        usage.input_tokens,
        usage.output_tokens
    );

    let choices = response
        .choices
        .into_iter()
        .map(|c| CompletionChoice {
            stop_reason: map_stop_reason(c.finish_reason.as_deref().unwrap_or("stop")),
            text: c.text,
        })
        .collect();

    Ok(CompletionResponse { choices, usage })
}

/// Pull `error.message` out of an OpenAI error body, falling back to the raw text
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAIErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Map OpenAI finish reason to our format
fn map_stop_reason(reason: &str) -> StopReason {
    match reason {
        "stop" => StopReason::EndTurn,
        "length" => StopReason::MaxTokens,
        "content_filter" => {
            debug!("Content filtered by OpenAI safety systems");
            StopReason::EndTurn
        }
        _ => {
            debug!("Unknown stop reason: {}", reason);
            StopReason::EndTurn
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

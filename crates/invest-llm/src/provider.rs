//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Credential, Result};
use async_trait::async_trait;

/// Trait for LLM providers
///
/// Implementations of this trait provide access to different text-completion
/// services. Providers hold no credential of their own: the caller passes the
/// credential resolved for the current invocation into every call.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a completion from the LLM
    ///
    /// # Arguments
    ///
    /// * `credential` - API key for this call; `None` sends an unauthenticated
    ///   request and lets the provider reject it
    /// * `request` - The completion request with prompt and sampling parameters
    ///
    /// # Returns
    ///
    /// The completion response with the generated choices and usage metadata
    async fn complete(
        &self,
        credential: Option<&Credential>,
        request: CompletionRequest,
    ) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}

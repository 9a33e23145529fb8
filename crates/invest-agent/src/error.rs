//! Error types for the comparison flow

use thiserror::Error;

/// Errors raised inside the comparison flow
///
/// None of these abort a page render: each is caught at the call site that
/// produced it and turned into a banner.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Completion provider failure (auth, quota, malformed request, transport)
    #[error(transparent)]
    Llm(#[from] invest_llm::LLMError),

    /// Market-data lookup failure
    #[error(transparent)]
    Market(#[from] invest_market::MarketError),

    /// No credential resolved while one is required
    #[error("no API key available")]
    MissingCredential,

    /// Template failed to load or render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, AgentError>;

impl From<invest_utils::ConfigError> for AgentError {
    fn from(err: invest_utils::ConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_display_verbatim() {
        let err: AgentError =
            invest_llm::LLMError::AuthenticationFailed("Incorrect API key provided".to_string()).into();
        assert_eq!(err.to_string(), "Authentication failed: Incorrect API key provided");

        let err: AgentError = invest_market::MarketError::NotFound("ZZZ".to_string()).into();
        assert_eq!(err.to_string(), "Symbol not found: ZZZ");
    }

    #[test]
    fn test_missing_credential_display() {
        assert_eq!(AgentError::MissingCredential.to_string(), "no API key available");
    }
}

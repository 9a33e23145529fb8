//! Configuration for the comparison flow

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};

/// Completion model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Environment variable holding the completion-provider API key
pub const DEFAULT_CREDENTIAL_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the completion model
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Environment variable enabling the credential gate
pub const REQUIRE_CREDENTIAL_ENV: &str = "INVEST_REQUIRE_API_KEY";

/// Configuration for the comparison flow
///
/// The completion parameters themselves (token limit, candidate count,
/// temperature) are fixed in [`crate::report`] and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Completion model identifier
    pub model: String,

    /// Name of the environment variable holding the API key
    pub credential_env: String,

    /// Skip the completion call when no credential was resolved
    ///
    /// Off by default: the request is sent anyway and the provider's
    /// authentication error is shown.
    pub require_credential: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            require_credential: false,
        }
    }
}

impl AgentConfig {
    /// Create a new configuration builder
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }

    /// Build the configuration from `OPENAI_MODEL` and `INVEST_REQUIRE_API_KEY`
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(model) = invest_utils::env_value(MODEL_ENV) {
            builder = builder.model(model);
        }
        if let Some(flag) = invest_utils::env_value(REQUIRE_CREDENTIAL_ENV) {
            builder = builder.require_credential(parse_flag(REQUIRE_CREDENTIAL_ENV, &flag)?);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(AgentError::Config("model must not be empty".to_string()));
        }
        if self.credential_env.is_empty() {
            return Err(AgentError::Config(
                "credential_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AgentError::Config(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

/// Builder for AgentConfig
#[derive(Debug, Default)]
pub struct AgentConfigBuilder {
    model: Option<String>,
    credential_env: Option<String>,
    require_credential: Option<bool>,
}

impl AgentConfigBuilder {
    /// Set the completion model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the environment variable the API key is read from
    pub fn credential_env(mut self, name: impl Into<String>) -> Self {
        self.credential_env = Some(name.into());
        self
    }

    /// Require a credential before calling the completion provider
    pub fn require_credential(mut self, required: bool) -> Self {
        self.require_credential = Some(required);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AgentConfig> {
        let defaults = AgentConfig::default();
        let config = AgentConfig {
            model: self.model.unwrap_or(defaults.model),
            credential_env: self.credential_env.unwrap_or(defaults.credential_env),
            require_credential: self.require_credential.unwrap_or(defaults.require_credential),
        };
        config.validate()?;
        Ok(config)
    }
}

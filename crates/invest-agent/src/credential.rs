//! Credential resolution
//!
//! The API key comes from the environment first and from the masked form
//! field second. A missing key is a degraded state, never an error.

use crate::page::{BlockKind, PresentationSink};
use invest_llm::Credential;
use tracing::{info, warn};

/// Banner shown when a key was found
pub const CREDENTIAL_INFO: &str = "Using provided API key for OpenAI communication.";

/// Where the credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Process environment (including a loaded `.env` file)
    Environment,
    /// The masked field on the form
    Prompt,
}

/// Outcome of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub credential: Option<Credential>,
    pub source: Option<CredentialSource>,
    /// The environment had no key, so the masked field must be offered
    pub prompt_shown: bool,
}

impl Resolution {
    /// Resolve from an environment value and a prompted value, in that order
    pub fn from_values(env_value: Option<String>, prompted: Option<&str>) -> Self {
        if let Some(credential) = env_value.and_then(Credential::new) {
            return Self {
                credential: Some(credential),
                source: Some(CredentialSource::Environment),
                prompt_shown: false,
            };
        }

        let credential = prompted.and_then(Credential::new);
        Self {
            source: credential.as_ref().map(|_| CredentialSource::Prompt),
            credential,
            prompt_shown: true,
        }
    }
}

/// Resolves the completion-provider credential once per flow invocation
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    env_var: String,
}

impl CredentialResolver {
    /// Create a resolver reading the given environment variable
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    /// Resolve the credential and announce the result on the sink
    pub fn resolve<S: PresentationSink + ?Sized>(&self, prompted: Option<&str>, sink: &mut S) -> Resolution {
        let resolution = Resolution::from_values(invest_utils::env_value(&self.env_var), prompted);
        self.announce(&resolution, sink);
        resolution
    }

    /// Write the info or warning banner for a resolution
    pub fn announce<S: PresentationSink + ?Sized>(&self, resolution: &Resolution, sink: &mut S) {
        match resolution.source {
            Some(source) => {
                info!(?source, "API key resolved");
                sink.render_message(BlockKind::Info, CREDENTIAL_INFO);
            }
            None => {
                warn!(env_var = %self.env_var, "No API key available, report requests will fail");
                sink.render_message(BlockKind::Warning, &self.missing_warning());
            }
        }
    }

    /// Warning banner text naming the configured variable
    pub fn missing_warning(&self) -> String {
        format!(
            "No API key found in environment variables. Ensure '{}' is set for optimal functionality.",
            self.env_var
        )
    }
}

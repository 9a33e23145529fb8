//! Text-completion provider abstraction layer for invest-agent
//!
//! This crate provides provider-agnostic abstractions for requesting text
//! completions from a Large Language Model. It includes:
//!
//! - Completion request/response types
//! - An opaque [`Credential`] type passed explicitly into every call
//! - Provider trait for LLM implementations
//! - Concrete provider implementations (behind feature flags)

pub mod completion;
pub mod credential;
pub mod error;
pub mod provider;

// Re-export main types
pub use completion::{CompletionChoice, CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use credential::Credential;
pub use error::{LLMError, Result};
pub use provider::LLMProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;

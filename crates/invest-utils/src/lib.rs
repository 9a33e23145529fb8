//! Shared utilities for invest-agent
//!
//! This crate provides common functionality used across the invest-agent workspace,
//! including logging setup, `.env` loading, and process-level configuration.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, env_value, load_dotenv};
pub use logging::init_tracing;

/// Install the tracing subscriber, then load `.env`
///
/// The subscriber goes first so `.env` problems are logged. `RUST_LOG` and
/// `INVEST_LOG_FORMAT` are therefore read from the process environment only.
/// Returns whether a `.env` file was loaded.
pub fn init_process() -> bool {
    init_tracing();
    load_dotenv()
}

//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "INVEST_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines with target and line number
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to [`LogFormat::Text`] for anything unknown
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Read the format from `INVEST_LOG_FORMAT`
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or(Self::Text)
    }
}

/// Initialize tracing subscriber with default configuration
///
/// Honors `RUST_LOG` (default `info`) and `INVEST_LOG_FORMAT`.
pub fn init_tracing() {
    init_tracing_with(LogFormat::from_env());
}

/// Initialize tracing subscriber with an explicit output format
pub fn init_tracing_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

//! Prompt templates

use crate::error::Result;
use invest_market::TickerSymbol;
use minijinja::{Environment, context};
use std::fmt;

const COMPARISON_TEMPLATE: &str = "Compare the performance of {{ first }} and {{ second }}. \
Analyze their historical data, current market trends, analyst recommendations, \
and generate a comprehensive report highlighting key investment insights.";

/// The comparison request sent to the completion provider
///
/// Pure function of the two symbols: the same pair always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPrompt(String);

impl ComparisonPrompt {
    /// Render the prompt for two symbols, inserting them verbatim
    pub fn new(first: &TickerSymbol, second: &TickerSymbol) -> Result<Self> {
        let env = Environment::new();
        let text = env.render_str(
            COMPARISON_TEMPLATE,
            context! { first => first.as_str(), second => second.as_str() },
        )?;
        Ok(Self(text))
    }

    /// Prompt text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the prompt text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComparisonPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Stock comparison agent
//!
//! Serves a web form that compares two stocks, or runs one comparison in the
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables (or put them in .env)
//! export OPENAI_API_KEY="sk-..."
//!
//! # Serve the web UI on http://127.0.0.1:8501
//! cargo run --bin invest-agent -- serve
//!
//! # One comparison in the terminal
//! cargo run --bin invest-agent -- compare AAPL MSFT
//! ```

use clap::{Parser, Subcommand};
use invest_agent::web::{AppState, app_router};
use invest_agent::{AgentConfig, ComparisonFlow, FlowState, FormInput, TerminalSink};
use invest_llm::providers::{OpenAIConfig, OpenAIProvider};
use invest_market::YahooFinanceClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "invest-agent")]
#[command(about = "Compare two stocks and generate an investment report", long_about = None)]
struct Cli {
    /// Completion model (overrides OPENAI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Do not call the completion provider without an API key
    #[arg(long, global = true)]
    require_api_key: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web UI (default)
    Serve {
        /// Listen address (overrides INVEST_LISTEN_ADDR)
        #[arg(long)]
        listen: Option<SocketAddr>,
    },
    /// Compare two stocks once and print the result
    Compare {
        /// First stock symbol
        stock1: String,
        /// Second stock symbol
        stock2: String,
    },
}

fn build_flow(cli: &Cli) -> anyhow::Result<ComparisonFlow> {
    let mut config = AgentConfig::from_env()?;
    if let Some(model) = &cli.model {
        config.model.clone_from(model);
    }
    if cli.require_api_key {
        config.require_credential = true;
    }
    config.validate()?;

    info!(model = %config.model, require_credential = config.require_credential, "Configuration loaded");

    let llm = OpenAIProvider::with_config(OpenAIConfig::from_env())?;
    let market = YahooFinanceClient::new()?;

    Ok(ComparisonFlow::new(Arc::new(llm), Arc::new(market), config))
}

async fn serve(flow: ComparisonFlow, listen: Option<SocketAddr>) -> anyhow::Result<()> {
    let listen_addr = match listen {
        Some(addr) => addr,
        None => invest_utils::Config::from_env()?.listen_addr,
    };

    let router = app_router(AppState::new(flow)?);
    info!("Listening on http://{}", listen_addr);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn compare(flow: ComparisonFlow, stock1: String, stock2: String) -> anyhow::Result<()> {
    let mut sink = TerminalSink::new(std::io::stdout());
    let outcome = flow.run(&FormInput::new(stock1, stock2), &mut sink).await;

    if outcome.state == FlowState::AwaitingInput {
        anyhow::bail!("both stock symbols must be non-empty");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    invest_utils::init_process();

    let cli = Cli::parse();
    let flow = build_flow(&cli)?;

    match cli.command {
        Some(Command::Compare { stock1, stock2 }) => compare(flow, stock1, stock2).await,
        Some(Command::Serve { listen }) => serve(flow, listen).await,
        None => serve(flow, None).await,
    }
}

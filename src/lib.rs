// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod utils;

// Re-export commonly used types
pub use analysis::{DeviationResult, DeviationScore, EvaluationError, Evaluator};
pub use config::MonitorConfig;
pub use data::{GeminiApi, MarketDataSource, StaticMarketData};
pub use domain::{Alert, AlertLevel, Symbol, TickerResponse};
pub use engine::{SweepSummary, run};

// CLI argument parsing
use clap::Parser;
use rust_decimal::Decimal;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Generate Gemini price deviation alerts", long_about = None)]
pub struct Cli {
    /// Currency trading pair to check on its own (e.g. btcusd). Omit to sweep every symbol
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Deviation threshold, in standard deviations from the 24h average (default 1)
    #[arg(short, long, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub deviation: Option<Decimal>,
}

fn parse_threshold(raw: &str) -> Result<Decimal, String> {
    utils::maths_utils::parse_decimal(raw).map_err(|e| format!("invalid decimal {:?}: {}", raw, e))
}

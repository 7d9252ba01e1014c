// Market data sources
pub mod gemini_api;
pub mod static_source;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Symbol, TickerResponse};

// Re-export commonly used types
pub use gemini_api::GeminiApi;
pub use static_source::{SourceCall, StaticMarketData};

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Every tradable symbol, in provider order. Failure here is fatal to a sweep.
    async fn list_symbols(&self) -> Result<Vec<Symbol>>;

    /// Ticker for one symbol. Failure here is isolated to that symbol.
    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerResponse, FetchError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not a ticker object: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no recorded response for {0}")]
    Unavailable(String),
}

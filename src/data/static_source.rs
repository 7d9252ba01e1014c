//! In-memory market data, for offline runs and tests.
//! Holds raw response bodies and decodes them exactly like `GeminiApi`, recording every call.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::time::Instant;

use super::{FetchError, MarketDataSource};
use crate::domain::{Symbol, TickerResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    ListSymbols { at: Instant },
    Ticker { symbol: String, at: Instant },
}

#[derive(Debug, Default)]
pub struct StaticMarketData {
    symbols_body: String,
    ticker_bodies: HashMap<String, String>,
    calls: Mutex<Vec<SourceCall>>,
}

impl StaticMarketData {
    /// Listing endpoint returns `symbols` in the given order.
    pub fn new(symbols: &[&str]) -> Self {
        Self {
            symbols_body: serde_json::to_string(symbols).unwrap_or_else(|_| "[]".to_string()),
            ..Default::default()
        }
    }

    /// Replace the raw listing body (e.g. to simulate a malformed response).
    pub fn with_symbols_body(mut self, body: impl Into<String>) -> Self {
        self.symbols_body = body.into();
        self
    }

    pub fn with_ticker(mut self, symbol: &str, body: impl Into<String>) -> Self {
        self.ticker_bodies.insert(symbol.to_string(), body.into());
        self
    }

    /// Convenience for a well-formed ticker body.
    pub fn with_series(self, symbol: &str, changes: &[&str], close: &str) -> Self {
        let body = serde_json::json!({
            "symbol": symbol.to_uppercase(),
            "changes": changes,
            "close": close,
        });
        self.with_ticker(symbol, body.to_string())
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.lock_calls().clone()
    }

    pub fn ticker_calls(&self) -> Vec<(String, Instant)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SourceCall::Ticker { symbol, at } => Some((symbol, at)),
                SourceCall::ListSymbols { .. } => None,
            })
            .collect()
    }

    pub fn listing_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, SourceCall::ListSymbols { .. }))
            .count()
    }

    fn record(&self, call: SourceCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<SourceCall>> {
        // A poisoned log is still a usable log
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl MarketDataSource for StaticMarketData {
    async fn list_symbols(&self) -> Result<Vec<Symbol>> {
        self.record(SourceCall::ListSymbols { at: Instant::now() });
        serde_json::from_str(&self.symbols_body).context("Static symbol list is not a JSON string array")
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerResponse, FetchError> {
        self.record(SourceCall::Ticker {
            symbol: symbol.to_string(),
            at: Instant::now(),
        });
        let body = self
            .ticker_bodies
            .get(symbol)
            .ok_or_else(|| FetchError::Unavailable(symbol.to_string()))?;
        TickerResponse::from_body(body).map_err(|source| FetchError::Decode {
            url: format!("static://ticker/{}", symbol),
            source,
        })
    }

    fn signature(&self) -> &'static str {
        "Static market data"
    }
}

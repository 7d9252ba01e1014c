//! Gemini public REST client.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::{FetchError, MarketDataSource};
use crate::config::GeminiApiConfig;
use crate::domain::{Symbol, TickerResponse};

pub struct GeminiApi {
    client: Client,
    config: GeminiApiConfig,
}

impl GeminiApi {
    pub fn new() -> Result<Self> {
        Self::with_config(GeminiApiConfig::default())
    }

    pub fn with_config(config: GeminiApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiApiConfig {
        &self.config
    }

    // Status is logged but not acted on: Gemini reports bad symbols as a 4xx JSON body
    // without `changes`, which the evaluator treats as "no data".
    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("⚠️  {} responded with {}", url, status);
        }
        response.text().await.map_err(transport)
    }
}

#[async_trait]
impl MarketDataSource for GeminiApi {
    async fn list_symbols(&self) -> Result<Vec<Symbol>> {
        let url = &self.config.symbols_url;
        let body = self.get_body(url).await?;
        let symbols: Vec<Symbol> = serde_json::from_str(&body)
            .with_context(|| format!("Symbol list from {} is not a JSON string array", url))?;
        log::info!("Gemini lists {} symbols", symbols.len());
        Ok(symbols)
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerResponse, FetchError> {
        let url = self.config.ticker_url_for(symbol);
        let body = self.get_body(&url).await?;
        TickerResponse::from_body(&body).map_err(|source| FetchError::Decode { url, source })
    }

    fn signature(&self) -> &'static str {
        "Gemini API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_endpoints() {
        let config = GeminiApiConfig {
            symbols_url: "http://127.0.0.1:9/v1/symbols".to_string(),
            ticker_url: "http://127.0.0.1:9/v2/ticker/".to_string(),
            ..GeminiApiConfig::default()
        };
        let api = GeminiApi::with_config(config).unwrap();
        assert_eq!(
            api.config().ticker_url_for("ethusd"),
            "http://127.0.0.1:9/v2/ticker/ethusd"
        );
        assert_eq!(api.signature(), "Gemini API");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on loopback refuses connections
        let config = GeminiApiConfig {
            ticker_url: "http://127.0.0.1:9/v2/ticker/".to_string(),
            timeout_ms: 2_000,
            ..GeminiApiConfig::default()
        };
        let api = GeminiApi::with_config(config).unwrap();
        let err = api.fetch_ticker("btcusd").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "got {:?}", err);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_ticker() {
        let api = GeminiApi::new().unwrap();
        let ticker = api.fetch_ticker("btcusd").await.unwrap();
        assert!(ticker.close.is_some());
    }
}

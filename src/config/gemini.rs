//! Gemini-specific configuration constants and types.

/// Configuration for the Gemini REST client
/// (This is the runtime struct used by `GeminiApi`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiApiConfig {
    pub symbols_url: String,
    /// Symbol is appended directly, so this must end with '/'
    pub ticker_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            symbols_url: GEMINI.endpoints.symbols_url.to_string(),
            ticker_url: GEMINI.endpoints.ticker_url.to_string(),
            timeout_ms: GEMINI.client.timeout_ms,
            user_agent: GEMINI.client.user_agent.to_string(),
        }
    }
}

impl GeminiApiConfig {
    pub fn ticker_url_for(&self, symbol: &str) -> String {
        format!("{}{}", self.ticker_url, symbol)
    }
}

/// Public REST endpoints (no authentication required)
pub struct Endpoints {
    /// Returns a JSON array of every tradable symbol
    pub symbols_url: &'static str,
    /// v2 ticker, carries the 24h hourly `changes` series plus `close`
    pub ticker_url: &'static str,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

/// The Master Configuration Struct
pub struct GeminiConfig {
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
    /// Pause between consecutive ticker calls during a sweep (Gemini's public rate limit)
    pub sweep_delay_ms: u64,
}

pub const GEMINI: GeminiConfig = GeminiConfig {
    endpoints: Endpoints {
        symbols_url: "https://api.gemini.com/v1/symbols",
        ticker_url: "https://api.gemini.com/v2/ticker/",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        user_agent: concat!("gemini-alerts/", env!("CARGO_PKG_VERSION")),
    },
    sweep_delay_ms: 1000,
};

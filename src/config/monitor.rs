//! Runtime configuration for a single alerting run.

use std::time::Duration;

use rust_decimal::Decimal;

use crate::Cli;
use crate::config::GEMINI;

/// One standard deviation
pub const DEFAULT_DEVIATION_THRESHOLD: Decimal = Decimal::ONE;

/// Built once from the command line and passed explicitly into the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Check only this trading pair. `None` sweeps every listed symbol
    pub symbol: Option<String>,
    /// Alert when the deviation score is strictly greater than this
    pub threshold: Decimal,
    pub sweep_delay: Duration,
}

impl MonitorConfig {
    pub fn new(symbol: Option<String>, threshold: Option<Decimal>) -> Self {
        Self {
            // A blank pair name means "no filter", same as omitting the flag
            symbol: symbol
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            threshold: threshold.unwrap_or(DEFAULT_DEVIATION_THRESHOLD),
            sweep_delay: Duration::from_millis(GEMINI.sweep_delay_ms),
        }
    }

    pub fn with_sweep_delay(mut self, delay: Duration) -> Self {
        self.sweep_delay = delay;
        self
    }

    pub fn is_full_sweep(&self) -> bool {
        self.symbol.is_none()
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl From<&Cli> for MonitorConfig {
    fn from(args: &Cli) -> Self {
        Self::new(args.currency.clone(), args.deviation)
    }
}

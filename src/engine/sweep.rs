use std::io::Write;

use anyhow::{Context, Result};
use tokio::time::{Instant, sleep};

use super::summary::SweepSummary;
use crate::analysis::Evaluator;
use crate::config::{DEBUG_FLAGS, MonitorConfig};
use crate::data::MarketDataSource;
use crate::domain::Alert;

/// Run once: a single pair if `config.symbol` is set, otherwise every listed symbol
/// in provider order with `config.sweep_delay` between consecutive evaluations.
///
/// Each alert is written to `out` as one JSON line and flushed straight away.
/// Only a listing failure or a write failure ends the run early.
pub async fn run<S, W>(config: &MonitorConfig, source: &S, out: &mut W) -> Result<SweepSummary>
where
    S: MarketDataSource + ?Sized,
    W: Write,
{
    let start = Instant::now();
    let evaluator = Evaluator::new(source, config.threshold);
    let mut summary = SweepSummary::default();

    if let Some(symbol) = config.symbol.as_deref() {
        let alert = evaluator.evaluate(symbol).await;
        emit(alert.as_ref(), out)?;
        summary.record(alert.as_ref());
        summary.elapsed = start.elapsed();
        return Ok(summary);
    }

    let symbols = source
        .list_symbols()
        .await
        .with_context(|| format!("Failed to list symbols from {}", source.signature()))?;
    log::info!(
        "Sweeping {} symbols from {} at threshold {}",
        symbols.len(),
        source.signature(),
        evaluator.threshold()
    );

    for (index, symbol) in symbols.iter().enumerate() {
        // Throttle calls to the ticker API
        if index > 0 {
            sleep(config.sweep_delay).await;
        }
        if DEBUG_FLAGS.print_sweep_progress {
            log::info!("[{}/{}] {}", index + 1, symbols.len(), symbol);
        }

        let alert = evaluator.evaluate(symbol).await;
        if alert.is_none() && DEBUG_FLAGS.print_quiet_symbols {
            log::info!("{}: no alert", symbol);
        }
        emit(alert.as_ref(), out)?;
        summary.record(alert.as_ref());
    }

    summary.elapsed = start.elapsed();
    Ok(summary)
}

fn emit<W: Write>(alert: Option<&Alert>, out: &mut W) -> Result<()> {
    let Some(alert) = alert else {
        return Ok(());
    };
    let line = alert.to_json_line().context("Failed to serialize alert")?;
    writeln!(out, "{}", line).context("Failed to write alert")?;
    out.flush().context("Failed to flush alert output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticMarketData;
    use std::time::Duration;

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_symbol_skips_listing_and_delay() {
        let source = StaticMarketData::new(&["ethusd", "btcusd"]).with_series(
            "btcusd",
            &["100", "102", "98", "101"],
            "110",
        );
        let config = MonitorConfig::new(Some("btcusd".to_string()), None);
        let mut out = Vec::new();

        let start = Instant::now();
        let summary = run(&config, &source, &mut out).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(source.listing_calls(), 0);
        assert_eq!(source.ticker_calls().len(), 1);
        assert_eq!(summary.evaluated, 1);
        assert_eq!(summary.info_alerts, 1);

        let alerts = lines(&out);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["trading_pair"], "btcusd");
        assert_eq!(alerts[0]["data"]["last_price"], "110");
    }

    #[tokio::test(start_paused = true)]
    async fn test_listing_failure_is_fatal() {
        let source = StaticMarketData::new(&[]).with_symbols_body("not json");
        let mut out = Vec::new();
        let result = run(&MonitorConfig::default(), &source, &mut out).await;
        assert!(result.is_err());
        assert!(out.is_empty());
        assert!(source.ticker_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_listing_is_an_empty_sweep() {
        let source = StaticMarketData::new(&[]);
        let mut out = Vec::new();
        let summary = run(&MonitorConfig::default(), &source, &mut out).await.unwrap();
        assert_eq!(summary, SweepSummary::default());
        assert!(out.is_empty());
    }
}

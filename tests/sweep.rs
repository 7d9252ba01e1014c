use std::time::Duration;

use gemini_alerts::{Alert, AlertLevel, MonitorConfig, StaticMarketData, run};
use rust_decimal::Decimal;
use std::str::FromStr;
use tokio::time::Instant;

fn parse_alerts(out: &[u8]) -> Vec<Alert> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn market() -> StaticMarketData {
    StaticMarketData::new(&["btcusd", "ethusd", "solusd", "dogeusd", "ltcusd"])
        // Spike: score ~5.71
        .with_series("btcusd", &["100", "102", "98", "101"], "110")
        // Flat and unchanged: quiet
        .with_series("ethusd", &["100", "100", "100"], "100")
        // Single sample: ERROR
        .with_series("solusd", &["25.5"], "25.5")
        // No changes at all: quiet, not an error
        .with_ticker("dogeusd", r#"{"symbol":"DOGEUSD","close":"0.1"}"#)
        // Flat but moved: infinite score
        .with_series("ltcusd", &["70", "70"], "71")
}

#[tokio::test(start_paused = true)]
async fn full_sweep_visits_every_symbol_in_listing_order() {
    let source = market();
    let mut out = Vec::new();

    let start = Instant::now();
    let summary = run(&MonitorConfig::default(), &source, &mut out)
        .await
        .unwrap();

    let calls = source.ticker_calls();
    let visited: Vec<&str> = calls.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(visited, ["btcusd", "ethusd", "solusd", "dogeusd", "ltcusd"]);
    assert_eq!(source.listing_calls(), 1);

    // N symbols, N-1 one-second pauses
    assert_eq!(start.elapsed(), Duration::from_secs(4));
    for pair in calls.windows(2) {
        assert_eq!(pair[1].1 - pair[0].1, Duration::from_secs(1));
    }
    assert_eq!(calls[0].1, start);

    assert_eq!(summary.evaluated, 5);
    assert_eq!(summary.info_alerts, 2);
    assert_eq!(summary.error_alerts, 1);
    assert_eq!(summary.quiet, 2);
}

#[tokio::test(start_paused = true)]
async fn alerts_stream_in_evaluation_order() {
    let source = market();
    let mut out = Vec::new();
    run(&MonitorConfig::default(), &source, &mut out)
        .await
        .unwrap();

    let alerts = parse_alerts(&out);
    let summary: Vec<(&str, AlertLevel)> = alerts
        .iter()
        .map(|a| (a.trading_pair(), a.level()))
        .collect();
    assert_eq!(
        summary,
        [
            ("btcusd", AlertLevel::Info),
            ("solusd", AlertLevel::Error),
            ("ltcusd", AlertLevel::Info),
        ]
    );

    let btc = alerts[0].data();
    assert_eq!(btc.last_price, "110");
    assert_eq!(btc.average, "100.25");
    assert_eq!(btc.change, "9.75");

    assert!(alerts[1].data().is_blank());

    let ltc = alerts[2].data();
    assert_eq!(ltc.sdev, "inf");
    assert_eq!(ltc.last_price, "71");
    assert!(ltc.is_complete());
}

#[tokio::test(start_paused = true)]
async fn failing_symbol_does_not_stop_the_sweep() {
    let source = StaticMarketData::new(&["broken", "btcusd"])
        .with_ticker("broken", "<html>502 Bad Gateway</html>")
        .with_series("btcusd", &["100", "102", "98", "101"], "110");
    let mut out = Vec::new();
    run(&MonitorConfig::default(), &source, &mut out)
        .await
        .unwrap();

    let alerts = parse_alerts(&out);
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].level(), AlertLevel::Error);
    assert_eq!(alerts[0].trading_pair(), "broken");
    assert_eq!(alerts[1].level(), AlertLevel::Info);
}

#[tokio::test(start_paused = true)]
async fn higher_threshold_silences_moderate_spikes() {
    let source = market();
    let config = MonitorConfig::new(None, Some(Decimal::from_str("6").unwrap()));
    let mut out = Vec::new();
    let summary = run(&config, &source, &mut out).await.unwrap();

    // btcusd (~5.71) is now quiet, ltcusd (inf) still fires
    let alerts = parse_alerts(&out);
    let pairs: Vec<&str> = alerts.iter().map(Alert::trading_pair).collect();
    assert_eq!(pairs, ["solusd", "ltcusd"]);
    assert_eq!(summary.info_alerts, 1);
}

#[tokio::test(start_paused = true)]
async fn single_symbol_mode_never_lists() {
    let source = market();
    let config = MonitorConfig::new(Some("ethusd".to_string()), None);
    let mut out = Vec::new();

    let start = Instant::now();
    let summary = run(&config, &source, &mut out).await.unwrap();

    assert_eq!(source.listing_calls(), 0);
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.quiet, 1);
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn custom_delay_is_honoured() {
    let source = StaticMarketData::new(&["a", "b", "c"]);
    let config = MonitorConfig::default().with_sweep_delay(Duration::from_millis(250));
    let mut out = Vec::new();

    let start = Instant::now();
    let summary = run(&config, &source, &mut out).await.unwrap();

    // Unknown tickers still count as evaluations (ERROR alerts)
    assert_eq!(summary.error_alerts, 3);
    assert_eq!(start.elapsed(), Duration::from_millis(500));
}

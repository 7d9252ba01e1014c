use anyhow::{Context, Result};
use clap::Parser;

use gemini_alerts::{Cli, GeminiApi, MarketDataSource, MonitorConfig, run};

fn main() -> Result<()> {
    // A. Init Logging (stderr, so stdout stays a clean stream of alerts)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let config = MonitorConfig::from(&args);

    // C. Single sweep on a current-thread runtime (no parallelism)
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let source = GeminiApi::new()?;
    match config.symbol.as_deref() {
        Some(symbol) => log::info!("Checking {} with threshold {}", symbol, config.threshold),
        None => log::info!("Checking all symbols from {}", source.signature()),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = rt.block_on(run(&config, &source, &mut out))?;

    log::info!("{}", summary);
    Ok(())
}

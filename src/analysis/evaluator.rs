use rust_decimal::Decimal;

use super::deviation::DeviationResult;
use crate::config::DEBUG_FLAGS;
use crate::data::{FetchError, MarketDataSource};
use crate::domain::{Alert, AlertData, TickerResponse};
use crate::utils::StatsError;
use crate::utils::maths_utils;

/// Why a single symbol could not be evaluated. Only ever logged: every variant
/// becomes the same blank ERROR alert on output.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Network(#[from] FetchError),
    #[error("invalid {field} value {value:?}")]
    Parse { field: &'static str, value: String },
    #[error("missing {0} in ticker")]
    MissingField(&'static str),
    #[error("standard deviation needs at least 2 price samples, found {found}")]
    InsufficientSamples { found: usize },
    #[error("arithmetic failure: {0}")]
    Arithmetic(StatsError),
}

impl From<StatsError> for EvaluationError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::TooFewSamples { found, .. } => EvaluationError::InsufficientSamples { found },
            other => EvaluationError::Arithmetic(other),
        }
    }
}

/// What a successful evaluation concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Ticker carried no price-change series. Not an error.
    NoData,
    WithinThreshold(DeviationResult),
    Breach(DeviationResult),
}

impl Evaluation {
    pub fn into_alert(self, symbol: &str) -> Option<Alert> {
        match self {
            Evaluation::Breach(result) => Some(Alert::info(symbol, AlertData::from(&result))),
            Evaluation::NoData | Evaluation::WithinThreshold(_) => None,
        }
    }
}

pub struct Evaluator<'a, S: MarketDataSource + ?Sized> {
    source: &'a S,
    threshold: Decimal,
}

impl<'a, S: MarketDataSource + ?Sized> Evaluator<'a, S> {
    pub fn new(source: &'a S, threshold: Decimal) -> Self {
        Self { source, threshold }
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// The per-symbol fault boundary: INFO on a breach, ERROR on any failure,
    /// nothing for no data or a quiet market.
    pub async fn evaluate(&self, symbol: &str) -> Option<Alert> {
        match self.try_evaluate(symbol).await {
            Ok(evaluation) => evaluation.into_alert(symbol),
            Err(e) => {
                log::warn!("⚠️  {}: {}", symbol, e);
                Some(Alert::error(symbol))
            }
        }
    }

    pub async fn try_evaluate(&self, symbol: &str) -> Result<Evaluation, EvaluationError> {
        let ticker = self.source.fetch_ticker(symbol).await?;
        let Some(samples) = price_series(&ticker)? else {
            log::debug!("{}: no price changes in ticker, skipping", symbol);
            return Ok(Evaluation::NoData);
        };
        if samples.len() < 2 {
            return Err(EvaluationError::InsufficientSamples {
                found: samples.len(),
            });
        }
        let latest = latest_price(&ticker)?;
        let result = DeviationResult::compute(&samples, latest)?;

        if DEBUG_FLAGS.print_deviation_stats {
            log::info!(
                "{}: avg {} sdev {} last {} score {}",
                symbol,
                result.average,
                result.standard_deviation,
                result.latest_price,
                result.deviation_score
            );
        }

        if result.exceeds(self.threshold) {
            Ok(Evaluation::Breach(result))
        } else {
            Ok(Evaluation::WithinThreshold(result))
        }
    }
}

/// `Ok(None)` when the ticker has no (or an empty) `changes` series.
pub fn price_series(ticker: &TickerResponse) -> Result<Option<Vec<Decimal>>, EvaluationError> {
    ticker
        .changes()
        .map(|changes| {
            changes
                .iter()
                .map(|raw| parse_decimal("change", raw))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
}

pub fn latest_price(ticker: &TickerResponse) -> Result<Decimal, EvaluationError> {
    let raw = ticker
        .close
        .as_deref()
        .ok_or(EvaluationError::MissingField("close"))?;
    parse_decimal("close", raw)
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, EvaluationError> {
    maths_utils::parse_decimal(raw).map_err(|_| EvaluationError::Parse {
        field,
        value: raw.to_string(),
    })
}

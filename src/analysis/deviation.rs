use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use crate::domain::AlertData;
use crate::utils::maths_utils::{self, StatsError};

/// How many standard deviations the latest price sits from the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviationScore {
    Finite(Decimal),
    /// Flat series (zero standard deviation) but the latest price moved off it
    Infinite,
}

impl DeviationScore {
    pub fn exceeds(&self, threshold: Decimal) -> bool {
        *self > DeviationScore::Finite(threshold)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, DeviationScore::Infinite)
    }
}

impl PartialOrd for DeviationScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DeviationScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DeviationScore::Finite(a), DeviationScore::Finite(b)) => a.cmp(b),
            (DeviationScore::Finite(_), DeviationScore::Infinite) => Ordering::Less,
            (DeviationScore::Infinite, DeviationScore::Finite(_)) => Ordering::Greater,
            (DeviationScore::Infinite, DeviationScore::Infinite) => Ordering::Equal,
        }
    }
}

impl fmt::Display for DeviationScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeviationScore::Finite(score) => write!(f, "{}", score),
            DeviationScore::Infinite => write!(f, "inf"),
        }
    }
}

/// Statistics for one evaluation of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviationResult {
    pub average: Decimal,
    pub standard_deviation: Decimal,
    /// |latest - average|. The "notional" deviation is taken to be this absolute price
    /// distance, not a percentage.
    pub absolute_change: Decimal,
    pub deviation_score: DeviationScore,
    pub latest_price: Decimal,
}

impl DeviationResult {
    /// Needs at least two samples for the (N-1) standard deviation.
    pub fn compute(samples: &[Decimal], latest_price: Decimal) -> Result<Self, StatsError> {
        let average = maths_utils::mean(samples)?;
        let dispersion = maths_utils::sample_dispersion(samples, average)?;

        let absolute_change = latest_price
            .checked_sub(average)
            .ok_or(StatsError::Overflow("price change"))?
            .abs();

        let deviation_score = if !dispersion.is_zero() {
            DeviationScore::Finite(dispersion.standardize(absolute_change)?)
        } else if !absolute_change.is_zero() {
            DeviationScore::Infinite
        } else {
            DeviationScore::Finite(Decimal::ZERO)
        };

        Ok(Self {
            average,
            standard_deviation: dispersion.std_dev,
            absolute_change,
            deviation_score,
            latest_price,
        })
    }

    /// Strictly greater than: a score equal to the threshold stays quiet.
    pub fn exceeds(&self, threshold: Decimal) -> bool {
        self.deviation_score.exceeds(threshold)
    }
}

impl From<&DeviationResult> for AlertData {
    fn from(result: &DeviationResult) -> Self {
        AlertData::new(
            result.latest_price,
            result.average,
            result.absolute_change,
            result.deviation_score,
        )
    }
}

use std::str::FromStr;

use rust_decimal::{Decimal, MathematicalOps};

/// Failures of the exact-decimal statistics below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("need at least {required} samples, found {found}")]
    TooFewSamples { found: usize, required: usize },
    #[error("decimal overflow while computing {0}")]
    Overflow(&'static str),
    #[error("square root of a negative variance ({0})")]
    NegativeVariance(Decimal),
}

/// Arithmetic mean. Exact up to the 28 significant digits of `Decimal`.
pub fn mean(values: &[Decimal]) -> Result<Decimal, StatsError> {
    if values.is_empty() {
        return Err(StatsError::TooFewSamples {
            found: 0,
            required: 1,
        });
    }
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, x| acc.checked_add(*x))
        .ok_or(StatsError::Overflow("sum"))?;
    sum.checked_div(Decimal::from(values.len()))
        .ok_or(StatsError::Overflow("mean"))
}

/// Largest power of ten a deviation is ever scaled up by (Decimal's max scale).
const MAX_RESCALE_EXPONENT: u32 = 28;

/// Sample dispersion of a series around its mean.
///
/// Deviations are scaled by 10^exponent so the largest sits in [1, 10) before squaring.
/// `Decimal` has a fixed 28-place scale, so squaring sub-1e-14 deviations directly would round them
/// to zero; in the rescaled space they keep their significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispersion {
    /// Sample standard deviation in price units (display only for tiny series)
    pub std_dev: Decimal,
    scaled_std_dev: Decimal,
    exponent: u32,
}

impl Dispersion {
    pub fn is_zero(&self) -> bool {
        self.scaled_std_dev.is_zero()
    }

    /// |distance| / std_dev, computed against the rescaled deviation.
    pub fn standardize(&self, distance: Decimal) -> Result<Decimal, StatsError> {
        if self.is_zero() {
            return Err(StatsError::Overflow("division by a zero deviation"));
        }
        let distance = distance.abs();
        let scale = pow10(self.exponent);
        match distance.checked_mul(scale) {
            Some(scaled) => scaled.checked_div(self.scaled_std_dev),
            // Distance dwarfs the spread: divide first, the score is huge anyway
            None => distance
                .checked_div(self.scaled_std_dev)
                .and_then(|q| q.checked_mul(scale)),
        }
        .ok_or(StatsError::Overflow("deviation score"))
    }
}

fn pow10(exponent: u32) -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(exponent), 0)
}

/// Smallest k with `max_abs * 10^k >= 1` (0 for zero or already >= 1).
fn rescale_exponent(max_abs: Decimal) -> u32 {
    let mut k = 0;
    let mut magnitude = max_abs;
    while !magnitude.is_zero() && magnitude < Decimal::ONE && k < MAX_RESCALE_EXPONENT {
        magnitude *= Decimal::TEN;
        k += 1;
    }
    k
}

/// Bessel-corrected (N-1) dispersion around a precomputed mean.
pub fn sample_dispersion(values: &[Decimal], mean: Decimal) -> Result<Dispersion, StatsError> {
    if values.len() < 2 {
        return Err(StatsError::TooFewSamples {
            found: values.len(),
            required: 2,
        });
    }
    let deviations = values
        .iter()
        .map(|x| x.checked_sub(mean))
        .collect::<Option<Vec<_>>>()
        .ok_or(StatsError::Overflow("deviation"))?;

    let max_abs = deviations
        .iter()
        .map(|d| d.abs())
        .max()
        .unwrap_or(Decimal::ZERO);
    let exponent = rescale_exponent(max_abs);
    let scale = pow10(exponent);

    let sum_sq = deviations.iter().try_fold(Decimal::ZERO, |acc, d| {
        let scaled = d.checked_mul(scale)?;
        acc.checked_add(scaled.checked_mul(scaled)?)
    });
    let sum_sq = sum_sq.ok_or(StatsError::Overflow("sum of squares"))?;
    let scaled_variance = sum_sq
        .checked_div(Decimal::from(values.len() - 1))
        .ok_or(StatsError::Overflow("variance"))?;
    // sqrt() only returns None for negative input
    let scaled_std_dev = scaled_variance
        .sqrt()
        .ok_or(StatsError::NegativeVariance(scaled_variance))?;
    let std_dev = scaled_std_dev
        .checked_div(scale)
        .ok_or(StatsError::Overflow("standard deviation"))?;

    Ok(Dispersion {
        std_dev,
        scaled_std_dev,
        exponent,
    })
}

/// Sample standard deviation (divisor N-1). Undefined below 2 samples.
pub fn sample_std_dev(values: &[Decimal], mean: Decimal) -> Result<Decimal, StatsError> {
    sample_dispersion(values, mean).map(|d| d.std_dev)
}

/// Plain or scientific notation ("0.1", "1e-1"), surrounding whitespace ignored.
pub fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let text = raw.trim();
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text))
}

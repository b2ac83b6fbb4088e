//! Volatility proxy signal construction.
//!
//! The analytical signal for break detection is the squared log return:
//! log returns ln(p[t] / p[t-1]) approximate percentage changes with good
//! statistical properties, and their squares proxy per-period variance.
//! The optimizer then looks for shifts in the *mean* of this signal.

use crate::core::PriceSeries;
use crate::error::{BreakError, Result};

/// Compute log returns ln(p[t] / p[t-1]) for t = 1..n.
///
/// Output length is `prices.len() - 1`.
///
/// # Errors
///
/// Returns [`BreakError::InsufficientData`] for fewer than 2 prices and
/// [`BreakError::NonPositivePrice`] if any price is zero, negative, or
/// not finite.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(BreakError::InsufficientData {
            needed: 2,
            got: prices.len(),
        });
    }

    for (index, &price) in prices.iter().enumerate() {
        if !(price.is_finite() && price > 0.0) {
            return Err(BreakError::NonPositivePrice { index, price });
        }
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Compute the squared-log-return volatility signal.
///
/// Output length is `prices.len() - 1`. Same validation as
/// [`log_returns`].
pub fn volatility_signal(prices: &[f64]) -> Result<Vec<f64>> {
    let returns = log_returns(prices)?;
    Ok(returns.iter().map(|r| r * r).collect())
}

/// Build the volatility signal from a [`PriceSeries`].
pub fn build_signal(series: &PriceSeries) -> Result<Vec<f64>> {
    volatility_signal(series.prices())
}

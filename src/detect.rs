//! Top-level break detection pipeline.
//!
//! Composes the signal builder, cost model, and optimizer into the one
//! entry point applications call: price series in, validated breakpoint
//! set out. The computation is pure and synchronous; the caller either
//! gets a complete [`BreakpointSet`] or a typed error, never a partial
//! result.

use crate::changepoint::{dynp_detect, DynpConfig};
use crate::core::{BreakpointSet, PriceSeries, SIGNAL_OFFSET};
use crate::error::Result;
use crate::signal::build_signal;

/// Detect structural breaks in the volatility regime of `prices`.
///
/// Builds the squared-log-return signal, runs the exact fixed-count
/// optimizer, and maps the optimal signal-domain breakpoints back to
/// price-series indices and timestamps.
///
/// # Arguments
/// * `prices` - Ordered price series (at least 2 observations)
/// * `n_breaks` - Number of breakpoints to place (0 is valid)
/// * `min_segment_size` - Minimum signal elements per segment (≥ 1)
///
/// # Errors
///
/// Validation happens eagerly, before any search work:
/// [`BreakError::InsufficientData`](crate::BreakError::InsufficientData) /
/// [`BreakError::NonPositivePrice`](crate::BreakError::NonPositivePrice)
/// for malformed input, and
/// [`BreakError::InfeasibleConfig`](crate::BreakError::InfeasibleConfig)
/// when the requested segmentation cannot fit the signal.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use volatility_breaks::detect::detect_breaks;
/// use volatility_breaks::core::PriceSeries;
///
/// // Calm regime, then a volatile one.
/// let mut prices = vec![100.0];
/// for i in 0..20 {
///     let step: f64 = if i < 10 { 0.001 } else { 0.05 };
///     let direction: f64 = if i % 2 == 0 { 1.0 } else { -1.0 };
///     let last = *prices.last().unwrap();
///     prices.push(last * (direction * step).exp());
/// }
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let timestamps: Vec<_> = (0..prices.len())
///     .map(|i| base + Duration::days(i as i64))
///     .collect();
/// let series = PriceSeries::new(timestamps, prices).unwrap();
///
/// let breaks = detect_breaks(&series, 1, 1).unwrap();
/// assert_eq!(breaks.n_breakpoints, 1);
/// ```
pub fn detect_breaks(
    prices: &PriceSeries,
    n_breaks: usize,
    min_segment_size: usize,
) -> Result<BreakpointSet> {
    let signal = build_signal(prices)?;

    let config = DynpConfig::default()
        .n_breaks(n_breaks)
        .min_segment_size(min_segment_size);
    let result = dynp_detect(&signal, &config)?;

    BreakpointSet::finalize(
        &result.breakpoints,
        signal.len(),
        SIGNAL_OFFSET,
        n_breaks,
        result.cost,
        prices,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BreakError;
    use approx::assert_relative_eq;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn make_series(prices: Vec<f64>) -> PriceSeries {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timestamps: Vec<DateTime<Utc>> = (0..prices.len())
            .map(|i| base + Duration::days(i as i64))
            .collect();
        PriceSeries::new(timestamps, prices).unwrap()
    }

    /// Prices whose squared log returns alternate between two flat levels.
    fn regime_prices(steps: &[(f64, usize)]) -> Vec<f64> {
        let mut prices = vec![100.0];
        for &(step, count) in steps {
            for i in 0..count {
                let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
                let last = *prices.last().unwrap();
                prices.push(last * (direction * step).exp());
            }
        }
        prices
    }

    #[test]
    fn detects_volatility_shift() {
        let series = make_series(regime_prices(&[(0.001, 12), (0.08, 12)]));
        let breaks = detect_breaks(&series, 1, 1).unwrap();

        assert_eq!(breaks.n_breakpoints, 1);
        // Signal index 12 is the first high-volatility return; offset puts
        // the break at price index 13.
        assert_eq!(breaks.indices, vec![13]);
        assert_eq!(breaks.timestamps[0], series.timestamps()[13]);
    }

    #[test]
    fn zero_breaks_always_succeeds() {
        let series = make_series(vec![100.0, 101.0]);
        let breaks = detect_breaks(&series, 0, 1).unwrap();
        assert!(breaks.is_empty());
        assert_relative_eq!(breaks.cost, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn length_two_series_rejects_positive_k() {
        // Two prices give a one-element signal; only K = 0 fits.
        let series = make_series(vec![100.0, 101.0]);
        let err = detect_breaks(&series, 1, 1).unwrap_err();
        assert_eq!(
            err,
            BreakError::InfeasibleConfig {
                n_breaks: 1,
                min_segment_size: 1,
                signal_len: 1
            }
        );
    }

    #[test]
    fn invalid_prices_fail_before_search() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timestamps: Vec<_> = (0..3).map(|i| base + Duration::days(i)).collect();
        let series = PriceSeries::new(timestamps, vec![100.0, -1.0, 101.0]).unwrap();

        let err = detect_breaks(&series, 1, 1).unwrap_err();
        assert!(matches!(err, BreakError::NonPositivePrice { index: 1, .. }));
    }

    #[test]
    fn breakpoint_timestamps_round_trip() {
        let series = make_series(regime_prices(&[(0.002, 10), (0.06, 10), (0.002, 10)]));
        let breaks = detect_breaks(&series, 2, 2).unwrap();

        assert_eq!(breaks.n_breakpoints, 2);
        for (&idx, &ts) in breaks.indices.iter().zip(breaks.timestamps.iter()) {
            assert_eq!(series.timestamps()[idx], ts);
        }
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let series = make_series(regime_prices(&[(0.01, 15), (0.05, 15)]));
        let a = detect_breaks(&series, 3, 2).unwrap();
        let b = detect_breaks(&series, 3, 2).unwrap();
        assert_eq!(a, b);
    }
}

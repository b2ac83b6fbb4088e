//! Integration tests: synthetic regime-switching price paths through the
//! full detection pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use volatility_breaks::prelude::*;

fn make_series(prices: Vec<f64>) -> PriceSeries {
    let base = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<DateTime<Utc>> = (0..prices.len())
        .map(|i| base + Duration::days(i as i64))
        .collect();
    PriceSeries::new(timestamps, prices).unwrap()
}

/// Random-walk prices with piecewise-constant volatility.
///
/// Each `(sigma, count)` pair appends `count` returns drawn uniformly from
/// `[-sigma, sigma]`. Seeded so every run sees the same path.
fn regime_walk(seed: u64, regimes: &[(f64, usize)]) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut prices = vec![100.0];
    for &(sigma, count) in regimes {
        for _ in 0..count {
            let r: f64 = rng.gen_range(-sigma..sigma);
            let last = *prices.last().unwrap();
            prices.push(last * r.exp());
        }
    }
    prices
}

#[test]
fn locates_a_strong_volatility_break() {
    // 40 calm returns, then 40 turbulent ones; the regimes are separated
    // by several orders of magnitude so the optimum sits at the boundary.
    let prices = regime_walk(7, &[(0.001, 40), (0.4, 40)]);
    let series = make_series(prices);

    let breaks = detect_breaks(&series, 1, 1).unwrap();

    assert_eq!(breaks.n_breakpoints, 1);
    let idx = breaks.indices[0];
    assert!(
        (37..=48).contains(&idx),
        "break at {idx}, expected near price index 41"
    );
    assert_eq!(breaks.timestamps[0], series.timestamps()[idx]);
}

#[test]
fn three_regimes_with_two_breaks() {
    let prices = regime_walk(21, &[(0.002, 30), (0.3, 30), (0.002, 30)]);
    let series = make_series(prices);

    let breaks = detect_breaks(&series, 2, 5).unwrap();

    assert_eq!(breaks.n_breakpoints, 2);
    assert!(breaks.indices[0] < breaks.indices[1]);
    assert!(
        (24..=39).contains(&breaks.indices[0]),
        "first break at {}",
        breaks.indices[0]
    );
    assert!(
        (54..=69).contains(&breaks.indices[1]),
        "second break at {}",
        breaks.indices[1]
    );
}

#[test]
fn price_segments_partition_the_series() {
    let prices = regime_walk(3, &[(0.01, 25), (0.2, 25)]);
    let series = make_series(prices);

    let breaks = detect_breaks(&series, 3, 2).unwrap();
    let segments = breaks.price_segments(series.len());

    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].0, 0);
    assert_eq!(segments.last().unwrap().1, series.len());
    for window in segments.windows(2) {
        assert_eq!(window[0].1, window[1].0);
    }
}

#[test]
fn fetch_then_detect_via_source() {
    let prices = regime_walk(11, &[(0.001, 30), (0.25, 30)]);
    let series = make_series(prices);
    let source = InMemorySource::new().with_series("EURUSD", series);

    let start = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
    let fetched = source.fetch("EURUSD", start).unwrap();
    let breaks = detect_breaks(&fetched, 1, 1).unwrap();

    assert_eq!(breaks.n_breakpoints, 1);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let prices = regime_walk(5, &[(0.02, 50), (0.1, 50)]);
    let series = make_series(prices);

    let first = detect_breaks(&series, 4, 3).unwrap();
    for _ in 0..3 {
        assert_eq!(detect_breaks(&series, 4, 3).unwrap(), first);
    }
}

#[test]
fn constant_prices_are_a_degenerate_success() {
    // Flat prices give an all-zero signal; every split ties at cost zero
    // and the earliest feasible splits win deterministically.
    let series = make_series(vec![100.0; 10]);
    let breaks = detect_breaks(&series, 2, 1).unwrap();

    assert_eq!(breaks.cost, 0.0);
    // Signal indices [1, 2] shifted into the price domain.
    assert_eq!(breaks.indices, vec![2, 3]);
}

#[test]
fn error_paths_are_typed() {
    // Too short.
    let series = make_series(vec![100.0]);
    assert!(matches!(
        detect_breaks(&series, 1, 1).unwrap_err(),
        BreakError::InsufficientData { .. }
    ));

    // Infeasible K for the signal length.
    let series = make_series(vec![100.0, 101.0, 102.0]);
    assert!(matches!(
        detect_breaks(&series, 5, 1).unwrap_err(),
        BreakError::InfeasibleConfig { .. }
    ));

    // Non-positive price.
    let base = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..3).map(|i| base + Duration::days(i)).collect();
    let series = PriceSeries::new(timestamps, vec![100.0, 0.0, 101.0]).unwrap();
    assert!(matches!(
        detect_breaks(&series, 1, 1).unwrap_err(),
        BreakError::NonPositivePrice { .. }
    ));
}

#[test]
fn cost_decreases_as_breaks_are_added() {
    let prices = regime_walk(13, &[(0.01, 20), (0.15, 20), (0.04, 20)]);
    let series = make_series(prices);

    let mut previous = f64::INFINITY;
    for k in 0..5 {
        let breaks = detect_breaks(&series, k, 1).unwrap();
        assert!(breaks.cost <= previous + 1e-12);
        previous = breaks.cost;
    }
}

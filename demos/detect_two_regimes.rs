//! Break detection walkthrough on a synthetic two-regime price path.
//!
//! Run with: cargo run --example detect_two_regimes

use chrono::{Duration, TimeZone, Utc};
use volatility_breaks::prelude::*;

fn main() {
    println!("=== Volatility Break Detection Example ===\n");

    println!("A price path spends 60 days in a calm regime, then 60 days");
    println!("in a turbulent one. The engine works on squared log returns");
    println!("and places breaks where their mean level shifts.\n");

    // Deterministic path: alternating up/down steps of fixed size, so the
    // squared log return is exactly constant within each regime.
    let mut prices: Vec<f64> = vec![1.1000];
    for i in 0..120 {
        let step: f64 = if i < 60 { 0.002 } else { 0.025 };
        let direction: f64 = if i % 2 == 0 { 1.0 } else { -1.0 };
        let last = *prices.last().unwrap();
        prices.push(last * (direction * step).exp());
    }

    let base = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..prices.len())
        .map(|i| base + Duration::days(i as i64))
        .collect();
    let series = PriceSeries::new(timestamps, prices).unwrap();

    // The application would normally obtain the series through a
    // PriceSource implementation; the in-memory one stands in here.
    let source = InMemorySource::new().with_series("EURUSD", series);
    let series = source.fetch("EURUSD", base).unwrap();

    println!("Loaded {} observations for EURUSD.", series.len());
    println!("Expected break: day 61 (price index 61).\n");

    // --- One break ---
    let breaks = detect_breaks(&series, 1, 1).unwrap();

    println!("--- K = 1 ---");
    println!("Break indices:    {:?}", breaks.indices);
    println!(
        "Break dates:      {:?}",
        breaks
            .timestamps
            .iter()
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
    );
    println!("Total cost:       {:.6e}", breaks.cost);
    println!(
        "Price segments:   {:?}\n",
        breaks.price_segments(series.len())
    );

    // --- Effect of the break count ---
    println!("--- Effect of K ---");
    println!("{:<6} {:>22} {:>16}", "K", "Breaks", "Cost");
    println!("{:-<46}", "");

    for k in 0..=4 {
        let result = detect_breaks(&series, k, 1).unwrap();
        println!(
            "{:<6} {:>22} {:>16.4e}",
            k,
            format!("{:?}", result.indices),
            result.cost
        );
    }

    // --- Segment means on the signal ---
    println!("\n--- Signal-domain view ---");
    let signal = build_signal(&series).unwrap();
    let result = dynp_detect(&signal, &DynpConfig::default().n_breaks(1)).unwrap();
    println!("Signal breakpoints: {:?}", result.breakpoints);
    println!("Segment means:      {:?}", result.segment_means(&signal));

    // --- Infeasible configuration ---
    println!("\n--- Infeasible configuration ---");
    match detect_breaks(&series, 80, 2) {
        Err(err) => println!("Rejected as expected: {err}"),
        Ok(_) => println!("Unexpected success"),
    }
}

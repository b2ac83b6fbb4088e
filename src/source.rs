//! Price data acquisition boundary.
//!
//! The detection core never fetches or caches data itself. Applications
//! inject a [`PriceSource`] implementation (exchange client, market-data
//! provider, on-disk cache) and hand the resulting [`PriceSeries`] to
//! [`detect_breaks`](crate::detect::detect_breaks).

use crate::core::PriceSeries;
use crate::error::{BreakError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Common interface for price data providers.
///
/// This trait is object-safe and can be used with `Box<dyn PriceSource>`.
pub trait PriceSource {
    /// Fetch the price history for `symbol` starting at `start`.
    fn fetch(&self, symbol: &str, start: DateTime<Utc>) -> Result<PriceSeries>;
}

/// Type alias for boxed price source trait objects.
pub type BoxedPriceSource = Box<dyn PriceSource>;

/// A [`PriceSource`] backed by in-memory series, keyed by symbol.
///
/// Useful for tests and demos; real providers live outside this crate.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    series: HashMap<String, PriceSeries>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a series under `symbol`, replacing any previous one.
    pub fn with_series(mut self, symbol: impl Into<String>, series: PriceSeries) -> Self {
        self.series.insert(symbol.into(), series);
        self
    }

    /// Symbols currently registered.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|s| s.as_str())
    }
}

impl PriceSource for InMemorySource {
    fn fetch(&self, symbol: &str, start: DateTime<Utc>) -> Result<PriceSeries> {
        let series = self
            .series
            .get(symbol)
            .ok_or_else(|| BreakError::InvalidParameter(format!("unknown symbol: {symbol}")))?;

        let keep: Vec<usize> = series
            .timestamps()
            .iter()
            .enumerate()
            .filter(|(_, &ts)| ts >= start)
            .map(|(i, _)| i)
            .collect();

        let timestamps = keep.iter().map(|&i| series.timestamps()[i]).collect();
        let prices = keep.iter().map(|&i| series.prices()[i]).collect();
        PriceSeries::new(timestamps, prices)
    }
}

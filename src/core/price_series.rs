//! PriceSeries data structure for representing an ordered price history.

use crate::error::{BreakError, Result};
use chrono::{DateTime, Utc};

/// An ordered price series with strictly increasing timestamps.
///
/// The series is read-only after construction; the detection pipeline
/// borrows it and never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    timestamps: Vec<DateTime<Utc>>,
    prices: Vec<f64>,
}

/// Builder for constructing a [`PriceSeries`].
#[derive(Debug, Clone, Default)]
pub struct PriceSeriesBuilder {
    timestamps: Vec<DateTime<Utc>>,
    prices: Vec<f64>,
}

impl PriceSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn prices(mut self, prices: Vec<f64>) -> Self {
        self.prices = prices;
        self
    }

    /// Append a single observation.
    pub fn push(mut self, timestamp: DateTime<Utc>, price: f64) -> Self {
        self.timestamps.push(timestamp);
        self.prices.push(price);
        self
    }

    pub fn build(self) -> Result<PriceSeries> {
        PriceSeries::new(self.timestamps, self.prices)
    }
}

impl PriceSeries {
    /// Create a new PriceSeries.
    ///
    /// # Errors
    ///
    /// Returns [`BreakError::DimensionMismatch`] if timestamps and prices
    /// differ in length, and [`BreakError::TimestampError`] if timestamps
    /// are not strictly increasing.
    pub fn new(timestamps: Vec<DateTime<Utc>>, prices: Vec<f64>) -> Result<Self> {
        if timestamps.len() != prices.len() {
            return Err(BreakError::DimensionMismatch {
                expected: timestamps.len(),
                got: prices.len(),
            });
        }

        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(BreakError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }

        Ok(Self { timestamps, prices })
    }

    /// Builder entry point.
    pub fn builder() -> PriceSeriesBuilder {
        PriceSeriesBuilder::new()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Timestamps, in order.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Prices, in order.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// The observation at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<(DateTime<Utc>, f64)> {
        match (self.timestamps.get(index), self.prices.get(index)) {
            (Some(&ts), Some(&price)) => Some((ts, price)),
            _ => None,
        }
    }
}

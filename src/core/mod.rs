//! Core data structures for break detection.

mod breakpoints;
mod price_series;

pub use breakpoints::{BreakpointSet, SIGNAL_OFFSET};
pub use price_series::{PriceSeries, PriceSeriesBuilder};

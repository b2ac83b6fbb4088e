//! # volatility-breaks
//!
//! Structural break detection for volatility regimes.
//!
//! Turns an ordered price series into a squared-log-return volatility
//! signal and finds the exact minimum-cost partition of that signal into
//! a fixed number of segments via dynamic programming. Data acquisition
//! and chart rendering are collaborator concerns: applications inject a
//! [`source::PriceSource`] and consume the returned
//! [`core::BreakpointSet`].
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use volatility_breaks::prelude::*;
//!
//! // A calm regime followed by a turbulent one.
//! let mut prices = vec![100.0];
//! for i in 0..30 {
//!     let step: f64 = if i < 15 { 0.002 } else { 0.06 };
//!     let direction: f64 = if i % 2 == 0 { 1.0 } else { -1.0 };
//!     let last = *prices.last().unwrap();
//!     prices.push(last * (direction * step).exp());
//! }
//!
//! let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let timestamps: Vec<_> = (0..prices.len())
//!     .map(|i| base + Duration::days(i as i64))
//!     .collect();
//! let series = PriceSeries::new(timestamps, prices).unwrap();
//!
//! let breaks = detect_breaks(&series, 1, 1).unwrap();
//! assert_eq!(breaks.n_breakpoints, 1);
//! assert_eq!(breaks.indices, vec![16]);
//! ```

pub mod changepoint;
pub mod core;
pub mod detect;
pub mod error;
pub mod signal;
pub mod source;

pub use error::{BreakError, Result};

pub mod prelude {
    pub use crate::changepoint::{dynp_detect, DynpConfig, DynpResult, L2Cost};
    pub use crate::core::{BreakpointSet, PriceSeries, PriceSeriesBuilder};
    pub use crate::detect::detect_breaks;
    pub use crate::error::{BreakError, Result};
    pub use crate::signal::{build_signal, log_returns, volatility_signal};
    pub use crate::source::{InMemorySource, PriceSource};
}

//! Changepoint detection for volatility signals.
//!
//! Finds the minimum-cost partition of a signal into a fixed number of
//! contiguous segments under the least-squares cost.
//!
//! # Example
//!
//! ```
//! use volatility_breaks::changepoint::{dynp_detect, DynpConfig};
//!
//! // Signal with a clear level shift at index 50.
//! let mut signal = vec![0.0; 50];
//! signal.extend(vec![10.0; 50]);
//!
//! let config = DynpConfig::default().n_breaks(1);
//! let result = dynp_detect(&signal, &config).unwrap();
//!
//! assert_eq!(result.breakpoints, vec![50]);
//! ```

pub mod cost;
pub mod dynp;

pub use cost::{l2_cost, total_cost, L2Cost};
pub use dynp::{dynp_detect, DynpConfig, DynpResult};

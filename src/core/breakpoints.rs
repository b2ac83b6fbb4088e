//! Finalized break-detection results in the price-series domain.

use crate::core::PriceSeries;
use crate::error::{BreakError, Result};
use chrono::{DateTime, Utc};

/// Offset between signal indices and price-series indices.
///
/// The volatility signal is built by differencing, so it is one element
/// shorter than the price series and signal index `i` refers to the return
/// ending at price index `i + 1`.
pub const SIGNAL_OFFSET: usize = 1;

/// A validated set of structural breakpoints.
///
/// Indices address the original price series directly (the differencing
/// offset is already applied), so `timestamps[i]` is the observation at
/// which the new volatility regime starts.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointSet {
    /// Breakpoint indices into the price series, strictly increasing.
    pub indices: Vec<usize>,
    /// Timestamps corresponding to `indices`.
    pub timestamps: Vec<DateTime<Utc>>,
    /// Total least-squares segmentation cost over the signal.
    pub cost: f64,
    /// Number of breakpoints.
    pub n_breakpoints: usize,
}

impl BreakpointSet {
    /// Assemble a breakpoint set from optimizer output.
    ///
    /// Re-validates the optimizer's invariants (count, strict monotonicity,
    /// interior range) before applying `offset` and resolving timestamps.
    /// The optimizer satisfies these by construction; the check guards the
    /// contract against future changes to the search.
    ///
    /// # Errors
    ///
    /// Returns [`BreakError::ComputationError`] if any invariant is
    /// violated.
    pub fn finalize(
        signal_indices: &[usize],
        signal_len: usize,
        offset: usize,
        expected: usize,
        cost: f64,
        series: &PriceSeries,
    ) -> Result<Self> {
        if signal_indices.len() != expected {
            return Err(BreakError::ComputationError(format!(
                "expected {} breakpoints, optimizer returned {}",
                expected,
                signal_indices.len()
            )));
        }

        for (i, &idx) in signal_indices.iter().enumerate() {
            if idx == 0 || idx >= signal_len {
                return Err(BreakError::ComputationError(format!(
                    "breakpoint {idx} outside interior of signal (length {signal_len})"
                )));
            }
            if i > 0 && idx <= signal_indices[i - 1] {
                return Err(BreakError::ComputationError(
                    "breakpoints must be strictly increasing".to_string(),
                ));
            }
        }

        let indices: Vec<usize> = signal_indices.iter().map(|&idx| idx + offset).collect();
        let timestamps = indices
            .iter()
            .map(|&idx| {
                series
                    .get(idx)
                    .map(|(ts, _)| ts)
                    .ok_or_else(|| {
                        BreakError::ComputationError(format!(
                            "breakpoint index {idx} outside price series of length {}",
                            series.len()
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            n_breakpoints: indices.len(),
            indices,
            timestamps,
            cost,
        })
    }

    /// Whether no breakpoints were found (K = 0).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Price-series segments implied by the breakpoints, as half-open
    /// `(start, end)` index ranges covering the whole series.
    pub fn price_segments(&self, series_len: usize) -> Vec<(usize, usize)> {
        let mut segments = Vec::with_capacity(self.indices.len() + 1);
        let mut start = 0;
        for &idx in &self.indices {
            segments.push((start, idx));
            start = idx;
        }
        segments.push((start, series_len));
        segments
    }
}

//! Exact dynamic programming search for a fixed number of breakpoints.
//!
//! Finds the global minimum-cost partition of a signal into `n_breaks + 1`
//! contiguous segments under the least-squares cost. The search is exact:
//! the returned breakpoints attain the true optimum, with ties between
//! equal-cost splits always resolved toward the earliest split so results
//! are reproducible.

use super::cost::L2Cost;
use crate::error::{BreakError, Result};

/// Configuration for the fixed-count optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynpConfig {
    /// Number of breakpoints to place.
    pub n_breaks: usize,
    /// Minimum allowable number of data points within a segment.
    pub min_segment_size: usize,
}

impl Default for DynpConfig {
    fn default() -> Self {
        Self {
            n_breaks: 1,
            min_segment_size: 1,
        }
    }
}

impl DynpConfig {
    /// Set the number of breakpoints.
    pub fn n_breaks(mut self, n_breaks: usize) -> Self {
        self.n_breaks = n_breaks;
        self
    }

    /// Set the minimum segment size (values below 1 are raised to 1).
    pub fn min_segment_size(mut self, min_len: usize) -> Self {
        self.min_segment_size = min_len.max(1);
        self
    }
}

/// Result of the fixed-count breakpoint search, in the signal domain.
#[derive(Debug, Clone, PartialEq)]
pub struct DynpResult {
    /// Breakpoint indices into the signal, strictly increasing. Each index
    /// is the first element of a new segment.
    pub breakpoints: Vec<usize>,
    /// Segment boundaries as half-open `(start, end)` pairs covering the
    /// whole signal.
    pub segments: Vec<(usize, usize)>,
    /// Total least-squares cost of the optimal partition.
    pub cost: f64,
    /// Number of breakpoints.
    pub n_breakpoints: usize,
}

impl DynpResult {
    /// Get the segment containing a specific index.
    pub fn segment_for_index(&self, index: usize) -> Option<(usize, usize)> {
        self.segments
            .iter()
            .find(|&&(start, end)| index >= start && index < end)
            .copied()
    }

    /// Mean of each segment over `signal`.
    pub fn segment_means(&self, signal: &[f64]) -> Vec<f64> {
        self.segments
            .iter()
            .map(|&(start, end)| {
                let segment = &signal[start..end];
                if segment.is_empty() {
                    f64::NAN
                } else {
                    segment.iter().sum::<f64>() / segment.len() as f64
                }
            })
            .collect()
    }
}

/// Find the optimal fixed-count breakpoints of `signal`.
///
/// Dynamic program over `D[m][t]`, the minimum cost of partitioning the
/// first `t` signal elements into exactly `m` segments:
///
/// ```text
/// D[0][0] = 0,  D[0][t > 0] = ∞
/// D[m][t] = min over s of D[m-1][s] + cost(s, t)
/// ```
///
/// where `s` ranges over splits that keep every segment at least
/// `min_segment_size` long, including the segments still to be placed.
/// Scanning `s` in ascending order with a strict `<` comparison keeps the
/// smallest minimizer on exact cost ties. Only the previous cost row is
/// retained; backpointers are materialized per row for reconstruction.
/// O(K·n²) time, O(K·n) memory.
///
/// # Errors
///
/// - [`BreakError::InsufficientData`] if the signal is empty.
/// - [`BreakError::InfeasibleConfig`] if `(n_breaks + 1) * min_segment_size`
///   exceeds the signal length (checked before any table is allocated).
///   `n_breaks = 0` always succeeds on a non-empty signal and returns the
///   whole signal as a single segment.
pub fn dynp_detect(signal: &[f64], config: &DynpConfig) -> Result<DynpResult> {
    let n = signal.len();
    if n == 0 {
        return Err(BreakError::InsufficientData { needed: 1, got: 0 });
    }

    let min_len = config.min_segment_size.max(1);
    let cost = L2Cost::fit(signal);

    if config.n_breaks == 0 {
        return Ok(DynpResult {
            breakpoints: Vec::new(),
            segments: vec![(0, n)],
            cost: cost.cost(0, n),
            n_breakpoints: 0,
        });
    }

    let n_segments = config.n_breaks + 1;
    if n_segments * min_len > n {
        return Err(BreakError::InfeasibleConfig {
            n_breaks: config.n_breaks,
            min_segment_size: min_len,
            signal_len: n,
        });
    }

    // prev[t] = D[m-1][t]; row 0 is the empty partition.
    let mut prev = vec![f64::INFINITY; n + 1];
    prev[0] = 0.0;

    // back[m][t] = minimizing split s for (m, t); row 0 unused.
    let mut back = vec![vec![0usize; n + 1]; n_segments + 1];

    for m in 1..=n_segments {
        let mut curr = vec![f64::INFINITY; n + 1];

        // Only t values that leave room for the remaining segments matter.
        let t_lo = m * min_len;
        let t_hi = n - (n_segments - m) * min_len;

        for t in t_lo..=t_hi {
            let mut best = f64::INFINITY;
            let mut best_split = 0;

            for s in (m - 1) * min_len..=t - min_len {
                if !prev[s].is_finite() {
                    continue;
                }
                let candidate = prev[s] + cost.cost(s, t);
                if candidate < best {
                    best = candidate;
                    best_split = s;
                }
            }

            curr[t] = best;
            back[m][t] = best_split;
        }

        prev = curr;
    }

    let total = prev[n];
    if !total.is_finite() {
        return Err(BreakError::ComputationError(
            "no feasible partition found".to_string(),
        ));
    }

    // Walk backpointers from the full signal down to the first segment.
    let mut breakpoints = Vec::with_capacity(config.n_breaks);
    let mut t = n;
    for m in (2..=n_segments).rev() {
        let s = back[m][t];
        breakpoints.push(s);
        t = s;
    }
    breakpoints.reverse();

    let mut segments = Vec::with_capacity(n_segments);
    let mut start = 0;
    for &bp in &breakpoints {
        segments.push((start, bp));
        start = bp;
    }
    segments.push((start, n));

    Ok(DynpResult {
        n_breakpoints: breakpoints.len(),
        breakpoints,
        segments,
        cost: total,
    })
}

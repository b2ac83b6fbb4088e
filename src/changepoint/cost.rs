//! Least-squares segment cost for changepoint detection.
//!
//! The cost of a segment is its residual sum of squares around the segment
//! mean. Lower cost indicates a more homogeneous segment.

/// Precomputed prefix sums for O(1) segment cost queries.
///
/// The fixed-count optimizer evaluates the cost of O(K·n²) sub-ranges, so
/// each query has to be constant time. A single O(n) pass accumulates the
/// cumulative sum and sum of squares (with a leading zero), from which
///
/// ```text
/// cost(i, j) = Σ v[t]² − (Σ v[t])² / (j − i)    for t in i..j
/// ```
///
/// This struct is also the extension point for alternative segmentation
/// strategies (e.g., penalized selection over the number of breaks): any
/// search that can phrase its objective as sums of segment costs can reuse
/// it directly.
///
/// # Example
///
/// ```
/// use volatility_breaks::changepoint::L2Cost;
///
/// let signal = vec![1.0, 1.0, 5.0, 5.0];
/// let cost = L2Cost::fit(&signal);
///
/// // Homogeneous halves are free, the whole range is not.
/// assert_eq!(cost.cost(0, 2), 0.0);
/// assert_eq!(cost.cost(2, 4), 0.0);
/// assert!(cost.cost(0, 4) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct L2Cost {
    cum_sum: Vec<f64>,
    cum_sum_sq: Vec<f64>,
}

impl L2Cost {
    /// Precompute prefix sums over `signal` in one pass.
    pub fn fit(signal: &[f64]) -> Self {
        let mut cum_sum = Vec::with_capacity(signal.len() + 1);
        let mut cum_sum_sq = Vec::with_capacity(signal.len() + 1);
        cum_sum.push(0.0);
        cum_sum_sq.push(0.0);

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for &x in signal {
            sum += x;
            sum_sq += x * x;
            cum_sum.push(sum);
            cum_sum_sq.push(sum_sq);
        }

        Self { cum_sum, cum_sum_sq }
    }

    /// Length of the underlying signal.
    pub fn len(&self) -> usize {
        self.cum_sum.len() - 1
    }

    /// Whether the underlying signal is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Least-squares cost of the half-open segment `[start, end)`.
    ///
    /// A segment of length 0 or 1 has cost exactly 0. The result is clamped
    /// at zero so cancellation error cannot produce a small negative cost.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` exceeds the signal length.
    pub fn cost(&self, start: usize, end: usize) -> f64 {
        assert!(
            start <= end && end < self.cum_sum.len(),
            "segment [{start}, {end}) out of range for signal of length {}",
            self.len()
        );

        let n = (end - start) as f64;
        if n < 2.0 {
            return 0.0;
        }

        let sum = self.cum_sum[end] - self.cum_sum[start];
        let sum_sq = self.cum_sum_sq[end] - self.cum_sum_sq[start];
        (sum_sq - sum * sum / n).max(0.0)
    }
}

/// L2 cost of a segment computed directly from its values.
///
/// Two-pass mean/deviation evaluation; used to cross-check the prefix-sum
/// identity and for one-off costs outside the optimizer's hot loop.
pub fn l2_cost(segment: &[f64]) -> f64 {
    if segment.is_empty() {
        return 0.0;
    }

    let mean = segment.iter().sum::<f64>() / segment.len() as f64;
    segment.iter().map(|x| (x - mean).powi(2)).sum()
}

/// Total segmentation cost of `signal` under the given breakpoints.
///
/// Breakpoints are strictly increasing interior indices; each marks the
/// start of a new segment. An empty list yields the whole-signal cost.
pub fn total_cost(signal: &[f64], breakpoints: &[usize]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }

    let cost = L2Cost::fit(signal);
    let mut total = 0.0;
    let mut start = 0;

    for &bp in breakpoints {
        if bp > start && bp <= signal.len() {
            total += cost.cost(start, bp);
            start = bp;
        }
    }

    if start < signal.len() {
        total += cost.cost(start, signal.len());
    }

    total
}

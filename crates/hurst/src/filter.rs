//! Causal FIR Filtering
//!
//! Direct-form finite impulse response filter with zero initial state. The
//! first `len - 1` outputs only see part of the input history; callers that
//! need steady-state samples use [`FirFilter::filter_settled`].

/// Finite impulse response filter
#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    coefficients: Vec<f64>,
}

impl FirFilter {
    /// Create a filter from its numerator coefficients `b[0..m]`
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Series minus its `n`-point backward moving average
    ///
    /// Coefficients: `(n-1)/n` followed by `n-1` copies of `-1/n`.
    pub fn moving_average_residual(n: usize) -> Self {
        let n = n.max(1);
        let scale = n as f64;
        let mut coefficients = Vec::with_capacity(n);
        coefficients.push((scale - 1.0) / scale);
        coefficients.extend(std::iter::repeat(-1.0 / scale).take(n - 1));
        Self { coefficients }
    }

    /// Narrow discrete second derivative `[1, -2, 1]`
    pub fn second_derivative() -> Self {
        Self::new(vec![1.0, -2.0, 1.0])
    }

    /// Wide discrete second derivative `[1, 0, -2, 0, 1]`
    pub fn wide_second_derivative() -> Self {
        Self::new(vec![1.0, 0.0, -2.0, 0.0, 1.0])
    }

    /// Filter coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the filter has no taps
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Leading outputs affected by the zero initial state
    pub fn warmup(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Full causal output, same length as the input
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        self.filter_settled(input, 0)
    }

    /// Causal output with the first `skip` samples dropped
    ///
    /// Equivalent to `self.filter(input)[skip..]` without computing the
    /// discarded prefix. Returns an empty vector when `skip >= input.len()`.
    pub fn filter_settled(&self, input: &[f64], skip: usize) -> Vec<f64> {
        if skip >= input.len() {
            return Vec::new();
        }

        let mut output = Vec::with_capacity(input.len() - skip);
        for t in skip..input.len() {
            let taps = self.coefficients.len().min(t + 1);
            let mut acc = 0.0;
            for (k, &b) in self.coefficients[..taps].iter().enumerate() {
                acc += b * input[t - k];
            }
            output.push(acc);
        }
        output
    }
}

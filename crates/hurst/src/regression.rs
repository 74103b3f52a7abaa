//! Ordinary least-squares line fit used for the log-log scaling regression

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Least-squares fit of `y` on `x` with an intercept term
///
/// Returns `None` for mismatched lengths, fewer than two points or constant `x`.
/// Non-finite `y` values propagate into the fit.
pub fn ordinary_least_squares(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxy += dx * (yi - y_mean);
        sxx += dx * dx;
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 0.7 * v - 1.5).collect();
        let fit = ordinary_least_squares(&x, &y).unwrap();
        assert!((fit.slope - 0.7).abs() < 1e-12);
        assert!((fit.intercept + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_line_symmetric_residuals() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.1, 0.9, 2.1, 2.9];
        let fit = ordinary_least_squares(&x, &y).unwrap();
        assert!((fit.slope - 0.96).abs() < 1e-12);
        assert!((fit.intercept - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(ordinary_least_squares(&[1.0], &[2.0]).is_none());
        assert!(ordinary_least_squares(&[1.0, 2.0], &[2.0]).is_none());
        assert!(ordinary_least_squares(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_nan_propagates() {
        let fit = ordinary_least_squares(&[1.0, 2.0, 3.0], &[1.0, f64::NAN, 3.0]).unwrap();
        assert!(fit.slope.is_nan());
    }
}

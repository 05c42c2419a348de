//! Goodness-of-fit diagnostics: residuals and R².

use crate::error::PipelineError;

/// Element-wise residuals `y_data[i] - y_fit[i]`.
///
/// Fails with `Shape` when the two series differ in length.
pub fn residuals(y_data: &[f64], y_fit: &[f64]) -> Result<Vec<f64>, PipelineError> {
    if y_data.len() != y_fit.len() {
        return Err(PipelineError::Shape {
            expected: y_data.len(),
            actual: y_fit.len(),
        });
    }
    Ok(y_data
        .iter()
        .zip(y_fit)
        .map(|(d, f)| d - f)
        .collect())
}

/// Coefficient of determination, `1 - SSres/SStot`.
///
/// When the observed data has zero variance, returns 1.0 if the residual
/// sum-of-squares is also zero, else 0.0. That convention avoids a division
/// by zero; it is not a statistical generalization. Callers pass series of
/// equal length (both renderers evaluate the fit at the sample x's).
pub fn r_squared(y_data: &[f64], y_fit: &[f64]) -> f64 {
    // For an empty series both sums are zero and the zero-variance rule
    // applies; the NaN mean is never consumed.
    let mean = y_data.iter().sum::<f64>() / y_data.len() as f64;
    let ss_total: f64 = y_data.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_residual: f64 = y_data
        .iter()
        .zip(y_fit)
        .map(|(d, f)| (d - f).powi(2))
        .sum();

    if ss_total == 0.0 {
        return if ss_residual == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_residual / ss_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residuals_are_observed_minus_fitted() {
        let r = residuals(&[3.0, 5.0, 2.0], &[1.0, 5.0, 4.0]).unwrap();
        assert_eq!(r, vec![2.0, 0.0, -2.0]);
    }

    #[test]
    fn residual_length_matches_input() {
        let y = vec![1.0; 17];
        assert_eq!(residuals(&y, &y).unwrap().len(), 17);
    }

    #[test]
    fn mismatched_lengths_fail_with_shape_error() {
        let err = residuals(&[1.0, 2.0], &[1.0]).unwrap_err();
        match err {
            PipelineError::Shape { expected, actual } => {
                assert_eq!((expected, actual), (2, 1));
            }
            other => panic!("expected Shape error, got {other:?}"),
        }
    }

    #[test]
    fn perfect_fit_scores_exactly_one() {
        let y = [1.0, 4.0, 9.0, 16.0];
        assert_eq!(r_squared(&y, &y), 1.0);
    }

    #[test]
    fn constant_data_perfectly_matched_scores_one() {
        let y = [5.0; 4];
        assert_eq!(r_squared(&y, &y), 1.0);
    }

    #[test]
    fn constant_data_mismatched_anywhere_scores_zero() {
        let y = [5.0; 4];
        let fit = [5.0, 5.0, 5.1, 5.0];
        assert_eq!(r_squared(&y, &fit), 0.0);
    }

    #[test]
    fn empty_series_counts_as_a_perfect_degenerate_fit() {
        assert_eq!(r_squared(&[], &[]), 1.0);
    }

    #[test]
    fn known_partial_fit_value() {
        // mean = 2, SStot = 2, SSres = 0.5 -> R^2 = 0.75
        let y = [1.0, 2.0, 3.0];
        let fit = [1.5, 2.0, 3.5];
        assert!((r_squared(&y, &fit) - 0.75).abs() < 1e-12);
    }
}

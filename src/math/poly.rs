//! Polynomial evaluation.
//!
//! Coefficients are stored in ascending power order, so the fitted curve is
//! `y = Σ coeffs[i] · xⁱ`. An absent model is the zero function. Evaluation
//! is pure and deterministic; NaN/Inf inputs propagate per normal IEEE-754
//! semantics rather than being special-cased.

use crate::domain::{CoefficientVector, FittedModel};

/// Evaluate a coefficient vector at a single point.
///
/// Direct power-sum accumulation rather than Horner form: Horner's seed
/// term turns `x = ±inf` into `0.0 * inf = NaN`, while the power sum keeps
/// the IEEE-754 result (`x.powi(0)` is 1.0 even at infinity, so a constant
/// polynomial stays constant there).
pub fn eval_coeffs(coeffs: &CoefficientVector, x: f64) -> f64 {
    coeffs
        .coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * x.powi(i as i32))
        .sum()
}

/// Evaluate a model (or its absence) at a single point.
pub fn eval_at(model: &FittedModel, x: f64) -> f64 {
    match model {
        FittedModel::Present(coeffs) => eval_coeffs(coeffs, x),
        FittedModel::Absent => 0.0,
    }
}

/// Evaluate a model element-wise over an ordered sequence of points.
///
/// Output order matches input order; an absent model yields a zero-filled
/// vector of the same length.
pub fn eval_many(model: &FittedModel, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| eval_at(model, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(coeffs: &[f64]) -> FittedModel {
        FittedModel::Present(CoefficientVector::new(coeffs.to_vec()))
    }

    #[test]
    fn degree_zero_is_constant_everywhere() {
        let model = present(&[4.25]);
        for x in [
            f64::NEG_INFINITY,
            -100.0,
            -1.0,
            0.0,
            0.5,
            1e6,
            f64::INFINITY,
        ] {
            assert_eq!(eval_at(&model, x), 4.25);
        }
    }

    #[test]
    fn infinity_propagates_through_higher_degrees() {
        let line = present(&[1.0, 2.0]);
        assert_eq!(eval_at(&line, f64::INFINITY), f64::INFINITY);
        assert_eq!(eval_at(&line, f64::NEG_INFINITY), f64::NEG_INFINITY);

        let quadratic = present(&[1.0, 2.0, 3.0]);
        assert_eq!(eval_at(&quadratic, f64::INFINITY), f64::INFINITY);
        // -inf + inf across the odd and even terms is NaN per IEEE-754;
        // the evaluator does not special-case it.
        assert!(eval_at(&quadratic, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn absent_model_is_the_zero_function() {
        assert_eq!(eval_at(&FittedModel::Absent, 7.0), 0.0);
        assert_eq!(eval_many(&FittedModel::Absent, &[1.0, 2.0, 3.0]), vec![0.0; 3]);
    }

    #[test]
    fn quadratic_matches_hand_computation() {
        // 1 + 2x + 3x^2 at x = 2 -> 17
        let model = present(&[1.0, 2.0, 3.0]);
        assert!((eval_at(&model, 2.0) - 17.0).abs() < 1e-12);
    }

    #[test]
    fn empty_present_vector_evaluates_to_zero() {
        assert_eq!(eval_at(&present(&[]), 3.0), 0.0);
    }

    #[test]
    fn sequence_evaluation_preserves_order() {
        let model = present(&[0.0, 1.0]); // y = x
        assert_eq!(eval_many(&model, &[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn nan_propagates() {
        let model = present(&[1.0, 1.0]);
        assert!(eval_at(&model, f64::NAN).is_nan());
    }
}

//! Goodness-of-fit objective minimized by the simplex search.

use nalgebra::DVector;

use crate::domain::NssParams;
use crate::models::evaluate;

/// Sum of squared residuals between the modeled and observed yields.
///
/// This is the squared Euclidean distance between the two yield vectors: zero
/// exactly when the model reproduces every observation, positive otherwise.
/// Non-finite curve values (e.g. from a zero tenor) make the result
/// non-finite; the simplex treats such points as arbitrarily bad.
///
/// `tenors` and `yields` must be index-aligned and of equal length; that is a
/// caller contract, not something checked here.
pub fn sum_squared_residuals(params: &NssParams, tenors: &[f64], yields: &[f64]) -> f64 {
    let modeled = DVector::from_vec(evaluate(tenors, params));
    let observed = DVector::from_column_slice(yields);
    (modeled - observed).norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_residual_against_own_output() {
        let p = NssParams::new(0.03, -0.02, 0.015, 0.01, 1.2, 8.0);
        let tenors = [1.0, 2.0, 5.0, 10.0, 25.0];
        let yields = evaluate(&tenors, &p);
        assert_eq!(sum_squared_residuals(&p, &tenors, &yields), 0.0);
    }

    #[test]
    fn perturbed_observations_give_positive_residual() {
        let p = NssParams::new(0.03, -0.02, 0.015, 0.01, 1.2, 8.0);
        let tenors = [1.0, 5.0, 20.0];
        let mut yields = evaluate(&tenors, &p);
        yields[1] += 0.001;
        let sse = sum_squared_residuals(&p, &tenors, &yields);
        assert!((sse - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn zero_tenor_makes_objective_nan() {
        let p = NssParams::new(0.03, 0.01, 0.01, 0.01, 1.0, 1.0);
        let sse = sum_squared_residuals(&p, &[0.0, 2.0], &[0.01, 0.02]);
        assert!(sse.is_nan());
    }
}

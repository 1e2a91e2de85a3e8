//! Loading functions for the Nelson–Siegel–Svensson parameterization.
//!
//! With `x = t/λ`:
//!
//! - `alpha1(t, λ) = (1 - exp(-x)) / x` (slope loading)
//! - `alpha2(t, λ) = alpha1(t, λ) - exp(-x)` (curvature loading)
//!
//! The Svensson extension reuses `alpha2` with the second decay parameter λ1
//! for its extra curvature hump.
//!
//! Both functions evaluate the formulas exactly as written, with IEEE
//! division-by-zero semantics rather than guards: a zero maturity gives `0/0`
//! and a NaN that propagates to the caller, while a zero decay parameter sends
//! `x` to infinity and collapses both loadings to zero. That permissive
//! contract is deliberate; nothing is validated or clamped here.

/// Slope loading `(1 - exp(-t/λ)) / (t/λ)`.
///
/// Tends to 1 as `t → 0` and to 0 as `t → ∞`.
pub fn alpha1(t: f64, lambda: f64) -> f64 {
    let x = t / lambda;
    (1.0 - (-x).exp()) / x
}

/// Curvature loading `alpha1(t, λ) - exp(-t/λ)`.
///
/// Tends to 0 at both ends of the maturity axis, peaking in between; λ
/// controls where the hump sits.
pub fn alpha2(t: f64, lambda: f64) -> f64 {
    let x = t / lambda;
    alpha1(t, lambda) - (-x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadings_finite_on_positive_inputs() {
        for &lambda in &[0.1, 1.0, 10.0] {
            for &t in &[0.01, 0.5, 1.0, 5.0, 25.0] {
                assert!(alpha1(t, lambda).is_finite());
                assert!(alpha2(t, lambda).is_finite());
            }
        }
    }

    #[test]
    fn loadings_approach_analytic_limits() {
        // Short end: alpha1 -> 1, alpha2 -> 0.
        let lambda = 2.0;
        assert!((alpha1(1e-4, lambda) - 1.0).abs() < 1e-3);
        assert!(alpha2(1e-4, lambda).abs() < 1e-3);

        // Long end: both loadings vanish.
        assert!(alpha1(1e4, lambda).abs() < 1e-3);
        assert!(alpha2(1e4, lambda).abs() < 1e-3);
    }

    #[test]
    fn degenerate_inputs_follow_ieee_semantics() {
        // t = 0 is 0/0.
        assert!(alpha1(0.0, 1.0).is_nan());
        assert!(alpha2(0.0, 1.0).is_nan());
        // λ = 0 sends x to infinity and the loadings to zero.
        assert_eq!(alpha1(1.0, 0.0), 0.0);
        assert_eq!(alpha2(1.0, 0.0), 0.0);
    }
}

//! Nelson–Siegel–Svensson curve evaluation.
//!
//! The curve at maturity `t` is a linear combination of the basis loadings:
//!
//! ```text
//! y(t) = β0 + β1·alpha1(t, λ0) + β2·alpha2(t, λ0) + β3·alpha2(t, λ1)
//! ```
//!
//! Evaluation is a pure function of the inputs. It can be applied to any set
//! of maturities, independent of the ones used for fitting, which is what
//! makes the fitted curve usable for both interpolation inside the observed
//! range and extrapolation beyond it.

use crate::domain::NssParams;
use crate::math::{alpha1, alpha2};

/// Curve value at a single maturity.
pub fn predict(t: f64, params: &NssParams) -> f64 {
    params.beta0
        + params.beta1 * alpha1(t, params.lambda0)
        + params.beta2 * alpha2(t, params.lambda0)
        + params.beta3 * alpha2(t, params.lambda1)
}

/// Curve values at each maturity in `tenors`, in order.
///
/// The output always has exactly `tenors.len()` entries. Degenerate inputs
/// are not errors: a zero maturity produces a NaN entry, a zero λ collapses
/// its loadings and flattens the curve toward β0.
pub fn evaluate(tenors: &[f64], params: &NssParams) -> Vec<f64> {
    tenors.iter().map(|&t| predict(t, params)).collect()
}

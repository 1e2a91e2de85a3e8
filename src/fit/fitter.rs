//! NSS fit entry point.
//!
//! Drives the simplex search over the six NSS parameters against the
//! sum-of-squared-residuals objective.
//!
//! Result policy: `fit` returns `Some` only when the search converged within
//! its budget. A search that runs out of iterations returns `None` — never a
//! best-effort parameter set — so a caller cannot accidentally publish a curve
//! from an unconverged fit. One run from the supplied guess is the whole
//! contract: no retries, no multi-start, no bounds clamping.

use crate::domain::NssParams;
use crate::fit::objective::sum_squared_residuals;
use crate::fit::simplex::{self, SimplexOptions};

/// A converged NSS fit.
#[derive(Debug, Clone)]
pub struct ModelFit {
    pub params: NssParams,
    pub sse: f64,
    pub rmse: f64,
    pub iterations: usize,
    pub evaluations: usize,
}

/// Fit the six NSS parameters to the observed `(tenor, yield)` points.
///
/// `tenors` and `yields` must be index-aligned and of equal length. A
/// degenerate zero maturity makes the objective NaN for every parameter
/// vector, which the simplex can never accept as converged; such a fit fails
/// rather than returning garbage parameters.
pub fn fit(
    initial: NssParams,
    tenors: &[f64],
    yields: &[f64],
    options: &SimplexOptions,
) -> Option<ModelFit> {
    let result = simplex::minimize(&initial.to_array(), options, |x| {
        let mut coords = [0.0; 6];
        coords.copy_from_slice(x);
        sum_squared_residuals(&NssParams::from_array(coords), tenors, yields)
    });

    if !result.converged {
        return None;
    }

    let mut coords = [0.0; 6];
    coords.copy_from_slice(&result.x);

    let n = tenors.len();
    Some(ModelFit {
        params: NssParams::from_array(coords),
        sse: result.objective,
        rmse: (result.objective / n as f64).sqrt(),
        iterations: result.iterations,
        evaluations: result.evaluations,
    })
}

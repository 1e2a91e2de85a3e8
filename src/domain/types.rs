//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for evaluation or plotting

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six NSS parameters, in conventional order.
///
/// β0 is the long-run rate and `β0 + β1` the instantaneous short rate. λ0 and
/// λ1 are decay parameters that place the two curvature humps along the
/// maturity axis; they must be nonzero for the curve to be defined, but this
/// type does not enforce that — see [`crate::math::basis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NssParams {
    pub beta0: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub beta3: f64,
    pub lambda0: f64,
    pub lambda1: f64,
}

impl NssParams {
    pub fn new(beta0: f64, beta1: f64, beta2: f64, beta3: f64, lambda0: f64, lambda1: f64) -> Self {
        Self {
            beta0,
            beta1,
            beta2,
            beta3,
            lambda0,
            lambda1,
        }
    }

    /// Flatten to the `[β0, β1, β2, β3, λ0, λ1]` layout used by the optimizer.
    pub fn to_array(self) -> [f64; 6] {
        [
            self.beta0,
            self.beta1,
            self.beta2,
            self.beta3,
            self.lambda0,
            self.lambda1,
        ]
    }

    /// Rebuild from the optimizer's coordinate layout.
    pub fn from_array(x: [f64; 6]) -> Self {
        Self::new(x[0], x[1], x[2], x[3], x[4], x[5])
    }

    /// Analytic long-maturity limit of the curve.
    pub fn long_rate(&self) -> f64 {
        self.beta0
    }

    /// Analytic `t → 0` limit of the curve.
    pub fn short_rate(&self) -> f64 {
        self.beta0 + self.beta1
    }
}

/// Observed market points used for fitting.
///
/// `tenors` and `yields` are index-aligned; the fit objective assumes equal
/// lengths and does not re-validate them.
#[derive(Debug, Clone)]
pub struct MarketObservations {
    /// Maturities in years.
    pub tenors: Vec<f64>,
    /// Observed yields as decimal rates (e.g. `0.0332` for 3.32%).
    pub yields: Vec<f64>,
}

impl MarketObservations {
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
    /// Simplex iterations consumed.
    pub iterations: usize,
    /// Objective evaluations consumed.
    pub evaluations: usize,
}

/// A converged fit: parameters plus quality diagnostics.
///
/// This type only ever holds a fully converged parameter set. A fit that
/// exhausts its iteration budget returns no `FittedCurve` at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedCurve {
    pub params: NssParams,
    pub quality: FitQuality,
}

/// A per-observation fitted value and residual.
#[derive(Debug, Clone)]
pub struct PointResidual {
    pub tenor: f64,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub observations: MarketObservations,
    pub initial: NssParams,
    /// Maturities at which the fitted curve is published.
    pub targets: Vec<f64>,

    pub max_iterations: usize,
    pub tolerance: f64,

    /// Gaussian noise (bp standard deviation) added to the observed yields.
    pub noise_bp: f64,
    pub noise_seed: u64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_curve: Option<PathBuf>,
    pub export_grid: Option<PathBuf>,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    pub model: String,
    pub params: NssParams,
    pub fit_quality: FitQuality,
    pub grid: CurveGrid,
}

/// Precomputed curve values for quick plotting without refitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub tenor_years: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_array_round_trip_preserves_order() {
        let p = NssParams::new(0.03, -0.02, 0.01, 0.005, 1.5, 9.0);
        let a = p.to_array();
        assert_eq!(a, [0.03, -0.02, 0.01, 0.005, 1.5, 9.0]);
        assert_eq!(NssParams::from_array(a), p);
    }

    #[test]
    fn rate_identities() {
        let p = NssParams::new(0.04, -0.03, 0.0, 0.0, 2.0, 5.0);
        assert_eq!(p.long_rate(), 0.04);
        assert!((p.short_rate() - 0.01).abs() < 1e-15);
    }
}

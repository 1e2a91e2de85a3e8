//! The core "fit pipeline" shared by CLI entry points.
//!
//! Keeping this in one place avoids duplicating the workflow:
//! observations -> (optional noise) -> fit -> residuals -> published curve
//!
//! The CLI layer can then focus on presentation (printing, plotting, exports).

use crate::data;
use crate::domain::{FitConfig, FitQuality, FittedCurve, MarketObservations, PointResidual};
use crate::error::AppError;
use crate::fit::{SimplexOptions, fitter};
use crate::models::evaluate;
use crate::report;

/// All computed outputs of a single `nss fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Observations actually fitted (after optional noise).
    pub observations: MarketObservations,
    pub fit: FittedCurve,
    pub residuals: Vec<PointResidual>,
    pub targets: Vec<f64>,
    /// Fitted curve values at `targets`, index-aligned.
    pub target_yields: Vec<f64>,
}

/// Execute the full fitting pipeline and return the computed outputs.
///
/// A fit that exhausts its iteration budget is an error here (exit code 3),
/// not a degraded result: no curve is published from an unconverged fit.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let observations = data::with_noise(&config.observations, config.noise_bp, config.noise_seed)?;

    let options = SimplexOptions {
        max_iterations: config.max_iterations,
        x_tolerance: config.tolerance,
        f_tolerance: config.tolerance,
        ..SimplexOptions::default()
    };

    let Some(model_fit) = fitter::fit(
        config.initial,
        &observations.tenors,
        &observations.yields,
        &options,
    ) else {
        return Err(AppError::new(
            3,
            format!(
                "Fit did not converge within {} iterations; no parameters returned.",
                config.max_iterations
            ),
        ));
    };

    let fit = FittedCurve {
        params: model_fit.params,
        quality: FitQuality {
            sse: model_fit.sse,
            rmse: model_fit.rmse,
            n: observations.len(),
            iterations: model_fit.iterations,
            evaluations: model_fit.evaluations,
        },
    };

    let residuals = report::compute_residuals(&observations, &fit);
    let target_yields = evaluate(&config.targets, &fit.params);

    Ok(RunOutput {
        observations,
        fit,
        residuals,
        targets: config.targets.clone(),
        target_yields,
    })
}

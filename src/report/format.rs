//! Reporting utilities: residuals and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{FittedCurve, MarketObservations, PointResidual};
use crate::models::predict;

/// Compute fitted values and residuals for each observation.
pub fn compute_residuals(
    observations: &MarketObservations,
    fit: &FittedCurve,
) -> Vec<PointResidual> {
    observations
        .tenors
        .iter()
        .zip(observations.yields.iter())
        .map(|(&tenor, &y_obs)| {
            let y_fit = predict(tenor, &fit.params);
            PointResidual {
                tenor,
                y_obs,
                y_fit,
                residual: y_obs - y_fit,
            }
        })
        .collect()
}

/// Format the fit summary: parameters, quality, and per-point residuals.
pub fn format_fit_summary(fit: &FittedCurve, residuals: &[PointResidual]) -> String {
    let mut out = String::new();

    out.push_str("=== nss - Nelson-Siegel-Svensson Curve Fit ===\n");
    let p = &fit.params;
    out.push_str(&format!(
        "Parameters: b0={:.6} b1={:.6} b2={:.6} b3={:.6} l0={:.6} l1={:.6}\n",
        p.beta0, p.beta1, p.beta2, p.beta3, p.lambda0, p.lambda1
    ));
    out.push_str(&format!(
        "Implied rates: long-run={} short={}\n",
        fmt_rate(p.long_rate()),
        fmt_rate(p.short_rate())
    ));
    out.push_str(&format!(
        "Quality: n={} SSE={:.3e} RMSE={:.2}bp | {} iterations, {} evaluations\n",
        fit.quality.n,
        fit.quality.sse,
        fit.quality.rmse * 10_000.0,
        fit.quality.iterations,
        fit.quality.evaluations
    ));

    out.push_str("\nObservations:\n");
    out.push_str(&format!(
        "{:>8} {:>10} {:>10} {:>10}\n",
        "tenor", "y_obs", "y_fit", "residual"
    ));
    for r in residuals {
        out.push_str(&format!(
            "{:>8.2} {:>10} {:>10} {:>9.1}bp\n",
            r.tenor,
            fmt_rate(r.y_obs),
            fmt_rate(r.y_fit),
            r.residual * 10_000.0
        ));
    }

    out
}

/// Format the published curve at the target maturities.
///
/// Targets beyond `max_observed` (the last tenor the fit actually saw) are
/// marked as extrapolated.
pub fn format_curve_table(targets: &[f64], values: &[f64], max_observed: f64) -> String {
    let mut out = String::new();
    out.push_str("Fitted curve:\n");
    out.push_str(&format!("{:>8} {:>10}\n", "tenor", "yield"));
    for (&t, &y) in targets.iter().zip(values.iter()) {
        let marker = if t > max_observed { "  (extrapolated)" } else { "" };
        out.push_str(&format!("{:>8.2} {:>10}{marker}\n", t, fmt_rate(y)));
    }
    out
}

fn fmt_rate(v: f64) -> String {
    format!("{:.4}%", v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitQuality, NssParams};
    use crate::models::evaluate;

    fn fixture() -> (MarketObservations, FittedCurve) {
        let params = NssParams::new(0.03, -0.02, 0.015, 0.01, 1.5, 9.0);
        let tenors = vec![1.0, 5.0, 10.0];
        let yields = evaluate(&tenors, &params);
        let obs = MarketObservations { tenors, yields };
        let fit = FittedCurve {
            params,
            quality: FitQuality {
                sse: 0.0,
                rmse: 0.0,
                n: 3,
                iterations: 100,
                evaluations: 180,
            },
        };
        (obs, fit)
    }

    #[test]
    fn residuals_vanish_against_own_curve() {
        let (obs, fit) = fixture();
        let residuals = compute_residuals(&obs, &fit);
        assert_eq!(residuals.len(), 3);
        for r in residuals {
            assert!(r.residual.abs() < 1e-12);
        }
    }

    #[test]
    fn curve_table_marks_extrapolated_targets() {
        let (obs, fit) = fixture();
        let targets = [1.0, 10.0, 30.0];
        let values = evaluate(&targets, &fit.params);
        let max_observed = obs.tenors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let table = format_curve_table(&targets, &values, max_observed);
        assert_eq!(table.matches("(extrapolated)").count(), 1);
    }

    #[test]
    fn fit_summary_contains_parameters_and_quality() {
        let (obs, fit) = fixture();
        let residuals = compute_residuals(&obs, &fit);
        let summary = format_fit_summary(&fit, &residuals);
        assert!(summary.contains("b0=0.030000"));
        assert!(summary.contains("n=3"));
    }
}

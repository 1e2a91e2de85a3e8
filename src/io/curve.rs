//! Read/write curve JSON files.
//!
//! Curve JSON is the portable representation of a fitted curve:
//! - the six NSS parameters
//! - fit quality diagnostics
//! - run metadata (as-of date)
//! - a precomputed grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{CurveFile, CurveGrid, FittedCurve};
use crate::error::AppError;
use crate::models::predict;

/// Number of grid points precomputed into the file.
const GRID_POINTS: usize = 101;

/// Write a curve JSON file covering `[t_min, t_max]`.
pub fn write_curve_json(
    path: &Path,
    fit: &FittedCurve,
    asof_date: NaiveDate,
    t_min: f64,
    t_max: f64,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display()))
    })?;

    let (tenors, y) = build_grid(fit, t_min, t_max, GRID_POINTS);
    let curve = CurveFile {
        tool: "nss".to_string(),
        asof_date,
        model: "nss".to_string(),
        params: fit.params,
        fit_quality: fit.quality.clone(),
        grid: CurveGrid { tenor_years: tenors, y },
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display()))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

fn build_grid(fit: &FittedCurve, t_min: f64, t_max: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let n = n.max(2);
    let mut t0 = t_min;
    let mut t1 = t_max;
    if !(t0.is_finite() && t1.is_finite()) || t1 <= t0 {
        t0 = 0.25;
        t1 = 30.0;
    }

    let mut tenors = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let t = t0 + u * (t1 - t0);
        tenors.push(t);
        y.push(predict(t, &fit.params));
    }
    (tenors, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitQuality, NssParams};

    fn fixture() -> FittedCurve {
        FittedCurve {
            params: NssParams::new(0.03, -0.02, 0.015, 0.01, 1.5, 9.0),
            quality: FitQuality {
                sse: 1e-8,
                rmse: 5e-5,
                n: 5,
                iterations: 300,
                evaluations: 500,
            },
        }
    }

    #[test]
    fn curve_json_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("nss_fit_curve_roundtrip.json");
        let fit = fixture();
        let asof = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        write_curve_json(&path, &fit, asof, 1.0, 31.0).unwrap();
        let loaded = read_curve_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.tool, "nss");
        assert_eq!(loaded.asof_date, asof);
        assert_eq!(loaded.params, fit.params);
        assert_eq!(loaded.grid.tenor_years.len(), GRID_POINTS);
        assert_eq!(loaded.grid.tenor_years.len(), loaded.grid.y.len());
    }

    #[test]
    fn degenerate_range_falls_back_to_default_grid() {
        let fit = fixture();
        let (tenors, _) = build_grid(&fit, 5.0, 5.0, 11);
        assert!((tenors[0] - 0.25).abs() < 1e-12);
        assert!((tenors[10] - 30.0).abs() < 1e-12);
    }
}

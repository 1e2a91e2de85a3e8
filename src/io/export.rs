//! Export fitted curve values to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per target maturity.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write `(tenor, yield)` rows to a CSV file.
pub fn write_grid_csv(path: &Path, tenors: &[f64], yields: &[f64]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "tenor_years,yield")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (t, y) in tenors.iter().zip(yields.iter()) {
        writeln!(file, "{t:.10},{y:.10}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_csv_has_header_and_rows() {
        let path = std::env::temp_dir().join("nss_fit_grid_export.csv");
        write_grid_csv(&path, &[1.0, 2.0], &[0.01, 0.02]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "tenor_years,yield");
        assert!(lines[1].starts_with("1.0000000000,"));
    }
}

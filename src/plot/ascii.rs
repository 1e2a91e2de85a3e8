//! ASCII chart rendering for fitted curves.
//!
//! Pure string output so the plot works in any terminal and in snapshot
//! assertions. The curve is sampled once per column; observed points are
//! overlaid as `o` markers.

use crate::domain::NssParams;
use crate::models::predict;

/// Render the curve over `[t_min, t_max]` with observation markers.
///
/// `observations` are `(tenor, yield)` pairs; pass an empty slice when
/// plotting a curve without its source data.
pub fn render_curve_plot(
    params: &NssParams,
    observations: &[(f64, f64)],
    t_min: f64,
    t_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.clamp(20, 400);
    let height = height.clamp(8, 100);

    let mut t0 = t_min.min(t_max);
    let mut t1 = t_min.max(t_max);
    if !(t0.is_finite() && t1.is_finite()) || (t1 - t0) < 1e-9 {
        t0 = 0.25;
        t1 = 30.0;
    }

    // Sample one curve value per column.
    let samples: Vec<f64> = (0..width)
        .map(|col| {
            let u = col as f64 / (width as f64 - 1.0);
            predict(t0 + u * (t1 - t0), params)
        })
        .collect();

    // Y range over finite samples and observations, with a little padding.
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &y in samples.iter().chain(observations.iter().map(|(_, y)| y)) {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !(y_min.is_finite() && y_max.is_finite()) {
        return "  (nothing to plot: curve is not finite on this range)\n".to_string();
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-6);
    y_min -= pad;
    y_max += pad;

    let mut canvas = vec![vec![' '; width]; height];
    let to_row = |y: f64| -> Option<usize> {
        if !y.is_finite() {
            return None;
        }
        let u = (y - y_min) / (y_max - y_min);
        let row = ((1.0 - u) * (height as f64 - 1.0)).round();
        (row >= 0.0 && row < height as f64).then_some(row as usize)
    };

    for (col, &y) in samples.iter().enumerate() {
        if let Some(row) = to_row(y) {
            canvas[row][col] = '*';
        }
    }
    for &(t, y) in observations {
        if t < t0 || t > t1 {
            continue;
        }
        let col = ((t - t0) / (t1 - t0) * (width as f64 - 1.0)).round() as usize;
        if let Some(row) = to_row(y) {
            canvas[row][col.min(width - 1)] = 'o';
        }
    }

    // Assemble with a y-axis label every few rows and an x-axis footer.
    let label_every = (height / 5).max(1);
    let mut out = String::new();
    for (row, line) in canvas.iter().enumerate() {
        let y = y_max - (row as f64 / (height as f64 - 1.0)) * (y_max - y_min);
        if row % label_every == 0 || row == height - 1 {
            out.push_str(&format!("{:>9.4} |", y * 100.0));
        } else {
            out.push_str("          |");
        }
        out.extend(line.iter());
        out.push('\n');
    }
    out.push_str(&format!("          +{}\n", "-".repeat(width)));
    out.push_str(&format!(
        "           {:<12}{:>width$}\n",
        format!("{t0:.1}y"),
        format!("{t1:.1}y"),
        width = width.saturating_sub(12)
    ));
    out.push_str("           y in %, * fitted curve, o observed\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_has_requested_height_plus_footer() {
        let p = NssParams::new(0.03, -0.02, 0.015, 0.01, 1.5, 9.0);
        let plot = render_curve_plot(&p, &[(1.0, 0.012)], 0.25, 30.0, 60, 15);
        assert_eq!(plot.lines().count(), 15 + 3);
        assert!(plot.contains('*'));
        assert!(plot.contains('o'));
    }

    #[test]
    fn non_finite_curve_degrades_gracefully() {
        // NaN parameters poison every sample; λ = 0 would not do (it only
        // flattens the curve to a finite β0 line).
        let p = NssParams::new(f64::NAN, 0.01, 0.01, 0.01, 1.0, 9.0);
        let plot = render_curve_plot(&p, &[], 1.0, 30.0, 60, 15);
        assert!(plot.contains("nothing to plot"));
    }
}

//! Adaptive Nelder–Mead simplex search.
//!
//! References:
//! - Nelder and Mead (1965), simplex direct search.
//! - Gao and Han (2012), adaptive coefficients for higher dimensions.
//!
//! The search maintains `dim + 1` candidate points. Each iteration orders the
//! vertices by objective value, then tries reflection, expansion, and
//! outside/inside contraction of the worst vertex through the centroid of the
//! rest, shrinking the whole simplex toward the best vertex when none of the
//! candidates improves. Coefficients are the dimension-adaptive variant, which
//! degrades less than the classical constants as the dimension grows.
//!
//! NaN objective values are handled by ordering with `total_cmp`: a simplex
//! whose objective is NaN everywhere never satisfies the convergence test and
//! runs to its iteration budget, reporting failure.

/// Tuning knobs for the simplex search.
#[derive(Debug, Clone, Copy)]
pub struct SimplexOptions {
    /// Iteration budget; exhausting it without converging is a failed search.
    pub max_iterations: usize,
    /// Convergence tolerance on vertex coordinate spread.
    pub x_tolerance: f64,
    /// Convergence tolerance on objective value spread.
    pub f_tolerance: f64,
    /// Relative perturbation applied per axis to build the initial simplex.
    pub relative_step: f64,
    /// Absolute perturbation used when the initial coordinate is exactly zero.
    pub zero_step: f64,
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self {
            // 200 iterations per dimension for the 6-parameter NSS problem.
            max_iterations: 1200,
            x_tolerance: 1e-4,
            f_tolerance: 1e-4,
            relative_step: 0.05,
            zero_step: 0.00025,
        }
    }
}

/// Outcome of a simplex search.
///
/// `x` is the best vertex found whether or not the search converged; callers
/// that only want converged results must check `converged` first.
#[derive(Debug, Clone)]
pub struct SimplexResult {
    pub x: Vec<f64>,
    pub objective: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub converged: bool,
}

/// Minimize `objective_fn` starting from `initial`.
pub fn minimize<F>(initial: &[f64], options: &SimplexOptions, mut objective_fn: F) -> SimplexResult
where
    F: FnMut(&[f64]) -> f64,
{
    let dim = initial.len();
    let nf = dim as f64;

    // Dimension-adaptive coefficients (Gao & Han).
    let reflection = 1.0;
    let expansion = 1.0 + 2.0 / nf;
    let contraction = 0.75 - 1.0 / (2.0 * nf);
    let shrink = 1.0 - 1.0 / nf;

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    let mut values: Vec<f64> = Vec::with_capacity(dim + 1);
    let mut evals = 0usize;

    // Initial simplex: the starting point plus one perturbed vertex per axis.
    simplex.push(initial.to_vec());
    values.push(objective_fn(initial));
    evals += 1;

    for d in 0..dim {
        let mut x = initial.to_vec();
        if x[d] == 0.0 {
            x[d] = options.zero_step;
        } else {
            x[d] *= 1.0 + options.relative_step;
        }
        values.push(objective_fn(&x));
        evals += 1;
        simplex.push(x);
    }

    let mut iterations = 0usize;
    let mut converged = false;

    for iter in 0..options.max_iterations {
        iterations = iter + 1;

        let mut order: Vec<usize> = (0..simplex.len()).collect();
        order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
        simplex = order.iter().map(|&i| simplex[i].clone()).collect();
        values = order.iter().map(|&i| values[i]).collect();

        // Converged when every vertex is close to the best one, in both
        // position and objective value. `f64::max` ignores NaN, so the folds
        // must propagate it explicitly: an all-NaN simplex keeps shrinking
        // until x_spread alone would pass, and must never test as converged.
        let nan_max = |a: f64, b: f64| if b.is_nan() { f64::NAN } else { a.max(b) };
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|x| {
                x.iter()
                    .zip(simplex[0].iter())
                    .map(|(a, b)| (a - b).abs())
            })
            .fold(0.0_f64, nan_max);
        let f_spread = values[1..]
            .iter()
            .map(|f| (f - values[0]).abs())
            .fold(0.0_f64, nan_max);

        if values[0].is_finite()
            && x_spread <= options.x_tolerance
            && f_spread <= options.f_tolerance
        {
            converged = true;
            break;
        }

        // Centroid of all vertices except the worst.
        let centroid: Vec<f64> = (0..dim)
            .map(|d| simplex.iter().take(dim).map(|x| x[d]).sum::<f64>() / nf)
            .collect();

        let xr: Vec<f64> = (0..dim)
            .map(|d| centroid[d] + reflection * (centroid[d] - simplex[dim][d]))
            .collect();
        let fr = objective_fn(&xr);
        evals += 1;

        if fr < values[0] {
            // Reflection beat the current best: try pushing further out.
            let xe: Vec<f64> = (0..dim)
                .map(|d| centroid[d] + expansion * (xr[d] - centroid[d]))
                .collect();
            let fe = objective_fn(&xe);
            evals += 1;

            if fe < fr {
                simplex[dim] = xe;
                values[dim] = fe;
            } else {
                simplex[dim] = xr;
                values[dim] = fr;
            }
            continue;
        }

        if fr < values[dim - 1] {
            // Better than the second-worst: plain reflection is accepted.
            simplex[dim] = xr;
            values[dim] = fr;
            continue;
        }

        if fr < values[dim] {
            // Outside contraction, between centroid and reflection.
            let xc: Vec<f64> = (0..dim)
                .map(|d| centroid[d] + contraction * (xr[d] - centroid[d]))
                .collect();
            let fc = objective_fn(&xc);
            evals += 1;

            if fc <= fr {
                simplex[dim] = xc;
                values[dim] = fc;
                continue;
            }
        } else {
            // Inside contraction, between centroid and the worst vertex.
            let xc: Vec<f64> = (0..dim)
                .map(|d| centroid[d] - contraction * (centroid[d] - simplex[dim][d]))
                .collect();
            let fc = objective_fn(&xc);
            evals += 1;

            if fc < values[dim] {
                simplex[dim] = xc;
                values[dim] = fc;
                continue;
            }
        }

        // Both contractions failed: shrink everything toward the best vertex.
        for i in 1..=dim {
            for d in 0..dim {
                simplex[i][d] = simplex[0][d] + shrink * (simplex[i][d] - simplex[0][d]);
            }
            values[i] = objective_fn(&simplex[i]);
            evals += 1;
        }
    }

    let mut order: Vec<usize> = (0..simplex.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    SimplexResult {
        x: simplex[order[0]].clone(),
        objective: values[order[0]],
        iterations,
        evaluations: evals,
        converged,
    }
}

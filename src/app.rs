//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves observations and the initial guess
//! - runs the fit pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, FitArgs, PlotArgs};
use crate::data;
use crate::domain::{FitConfig, MarketObservations};
use crate::error::AppError;
use crate::models::evaluate;

pub mod pipeline;

/// Entry point for the `nss` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `nss` (and `nss --noise-bp 5`) to behave like `nss fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Eval(args) => handle_eval(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args)?;
    let run = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_fit_summary(&run.fit, &run.residuals));

    let max_observed = max_tenor(&run.observations);
    println!(
        "{}",
        crate::report::format_curve_table(&run.targets, &run.target_yields, max_observed)
    );

    if config.plot {
        let points: Vec<(f64, f64)> = run
            .observations
            .tenors
            .iter()
            .copied()
            .zip(run.observations.yields.iter().copied())
            .collect();
        let t_max = run.targets.iter().copied().fold(max_observed, f64::max);
        let plot = crate::plot::render_curve_plot(
            &run.fit.params,
            &points,
            0.25,
            t_max,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_curve {
        let asof = chrono::Local::now().date_naive();
        let t_max = run.targets.iter().copied().fold(max_observed, f64::max);
        crate::io::curve::write_curve_json(path, &run.fit, asof, 0.25, t_max)?;
    }
    if let Some(path) = &config.export_grid {
        crate::io::export::write_grid_csv(path, &run.targets, &run.target_yields)?;
    }

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    if args.targets.is_empty() {
        return Err(AppError::new(2, "No target maturities given (use --targets)."));
    }
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let values = evaluate(&args.targets, &curve.params);

    let grid_max = curve
        .grid
        .tenor_years
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    println!(
        "{}",
        crate::report::format_curve_table(&args.targets, &values, grid_max)
    );
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;

    let t0 = curve.grid.tenor_years.first().copied().unwrap_or(0.25);
    let t1 = curve.grid.tenor_years.last().copied().unwrap_or(30.0);
    let plot = crate::plot::render_curve_plot(&curve.params, &[], t0, t1, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> Result<FitConfig, AppError> {
    let observations = match (&args.maturities, &args.yields) {
        (None, None) => data::demo_observations(),
        (Some(tenors), Some(yields)) => {
            if tenors.len() != yields.len() {
                return Err(AppError::new(
                    2,
                    format!(
                        "--maturities has {} entries but --yields has {}.",
                        tenors.len(),
                        yields.len()
                    ),
                ));
            }
            if tenors.is_empty() {
                return Err(AppError::new(2, "At least one observation is required."));
            }
            MarketObservations {
                tenors: tenors.clone(),
                yields: yields.clone(),
            }
        }
        _ => {
            return Err(AppError::new(
                2,
                "--maturities and --yields must be given together.",
            ));
        }
    };

    let targets = match &args.targets {
        Some(t) if !t.is_empty() => t.clone(),
        _ => {
            if args.maturities.is_none() {
                data::demo_targets()
            } else {
                observations.tenors.clone()
            }
        }
    };

    Ok(FitConfig {
        observations,
        initial: crate::domain::NssParams::new(
            args.beta0,
            args.beta1,
            args.beta2,
            args.beta3,
            args.lambda0,
            args.lambda1,
        ),
        targets,
        max_iterations: args.max_iters,
        tolerance: args.tol,
        noise_bp: args.noise_bp,
        noise_seed: args.seed,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_curve: args.export_curve.clone(),
        export_grid: args.export_grid.clone(),
    })
}

fn max_tenor(observations: &MarketObservations) -> f64 {
    observations
        .tenors
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Rewrite argv so `nss` defaults to `nss fit`.
///
/// Rules:
/// - `nss`                     -> `nss fit`
/// - `nss --noise-bp 5 ...`    -> `nss fit --noise-bp 5 ...`
/// - `nss --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "eval" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(strings(&["nss"])), strings(&["nss", "fit"]));
        assert_eq!(
            rewrite_args(strings(&["nss", "--noise-bp", "5"])),
            strings(&["nss", "fit", "--noise-bp", "5"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(strings(&["nss", "eval", "--curve", "c.json"])),
            strings(&["nss", "eval", "--curve", "c.json"])
        );
        assert_eq!(rewrite_args(strings(&["nss", "--help"])), strings(&["nss", "--help"]));
    }

    #[test]
    fn mismatched_observation_lengths_are_rejected() {
        let args = FitArgs {
            maturities: Some(vec![1.0, 2.0]),
            yields: Some(vec![0.01]),
            ..demo_args()
        };
        let err = fit_config_from_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn custom_observations_default_targets_to_their_tenors() {
        let args = FitArgs {
            maturities: Some(vec![1.0, 2.0, 5.0]),
            yields: Some(vec![0.01, 0.015, 0.02]),
            ..demo_args()
        };
        let config = fit_config_from_args(&args).unwrap();
        assert_eq!(config.targets, vec![1.0, 2.0, 5.0]);
    }

    fn demo_args() -> FitArgs {
        FitArgs {
            maturities: None,
            yields: None,
            targets: None,
            beta0: 0.1,
            beta1: 0.1,
            beta2: 0.1,
            beta3: 0.1,
            lambda0: 1.0,
            lambda1: 1.0,
            max_iters: 1200,
            tol: 1e-4,
            noise_bp: 0.0,
            seed: 42,
            plot: true,
            no_plot: false,
            width: 100,
            height: 25,
            export_curve: None,
            export_grid: None,
        }
    }
}

//! Command-line parsing for the NSS curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "nss", version, about = "Nelson-Siegel-Svensson yield curve fitter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the NSS curve to observed yields, print the fitted curve, and
    /// optionally plot/export it.
    Fit(FitArgs),
    /// Evaluate a previously exported curve JSON at target maturities.
    Eval(EvalArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Observed maturities in years (comma-separated). Defaults to the
    /// built-in demo scenario.
    #[arg(long, value_delimiter = ',')]
    pub maturities: Option<Vec<f64>>,

    /// Observed yields as decimal rates, index-aligned with --maturities.
    #[arg(long, value_delimiter = ',')]
    pub yields: Option<Vec<f64>>,

    /// Target maturities at which the fitted curve is published.
    #[arg(long, value_delimiter = ',')]
    pub targets: Option<Vec<f64>>,

    /// Initial guess for β0 (long-run rate).
    #[arg(long, default_value_t = 0.1)]
    pub beta0: f64,

    /// Initial guess for β1 (slope).
    #[arg(long, default_value_t = 0.1)]
    pub beta1: f64,

    /// Initial guess for β2 (first curvature).
    #[arg(long, default_value_t = 0.1)]
    pub beta2: f64,

    /// Initial guess for β3 (second curvature).
    #[arg(long, default_value_t = 0.1)]
    pub beta3: f64,

    /// Initial guess for λ0 (first decay, years).
    #[arg(long, default_value_t = 1.0)]
    pub lambda0: f64,

    /// Initial guess for λ1 (second decay, years).
    #[arg(long, default_value_t = 1.0)]
    pub lambda1: f64,

    /// Simplex iteration budget.
    #[arg(long, default_value_t = 1200)]
    pub max_iters: usize,

    /// Convergence tolerance on vertex positions and objective spread.
    #[arg(long, default_value_t = 1e-4)]
    pub tol: f64,

    /// Gaussian noise (bp standard deviation) added to the observed yields.
    #[arg(long, default_value_t = 0.0)]
    pub noise_bp: f64,

    /// Random seed for noise generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the fitted curve (params + grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Export the published curve values to CSV.
    #[arg(long = "export-grid")]
    pub export_grid: Option<PathBuf>,
}

/// Options for evaluating a saved curve.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Curve JSON file produced by `nss fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Maturities (years, comma-separated) at which to evaluate the curve.
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<f64>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `nss fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

//! `nss-fit` library crate.
//!
//! Fits the six-parameter Nelson–Siegel–Svensson yield-curve model to
//! observed market yields with an adaptive Nelder–Mead simplex search, then
//! evaluates the fitted curve at arbitrary maturities.
//!
//! The binary (`nss`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., embedding the fitter in another service)

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

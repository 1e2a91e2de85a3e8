//! Curve fitting: objective, simplex search, and the NSS fit driver.

pub mod fitter;
pub mod objective;
pub mod simplex;

pub use fitter::*;
pub use objective::*;
pub use simplex::*;

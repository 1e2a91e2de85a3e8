//! Curve model evaluation (NSS).

pub mod nss;

pub use nss::*;

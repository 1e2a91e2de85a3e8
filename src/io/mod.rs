//! File input/output: curve JSON and CSV exports.

pub mod curve;
pub mod export;

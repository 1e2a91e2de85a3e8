//! Residual computation and terminal report formatting.

pub mod format;

pub use format::*;

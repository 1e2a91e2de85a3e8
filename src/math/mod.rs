//! Mathematical building blocks: NSS loading functions.

pub mod basis;

pub use basis::*;

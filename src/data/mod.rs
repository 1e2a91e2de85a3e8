//! Input data: the built-in demo scenario and noise generation.

pub mod sample;

pub use sample::*;

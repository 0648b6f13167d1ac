//! Numeric utilities
mod logspace;

pub use logspace::*;

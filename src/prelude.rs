//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::convergence::{
    sample_sizes, Convergence, ConvergenceConfig, ConvergencePoint,
};
#[doc(no_inline)]
pub use crate::estimate::{estimate, Estimate};
#[doc(no_inline)]
pub use crate::point::{classify, Point};
#[doc(no_inline)]
pub use crate::sampler::Sampler;
#[doc(no_inline)]
pub use crate::stat::HitStat;
#[doc(no_inline)]
pub use crate::traits::*;

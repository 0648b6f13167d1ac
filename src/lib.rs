//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly from the square [-1, 1] × [-1, 1] and
//! classified as inside or outside the inscribed unit circle. Four times the
//! fraction inside estimates π, and the binomial variance of the indicators
//! gives its standard error.
//!
//! # Example
//!
//! Estimate π from 100,000 seeded samples
//!
//! ```
//! use mcpi::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(42);
//!
//! let hits = Sampler::new().sample_hits(100_000, &mut rng).unwrap();
//! let est = estimate(&hits).unwrap();
//!
//! // within five standard errors
//! assert!(est.covers(std::f64::consts::PI, 5.0));
//! ```
//!
//! Watch the estimate converge over log-spaced prefixes of one sample
//!
//! ```
//! use mcpi::prelude::*;
//!
//! let config = ConvergenceConfig::builder()
//!     .min_sample(10)
//!     .max_sample(10_000)
//!     .num_points(20)
//!     .build()
//!     .unwrap();
//!
//! let conv = Convergence::seeded(&config).unwrap();
//! assert_eq!(conv.sizes()[0], 10);
//! assert_eq!(conv.sizes()[19], 10_000);
//! ```

// Test the README
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

pub mod consts;
pub mod convergence;
pub mod estimate;
pub mod misc;
pub mod point;
pub mod prelude;
pub mod report;
pub mod sampler;
pub mod stat;
pub mod traits;

pub use convergence::{
    sample_sizes, Convergence, ConvergenceConfig, ConvergenceError,
    ConvergencePoint,
};
pub use estimate::{estimate, Estimate, EstimateError};
pub use point::{classify, Point};
pub use sampler::{Sampler, SamplerError};
pub use stat::HitStat;

#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

//! Uniform sampling of the square [-1, 1] × [-1, 1]
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::consts::{SQUARE_HIGH, SQUARE_LOW};
use crate::point::Point;
use crate::traits::Sampleable;

/// Draws points uniformly from the square circumscribing the unit circle.
///
/// # Example
///
/// Classify a few seeded points
///
/// ```
/// use mcpi::prelude::*;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(42);
/// let hits = Sampler::new().sample_hits(1_000, &mut rng).unwrap();
///
/// assert_eq!(hits.len(), 1_000);
/// assert!(hits.iter().all(|&h| h == 0 || h == 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Sampler;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SamplerError {
    /// Zero points were requested
    EmptySample,
}

impl Sampler {
    #[inline]
    pub fn new() -> Self {
        Sampler
    }

    /// Draw `n` points and return their classification vector.
    ///
    /// Element `i` is 1 if point `i` lies in the unit circle and 0
    /// otherwise. Advances `rng` by two uniform draws per point.
    pub fn sample_hits<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<u8>, SamplerError> {
        if n == 0 {
            return Err(SamplerError::EmptySample);
        }
        debug!(n, "sampling points");
        let hits: Vec<u8> = self
            .sample_stream(rng)
            .take(n)
            .map(|pt: Point| pt.hit())
            .collect();
        debug!(
            n,
            k = hits.iter().map(|&h| h as usize).sum::<usize>(),
            "sampling done"
        );
        Ok(hits)
    }
}

impl Sampleable<Point> for Sampler {
    fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        let u = rand_distr::Uniform::new(SQUARE_LOW, SQUARE_HIGH);
        let x = rng.sample(u);
        let y = rng.sample(u);
        Point::new(x, y)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        let u = rand_distr::Uniform::new(SQUARE_LOW, SQUARE_HIGH);
        (0..n)
            .map(|_| {
                let x = rng.sample(u);
                let y = rng.sample(u);
                Point::new(x, y)
            })
            .collect()
    }
}

impl std::error::Error for SamplerError {}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => {
                write!(f, "sample size must be greater than zero")
            }
        }
    }
}

//! Convergence of the estimate over growing sample sizes
//!
//! One classification vector is sampled at the largest size. Every smaller
//! size is evaluated on a prefix of it, so the sweep traces a single
//! trajectory rather than independent trials.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;

use crate::consts::{
    DEFAULT_LOG_BASE, DEFAULT_MAX_SAMPLE, DEFAULT_MIN_SAMPLE,
    DEFAULT_NUM_POINTS, DEFAULT_SEED,
};
use crate::estimate::{Estimate, EstimateError};
use crate::misc::{floor_snapped, log_base, logspace};
use crate::sampler::{Sampler, SamplerError};
use crate::stat::HitStat;
use crate::traits::SuffStat;

/// Relative distance below an integer at which a log-spaced size snaps up
const SNAP_TOL: f64 = 1E-9;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum ConvergenceError {
    /// The smallest sample size was zero
    ZeroMinimum,
    /// min > max
    InvalidBounds { min: usize, max: usize },
    /// No sample sizes were requested
    NoPoints,
    /// The log base was non-finite, non-positive, or one
    InvalidBase { base: f64 },
    /// A requested prefix is longer than the classification vector
    PrefixTooLong { size: usize, len: usize },
    Sampler(SamplerError),
    Estimate(EstimateError),
}

/// Parameters of a convergence sweep.
///
/// Use [`ConvergenceConfig::builder`] to construct a validated instance.
///
/// # Example
///
/// ```
/// use mcpi::ConvergenceConfig;
///
/// let config = ConvergenceConfig::builder()
///     .min_sample(10)
///     .max_sample(10_000)
///     .num_points(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.num_points(), 100);
/// assert_eq!(config.base(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ConvergenceConfig {
    min_sample: usize,
    max_sample: usize,
    num_points: usize,
    base: f64,
    endpoint: bool,
    seed: u64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            min_sample: DEFAULT_MIN_SAMPLE,
            max_sample: DEFAULT_MAX_SAMPLE,
            num_points: DEFAULT_NUM_POINTS,
            base: DEFAULT_LOG_BASE,
            endpoint: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl ConvergenceConfig {
    #[inline]
    pub fn builder() -> ConvergenceConfigBuilder {
        ConvergenceConfigBuilder::default()
    }

    #[inline]
    pub fn min_sample(&self) -> usize {
        self.min_sample
    }

    #[inline]
    pub fn max_sample(&self) -> usize {
        self.max_sample
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Whether `max_sample` is the last size of the sweep
    #[inline]
    pub fn endpoint(&self) -> bool {
        self.endpoint
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Check the bounds, point count, and log base.
    pub fn validate(&self) -> Result<(), ConvergenceError> {
        if self.min_sample == 0 {
            Err(ConvergenceError::ZeroMinimum)
        } else if self.min_sample > self.max_sample {
            Err(ConvergenceError::InvalidBounds {
                min: self.min_sample,
                max: self.max_sample,
            })
        } else if self.num_points == 0 {
            Err(ConvergenceError::NoPoints)
        } else if !self.base.is_finite() || self.base <= 0.0 || self.base == 1.0
        {
            Err(ConvergenceError::InvalidBase { base: self.base })
        } else {
            Ok(())
        }
    }

    /// The log-spaced sample sizes of the sweep
    pub fn sample_sizes(&self) -> Result<Vec<usize>, ConvergenceError> {
        sample_sizes(
            self.min_sample,
            self.max_sample,
            self.num_points,
            self.base,
            self.endpoint,
        )
    }
}

/// Builder for [`ConvergenceConfig`]. Unset fields take the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceConfigBuilder {
    config: ConvergenceConfig,
}

impl ConvergenceConfigBuilder {
    pub fn min_sample(mut self, min_sample: usize) -> Self {
        self.config.min_sample = min_sample;
        self
    }

    pub fn max_sample(mut self, max_sample: usize) -> Self {
        self.config.max_sample = max_sample;
        self
    }

    pub fn num_points(mut self, num_points: usize) -> Self {
        self.config.num_points = num_points;
        self
    }

    pub fn base(mut self, base: f64) -> Self {
        self.config.base = base;
        self
    }

    pub fn endpoint(mut self, endpoint: bool) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<ConvergenceConfig, ConvergenceError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Log-spaced integer sample sizes from `min` to `max`.
///
/// Each size is `base^e` truncated to an integer, with the exponents spaced
/// evenly from `log_base(min)` to `log_base(max)`. Sizes may repeat at the
/// small end.
///
/// # Example
///
/// ```
/// # use mcpi::sample_sizes;
/// let sizes = sample_sizes(10, 10_000, 4, 10.0, true).unwrap();
/// assert_eq!(sizes, vec![10, 100, 1_000, 10_000]);
///
/// let sizes = sample_sizes(10, 10_000, 3, 10.0, false).unwrap();
/// assert_eq!(sizes, vec![10, 100, 1_000]);
/// ```
pub fn sample_sizes(
    min: usize,
    max: usize,
    num: usize,
    base: f64,
    endpoint: bool,
) -> Result<Vec<usize>, ConvergenceError> {
    ConvergenceConfig {
        min_sample: min,
        max_sample: max,
        num_points: num,
        base,
        endpoint,
        seed: DEFAULT_SEED,
    }
    .validate()?;

    let start = log_base(min as f64, base);
    let stop = log_base(max as f64, base);

    let sizes = logspace(start, stop, num, endpoint, base)
        .into_iter()
        .map(|x| floor_snapped(x, SNAP_TOL))
        .collect();

    Ok(sizes)
}

/// A single point on a convergence trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ConvergencePoint {
    pub n: usize,
    pub estimate: Estimate,
}

/// Estimates of π at each sample size of a sweep
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Convergence {
    sizes: Vec<usize>,
    estimates: Vec<Estimate>,
}

impl Convergence {
    /// Run a seeded sweep.
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::{Convergence, ConvergenceConfig};
    ///
    /// let config = ConvergenceConfig::builder()
    ///     .min_sample(10)
    ///     .max_sample(100_000)
    ///     .num_points(50)
    ///     .build()
    ///     .unwrap();
    ///
    /// let conv = Convergence::seeded(&config).unwrap();
    ///
    /// assert_eq!(conv.len(), 50);
    /// assert_eq!(conv.sizes()[49], 100_000);
    /// assert!(conv.last().unwrap().estimate.abs_error() < 0.05);
    /// ```
    pub fn seeded(config: &ConvergenceConfig) -> Result<Self, ConvergenceError> {
        let mut rng = Xoshiro256Plus::seed_from_u64(config.seed);
        Convergence::run(config, &mut rng)
    }

    /// Run a sweep drawing from a caller-owned random source.
    ///
    /// The seed in `config` is ignored.
    pub fn run<R: Rng>(
        config: &ConvergenceConfig,
        rng: &mut R,
    ) -> Result<Self, ConvergenceError> {
        let sizes = config.sample_sizes()?;
        // validated: sizes is non-empty
        let n_max = sizes.iter().copied().max().unwrap_or(0);

        let hits = Sampler::new().sample_hits(n_max, rng)?;
        Convergence::from_hits(&hits, sizes)
    }

    /// Evaluate the estimator on prefixes of `hits` of each size.
    ///
    /// The prefixes are swept in one pass when `sizes` is ascending. Out of
    /// order sizes are evaluated on their own prefix.
    pub fn from_hits(
        hits: &[u8],
        sizes: Vec<usize>,
    ) -> Result<Self, ConvergenceError> {
        let mut stat = HitStat::new();
        let mut estimates = Vec::with_capacity(sizes.len());

        for &size in sizes.iter() {
            if size > hits.len() {
                return Err(ConvergenceError::PrefixTooLong {
                    size,
                    len: hits.len(),
                });
            }
            let seen = stat.n();
            if size >= seen {
                stat.observe_many(&hits[seen..size]);
            } else {
                stat = HitStat::from_hits(&hits[..size]);
            }
            estimates.push(Estimate::from_stat(&stat)?);
        }

        debug!(
            points = sizes.len(),
            n_max = stat.n(),
            "convergence sweep done"
        );

        Ok(Convergence { sizes, estimates })
    }

    /// The sample sizes
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// The estimates, parallel to [`Convergence::sizes`]
    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The estimate at the largest sample size of the sweep
    pub fn last(&self) -> Option<ConvergencePoint> {
        self.iter().last()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConvergencePoint> + '_ {
        self.sizes
            .iter()
            .zip(self.estimates.iter())
            .map(|(&n, &estimate)| ConvergencePoint { n, estimate })
    }
}

impl From<SamplerError> for ConvergenceError {
    fn from(err: SamplerError) -> Self {
        ConvergenceError::Sampler(err)
    }
}

impl From<EstimateError> for ConvergenceError {
    fn from(err: EstimateError) -> Self {
        ConvergenceError::Estimate(err)
    }
}

impl std::error::Error for ConvergenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sampler(err) => Some(err),
            Self::Estimate(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ConvergenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinimum => {
                write!(f, "minimum sample size must be greater than zero")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "invalid sample bounds: (min, max) = ({}, {})", min, max)
            }
            Self::NoPoints => write!(f, "at least one sample size is required"),
            Self::InvalidBase { base } => write!(f, "invalid log base: {}", base),
            Self::PrefixTooLong { size, len } => write!(
                f,
                "prefix of {} requested from {} classified points",
                size, len
            ),
            Self::Sampler(err) => write!(f, "sampler: {}", err),
            Self::Estimate(err) => write!(f, "estimate: {}", err),
        }
    }
}

//! Estimates of π from classified samples
//!
//! A point drawn uniformly from the 2-by-2 square lands in the inscribed
//! unit circle with probability
//!
//! ```text
//!  A_circle      π r²      π
//! ----------  =  ------ = ---
//!  A_square      4 r²      4
//! ```
//!
//! so four times the hit fraction estimates π. Each indicator is a Bernoulli
//! draw with variance p(1 - p). That gives the standard error
//! 4 √(p(1 - p)) / √n.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::f64::consts::PI;
use std::fmt;

use crate::consts::SQUARE_AREA;
use crate::stat::HitStat;

/// An estimate of π with its standard error
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Estimate {
    pi: f64,
    std_err: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum EstimateError {
    /// No trials to estimate from
    EmptySample,
    /// More hits than trials
    InvalidStat { n: usize, k: usize },
}

impl Estimate {
    /// Create an estimate from its parts without checking them.
    #[inline]
    pub fn new_unchecked(pi: f64, std_err: f64) -> Self {
        Estimate { pi, std_err }
    }

    /// Estimate π from a sufficient statistic.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::{Estimate, HitStat};
    /// let est = Estimate::from_stat(&HitStat::from_parts_unchecked(4, 3)).unwrap();
    /// assert_eq!(est.pi(), 3.0);
    /// ```
    pub fn from_stat(stat: &HitStat) -> Result<Self, EstimateError> {
        let (n, k) = (stat.n(), stat.k());
        if n == 0 {
            return Err(EstimateError::EmptySample);
        }
        if k > n {
            return Err(EstimateError::InvalidStat { n, k });
        }

        let nf = n as f64;
        let p = k as f64 / nf;
        // population variance of 0/1 indicators
        let sigma = (p * (1.0 - p)).max(0.0).sqrt();

        Ok(Estimate {
            pi: SQUARE_AREA * p,
            std_err: SQUARE_AREA * sigma / nf.sqrt(),
        })
    }

    /// The estimate of π
    #[inline]
    pub fn pi(&self) -> f64 {
        self.pi
    }

    /// The standard error of the estimate
    #[inline]
    pub fn std_err(&self) -> f64 {
        self.std_err
    }

    /// Distance from the true value of π
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.pi - PI).abs()
    }

    /// Signed number of standard errors between the estimate and π.
    ///
    /// Infinite when the standard error is zero and the estimate is off.
    pub fn z_score(&self) -> f64 {
        (self.pi - PI) / self.std_err
    }

    /// Lower edge of the one standard error band
    #[inline]
    pub fn lower(&self) -> f64 {
        self.pi - self.std_err
    }

    /// Upper edge of the one standard error band
    #[inline]
    pub fn upper(&self) -> f64 {
        self.pi + self.std_err
    }

    /// `true` if `x` is within `k` standard errors of the estimate
    pub fn covers(&self, x: f64, k: f64) -> bool {
        (self.pi - x).abs() <= k * self.std_err
    }
}

/// Estimate π from a classification vector.
///
/// # Example
///
/// ```
/// use mcpi::estimate;
///
/// let est = estimate(&[1, 1, 1, 0]).unwrap();
///
/// assert_eq!(est.pi(), 3.0);
/// assert::close(est.std_err(), 4.0 * (0.75_f64 * 0.25).sqrt() / 2.0, 1E-12);
/// ```
///
/// An empty vector has no estimate
///
/// ```
/// # use mcpi::estimate;
/// assert!(estimate(&[]).is_err());
/// ```
pub fn estimate(hits: &[u8]) -> Result<Estimate, EstimateError> {
    Estimate::from_stat(&HitStat::from_hits(hits))
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.pi, p, self.std_err),
            None => write!(f, "{} ± {}", self.pi, self.std_err),
        }
    }
}

impl std::error::Error for EstimateError {}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => {
                write!(f, "cannot estimate from an empty sample")
            }
            Self::InvalidStat { n, k } => {
                write!(f, "more hits than trials: (n, k) = ({}, {})", n, k)
            }
        }
    }
}

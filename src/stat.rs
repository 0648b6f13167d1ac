#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use crate::traits::SuffStat;

/// Sufficient statistic for a stream of in-circle indicators.
///
/// Contains the number of trials, n, and the number of hits, k.
///
/// # Example
///
/// ```
/// use mcpi::prelude::*;
///
/// let mut stat = HitStat::new();
///
/// stat.observe(&1_u8);
/// stat.observe(&0_u8);
/// assert!(stat.n() == 2 && stat.k() == 1);
///
/// stat.forget(&0_u8);
/// assert!(stat.n() == 1 && stat.k() == 1);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct HitStat {
    n: usize,
    k: usize,
}

impl HitStat {
    /// Create an empty statistic
    #[inline]
    pub fn new() -> Self {
        HitStat { n: 0, k: 0 }
    }

    /// Create a statistic from components without checking that `k <= n`.
    #[inline]
    pub fn from_parts_unchecked(n: usize, k: usize) -> Self {
        HitStat { n, k }
    }

    /// Build the statistic from a classification vector
    pub fn from_hits(hits: &[u8]) -> Self {
        let mut stat = HitStat::new();
        stat.observe_many(hits);
        stat
    }

    /// Number of trials
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of hits
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Fraction of trials that hit. `None` when no trials were observed.
    #[inline]
    pub fn hit_rate(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(self.k as f64 / self.n as f64)
        }
    }
}

impl From<&HitStat> for String {
    fn from(stat: &HitStat) -> String {
        format!("HitStat(n: {}, k: {})", stat.n, stat.k)
    }
}

impl_display!(HitStat);

impl SuffStat<bool> for HitStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &bool) {
        self.n += 1;
        if *x {
            self.k += 1
        }
    }

    fn forget(&mut self, x: &bool) {
        self.n -= 1;
        if *x {
            self.k -= 1
        }
    }
}

macro_rules! impl_int_traits {
    ($kind:ty) => {
        impl SuffStat<$kind> for HitStat {
            fn n(&self) -> usize {
                self.n
            }

            fn observe(&mut self, x: &$kind) {
                self.n += 1;
                if *x == 1 {
                    self.k += 1
                }
            }

            fn forget(&mut self, x: &$kind) {
                self.n -= 1;
                if *x == 1 {
                    self.k -= 1
                }
            }
        }
    };
}

impl_int_traits!(u8);
impl_int_traits!(u16);
impl_int_traits!(u32);
impl_int_traits!(u64);
impl_int_traits!(usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;

    test_basic_impls!(HitStat::from_parts_unchecked(4, 3));

    #[test]
    fn new_should_be_empty() {
        let stat = HitStat::new();
        assert_eq!(stat.n, 0);
        assert_eq!(stat.k, 0);
        assert!(stat.hit_rate().is_none());
    }

    #[test]
    fn from_hits() {
        let stat = HitStat::from_hits(&[0, 1, 1, 0, 1, 1]);
        assert_eq!(stat.n(), 6);
        assert_eq!(stat.k(), 4);
    }

    #[test]
    fn observe_1() {
        let mut stat = HitStat::new();
        stat.observe(&1_u8);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 1);
    }

    #[test]
    fn observe_true() {
        let mut stat = HitStat::new();
        stat.observe(&true);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 1);
    }

    #[test]
    fn observe_0() {
        let mut stat = HitStat::new();
        stat.observe(&0_u32);
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn forget_undoes_observe() {
        let mut stat = HitStat::from_hits(&[1, 0, 1]);
        stat.forget_many(&[1_u8, 0][..]);
        assert_eq!(stat, HitStat::from_parts_unchecked(1, 1));
    }

    #[test]
    fn hit_rate() {
        let stat = HitStat::from_parts_unchecked(8, 6);
        assert_eq!(stat.hit_rate(), Some(0.75));
    }

    #[test]
    fn display() {
        let stat = HitStat::from_parts_unchecked(10, 8);
        assert_eq!(stat.to_string(), "HitStat(n: 10, k: 8)");
    }
}

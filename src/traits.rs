//! Sampling and sufficient-statistic traits
use rand::Rng;

/// Can draw values of type `X` from a random source
pub trait Sampleable<X> {
    /// Single draw
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::prelude::*;
    /// use rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256Plus;
    ///
    /// let mut rng = Xoshiro256Plus::seed_from_u64(1);
    /// let pt: Point = Sampler::new().draw(&mut rng);
    ///
    /// assert!(pt.x().abs() <= 1.0 && pt.y().abs() <= 1.0);
    /// ```
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }

    /// Create a never-ending iterator of samples
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::prelude::*;
    /// use rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256Plus;
    ///
    /// let mut rng = Xoshiro256Plus::seed_from_u64(7);
    /// let sampler = Sampler::new();
    ///
    /// let n = 100_000;
    /// let hits = sampler
    ///     .sample_stream(&mut rng)
    ///     .take(n)
    ///     .filter(|pt: &Point| pt.in_unit_circle())
    ///     .count();
    ///
    /// assert::close(4.0 * hits as f64 / n as f64, std::f64::consts::PI, 0.05);
    /// ```
    fn sample_stream<'r, R: Rng>(
        &'r self,
        mut rng: &'r mut R,
    ) -> Box<dyn Iterator<Item = X> + 'r> {
        Box::new(std::iter::repeat_with(move || self.draw(&mut rng)))
    }
}

/// Is a [sufficient statistic](https://en.wikipedia.org/wiki/Sufficient_statistic)
/// for a stream of observations.
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Forget several observations
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }
}

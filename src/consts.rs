//! Numerical constants and run defaults

/// Area of the sampling square [-1, 1] × [-1, 1]
pub const SQUARE_AREA: f64 = 4.0;
/// Lower bound of each coordinate
pub const SQUARE_LOW: f64 = -1.0;
/// Upper bound of each coordinate
pub const SQUARE_HIGH: f64 = 1.0;
/// Squared radius of the inscribed circle
pub const RADIUS_SQ: f64 = 1.0;

/// Smallest sample size on a default convergence sweep
pub const DEFAULT_MIN_SAMPLE: usize = 10;
/// Largest sample size on a default convergence sweep
pub const DEFAULT_MAX_SAMPLE: usize = 1_000_000;
/// Number of sample sizes on a default convergence sweep
pub const DEFAULT_NUM_POINTS: usize = 200;
/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;
/// Default base of the logarithmic spacing
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Where `--save` writes the convergence table
pub const DEFAULT_OUTPUT_PATH: &str = "figures/ex1_pi.csv";

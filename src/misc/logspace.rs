/// Numbers spaced evenly on a log scale.
///
/// Returns `num` values `base^e` where the exponents `e` run evenly from
/// `start` to `stop`. When `endpoint` is `false`, `stop` is excluded and the
/// step is `(stop - start) / num`.
///
/// # Example
///
/// ```
/// # use mcpi::misc::logspace;
/// let xs = logspace(1.0, 3.0, 3, true, 10.0);
///
/// assert::close(xs[0], 10.0, 1E-9);
/// assert::close(xs[1], 100.0, 1E-9);
/// assert::close(xs[2], 1000.0, 1E-9);
/// ```
pub fn logspace(
    start: f64,
    stop: f64,
    num: usize,
    endpoint: bool,
    base: f64,
) -> Vec<f64> {
    linspace(start, stop, num, endpoint)
        .into_iter()
        .map(|e| base.powf(e))
        .collect()
}

/// Numbers spaced evenly over `[start, stop]` (or `[start, stop)`)
///
/// # Example
///
/// ```
/// # use mcpi::misc::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5, true), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 4, false), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = if endpoint { num - 1 } else { num };
            let step = (stop - start) / div as f64;
            let mut xs: Vec<f64> =
                (0..num).map(|i| start + i as f64 * step).collect();
            if endpoint {
                // avoid accumulated round-off in the last element
                xs[num - 1] = stop;
            }
            xs
        }
    }
}

/// Logarithm of `x` in `base`
#[inline]
pub fn log_base(x: f64, base: f64) -> f64 {
    if base == 10.0 {
        x.log10()
    } else {
        x.log10() / base.log10()
    }
}

/// Truncate to an integer, snapping values within `rel_tol` below an integer
/// up to it.
///
/// `10f64.powf(6.0)` is exact, but `2f64.powf(log2(1e6))` may come out a hair
/// under 1e6.
pub fn floor_snapped(x: f64, rel_tol: f64) -> usize {
    let r = x.round();
    if r > x && (r - x) <= rel_tol * r.abs() {
        r as usize
    } else {
        x.floor() as usize
    }
}

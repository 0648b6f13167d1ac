use std::f64::consts::PI;

use mcpi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

const TOL: f64 = 1E-12;

#[test]
fn seed_42_with_ten_points_is_reproducible() {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let hits = Sampler::new().sample_hits(10, &mut rng).unwrap();

    assert_eq!(hits, vec![1, 1, 0, 1, 1, 1, 1, 1, 0, 1]);

    let est = estimate(&hits).unwrap();
    assert::close(est.pi(), 3.2, TOL);
    // sigma = sqrt(0.8 * 0.2) = 0.4
    assert::close(est.std_err(), 1.6 / 10_f64.sqrt(), TOL);
}

#[test]
fn seed_42_with_a_thousand_points() {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let hits = Sampler::new().sample_hits(1_000, &mut rng).unwrap();
    let stat = HitStat::from_hits(&hits);

    assert_eq!(stat.k(), 789);

    let est = estimate(&hits).unwrap();
    assert::close(est.pi(), 3.156, TOL);
    assert::close(est.std_err(), 0.051_610_696_565_731_4, 1E-10);
}

#[test]
fn estimator_is_pure() {
    let mut rng = Xoshiro256Plus::seed_from_u64(1234);
    let hits = Sampler::new().sample_hits(5_000, &mut rng).unwrap();
    let a = estimate(&hits).unwrap();
    let b = estimate(&hits).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sweep_uses_nested_prefixes_of_one_sample() {
    let config = ConvergenceConfig::builder()
        .min_sample(10)
        .max_sample(10_000)
        .num_points(30)
        .seed(42)
        .build()
        .unwrap();

    let conv = Convergence::seeded(&config).unwrap();

    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let hits = Sampler::new().sample_hits(10_000, &mut rng).unwrap();

    for pt in conv.iter() {
        let direct = estimate(&hits[..pt.n]).unwrap();
        assert::close(pt.estimate.pi(), direct.pi(), TOL);
        assert::close(pt.estimate.std_err(), direct.std_err(), TOL);
    }
}

#[test]
fn sweep_is_reproducible() {
    let config = ConvergenceConfig::builder()
        .max_sample(50_000)
        .num_points(40)
        .seed(7)
        .build()
        .unwrap();

    let a = Convergence::seeded(&config).unwrap();
    let b = Convergence::seeded(&config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn error_shrinks_and_estimate_converges() {
    let config = ConvergenceConfig::builder()
        .min_sample(100)
        .max_sample(1_000_000)
        .num_points(25)
        .seed(42)
        .build()
        .unwrap();

    let conv = Convergence::seeded(&config).unwrap();
    let first = conv.estimates()[0];
    let last = conv.last().unwrap();

    assert_eq!(last.n, 1_000_000);
    assert!(last.estimate.std_err() < first.std_err());
    // std_err ~ 1.6e-3 at n = 1e6
    assert!(last.estimate.std_err() < 2E-3);
    assert!(last.estimate.covers(PI, 5.0));
    assert!(last.estimate.abs_error() < 0.01);
}

#[test]
fn sweep_without_endpoint_stops_short_of_max() {
    let config = ConvergenceConfig::builder()
        .min_sample(10)
        .max_sample(1_000)
        .num_points(2)
        .endpoint(false)
        .build()
        .unwrap();

    let conv = Convergence::seeded(&config).unwrap();
    assert_eq!(conv.sizes(), &[10, 100]);
}

#[test]
fn sweep_in_base_two() {
    let config = ConvergenceConfig::builder()
        .min_sample(16)
        .max_sample(1_024)
        .num_points(7)
        .base(2.0)
        .build()
        .unwrap();

    let conv = Convergence::seeded(&config).unwrap();
    assert_eq!(conv.sizes(), &[16, 32, 64, 128, 256, 512, 1_024]);
}

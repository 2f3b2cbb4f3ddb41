use gaussian::random::{create_rng, generate_gaussian_with, FnSource};
use gaussian::special::{erfc, ierfc, IERFC_SATURATION};
use gaussian::{ContinuousDistribution, Gaussian, StatsError};

const TOL: f64 = 1e-5;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {}", msg, a, b);
}

// ── Belief updates ───────────────────────────────────────────────────

#[test]
fn kalman_style_measurement_update() {
    // Prior N(0, 4), two noisy sensors N(1.2, 1) and N(0.8, 1)
    let prior = Gaussian::new(0.0_f64, 4.0).unwrap();
    let s1 = Gaussian::new(1.2, 1.0).unwrap();
    let s2 = Gaussian::new(0.8, 1.0).unwrap();

    let post = prior.product(&s1).unwrap().product(&s2).unwrap();

    // τ = 1/4 + 1 + 1 = 2.25
    assert_near(post.variance(), 1.0 / 2.25, 1e-12, "posterior variance");
    assert_near(post.mean(), (1.2 + 0.8) / 2.25, 1e-12, "posterior mean");

    // Retracting a sensor recovers the single-sensor posterior
    let retracted = post.quotient(&s2).unwrap();
    let expected = prior.product(&s1).unwrap();
    assert_near(retracted.mean(), expected.mean(), 1e-12, "retracted mean");
    assert_near(retracted.variance(), expected.variance(), 1e-12, "retracted variance");
}

#[test]
fn quotient_by_more_precise_belief_fails() {
    let vague = Gaussian::new(0.0_f64, 10.0).unwrap();
    let sharp = Gaussian::new(0.0_f64, 0.1).unwrap();
    match vague.quotient(&sharp) {
        Err(StatsError::InvalidPrecision(p)) => assert!(p < 0.0),
        other => panic!("expected InvalidPrecision, got {other:?}"),
    }
}

// ── Sums of independent variables ────────────────────────────────────

#[test]
fn sum_matches_sampled_sum() {
    let a = Gaussian::new(1.0_f64, 0.5).unwrap();
    let b = Gaussian::new(-3.0_f64, 2.0).unwrap();
    let analytic = a - b + a.scale(2.0).unwrap();

    let mut rng = create_rng(11);
    let size = 400_000;
    let draws: Vec<f64> = (0..size)
        .map(|_| a.sample(&mut rng) - b.sample(&mut rng) + 2.0 * a.sample(&mut rng))
        .collect();
    let mean = draws.iter().sum::<f64>() / size as f64;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / size as f64;

    assert_near(mean, analytic.mean(), 0.02, "empirical mean");
    assert_near(var, analytic.variance(), 0.05, "empirical variance");
}

#[test]
fn division_by_constant_undoes_scaling() {
    let d = Gaussian::new(2.5_f64, 0.75).unwrap();
    let back = d.mul_constant(4.0).unwrap().div_constant(4.0).unwrap();
    assert_eq!(back, d);
}

// ── Quantiles ────────────────────────────────────────────────────────

#[test]
fn ppf_saturates_to_sentinel_scale() {
    let d = Gaussian::new(0.0_f64, 1.0).unwrap();
    let edge = IERFC_SATURATION * core::f64::consts::SQRT_2;
    assert_eq!(d.ppf(0.0), -edge);
    assert_eq!(d.ppf(1.0), edge);
}

#[test]
fn quantile_via_trait_object() {
    let dists: Vec<Box<dyn ContinuousDistribution<f64>>> = vec![
        Box::new(Gaussian::new(0.0, 1.0).unwrap()),
        Box::new(Gaussian::new(100.0, 25.0).unwrap()),
    ];
    for d in &dists {
        let q = d.quantile(0.975);
        assert_near(d.cdf(q), 0.975, TOL, "cdf(quantile)");
        assert_near(q, d.mean() + 1.959964 * d.variance().sqrt(), 1e-4, "97.5% quantile");
    }
}

#[test]
fn erfc_and_ierfc_agree_with_cdf_and_ppf() {
    let d = Gaussian::new(0.0_f64, 1.0).unwrap();
    let x = 0.8;
    let p = d.cdf(x);
    assert_near(p, 0.5 * erfc(-x / core::f64::consts::SQRT_2), 1e-15, "cdf");
    assert_near(d.ppf(p), -core::f64::consts::SQRT_2 * ierfc(2.0 * p), 1e-15, "ppf");
}

// ── Sampling ─────────────────────────────────────────────────────────

#[cfg(feature = "alloc")]
#[test]
fn injected_source_drives_sampler() {
    let d = Gaussian::new(0.0_f64, 0.3).unwrap();
    let mut src = FnSource(|| 0.5);
    let expected = generate_gaussian_with(&mut FnSource(|| 0.5), 0.0, 0.3_f64.sqrt());
    for x in d.random_with(5, &mut src) {
        assert_eq!(x, expected);
    }
}

#[cfg(feature = "std")]
#[test]
fn thread_local_sampler_produces_requested_count() {
    let d = Gaussian::new(0.0_f32, 0.3).unwrap();
    let draws = d.random(10);
    assert_eq!(draws.len(), 10);
    assert!(draws.iter().all(|x| x.is_finite()));
}

#[test]
fn f32_distribution() {
    let d = Gaussian::new(0.0_f32, 1.0).unwrap();
    assert!((d.cdf(0.0) - 0.5).abs() < 1e-6);
    assert!((d.ppf(0.9) - 1.28155).abs() < 1e-4);
    assert!((d.pdf(0.0) - 0.398942).abs() < 1e-6);
}

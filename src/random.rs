//! Uniform randomness capability and the Box–Muller transform.
//!
//! The sampler never reaches for a hidden global: every draw goes through a
//! [`UniformSource`] passed in by the caller. Any `rand` generator is a
//! source out of the box, and [`FnSource`] lifts a plain closure into one,
//! which is how deterministic tests pin the output.
//!
//! # Seeding
//!
//! A generator from [`create_rng`] is a `UniformSource` too. Two generators
//! built from the same seed feed the sampler the same uniforms, so the
//! variates repeat exactly on a given target.

use core::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::FloatScalar;

/// A source of uniform variates on [0, 1).
pub trait UniformSource {
    /// Next uniform draw in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Adapts a closure `FnMut() -> f64` into a [`UniformSource`].
///
/// The closure must return values in [0, 1); a draw of exactly 0 sends
/// the Box–Muller radius to infinity.
///
/// # Examples
/// ```
/// use gaussian::random::{FnSource, UniformSource};
/// let mut counter = 0.0;
/// let mut src = FnSource(move || {
///     counter += 0.25;
///     counter
/// });
/// assert_eq!(src.next_uniform(), 0.25);
/// assert_eq!(src.next_uniform(), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> UniformSource for FnSource<F> {
    fn next_uniform(&mut self) -> f64 {
        (self.0)()
    }
}

/// Seeded uniform source for repeatable sampling.
///
/// `SmallRng` is not cryptographic and its stream may change between
/// `rand` releases; pin the seed, not the values.
///
/// # Examples
/// ```
/// use gaussian::random::{create_rng, UniformSource};
/// let (mut a, mut b) = (create_rng(7), create_rng(7));
/// let u = a.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// assert_eq!(u, b.next_uniform());
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// One normal variate with the given mean and standard deviation.
///
/// Box–Muller, cosine branch only: draws `u1, u2` from `source` and returns
/// `√(−2 ln u1)·cos(2π u2)·std_dev + mean`. The sine companion is discarded,
/// so every variate consumes two uniform draws.
///
/// # Examples
/// ```
/// use gaussian::random::{generate_gaussian_with, FnSource};
/// let mut src = FnSource(|| 0.5);
/// let x: f64 = generate_gaussian_with(&mut src, 0.0, 1.0);
/// // √(2 ln 2) · cos(π)
/// assert!((x + 1.1774100225154747).abs() < 1e-12);
/// ```
pub fn generate_gaussian_with<T, S>(source: &mut S, mean: T, std_dev: T) -> T
where
    T: FloatScalar,
    S: UniformSource + ?Sized,
{
    let u1 = T::from(source.next_uniform()).unwrap();
    let u2 = T::from(source.next_uniform()).unwrap();
    let two = T::one() + T::one();
    let tau = T::from(TAU).unwrap();

    let z0 = (-two * u1.ln()).sqrt() * (tau * u2).cos();
    z0 * std_dev + mean
}

/// [`generate_gaussian_with`] driven by the thread-local generator.
#[cfg(feature = "std")]
pub fn generate_gaussian<T: FloatScalar>(mean: T, std_dev: T) -> T {
    generate_gaussian_with(&mut rand::rng(), mean, std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_variates() {
        let (mut a, mut b) = (create_rng(42), create_rng(42));
        for _ in 0..10 {
            let x: f64 = generate_gaussian_with(&mut a, 1.0, 2.0);
            let y: f64 = generate_gaussian_with(&mut b, 1.0, 2.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn uniform_draws_in_unit_interval() {
        let mut rng = create_rng(7);
        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn box_muller_consumes_two_draws() {
        let mut calls = 0usize;
        let mut src = FnSource(|| {
            calls += 1;
            0.25
        });
        let _: f64 = generate_gaussian_with(&mut src, 0.0, 1.0);
        let _: f64 = generate_gaussian_with(&mut src, 0.0, 1.0);
        drop(src);
        assert_eq!(calls, 4);
    }

    #[test]
    fn box_muller_cosine_branch() {
        // u1 = e^{-1/2} gives radius 1; u2 = 0 gives cos(0) = 1
        let draws = [(-0.5_f64).exp(), 0.0];
        let mut i = 0;
        let mut src = FnSource(|| {
            let u = draws[i % 2];
            i += 1;
            u
        });
        let x: f64 = generate_gaussian_with(&mut src, 3.0, 2.0);
        assert!((x - 5.0).abs() < 1e-12, "x = {x}");
    }

    #[test]
    fn box_muller_mean_and_scale() {
        let mut src = FnSource(|| 0.5);
        let z: f64 = generate_gaussian_with(&mut src, 0.0, 1.0);
        let mut src = FnSource(|| 0.5);
        let x: f64 = generate_gaussian_with(&mut src, 10.0, 3.0);
        assert!((x - (10.0 + 3.0 * z)).abs() < 1e-12);
    }

    #[test]
    fn box_muller_f32() {
        let mut src = FnSource(|| 0.5);
        let x: f32 = generate_gaussian_with(&mut src, 0.0, 1.0);
        assert!((x + 1.177_410_1).abs() < 1e-5);
    }

    #[cfg(feature = "std")]
    #[test]
    fn thread_rng_draws_are_finite() {
        for _ in 0..1000 {
            assert!(generate_gaussian(0.0_f64, 1.0).is_finite());
        }
    }
}

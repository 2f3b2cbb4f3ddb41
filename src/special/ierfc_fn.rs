//! Inverse complementary error function.
//!
//! Starts from the Abramowitz–Stegun 26.2.23 rational estimate in
//! t = √(−2 ln(x/2)) and applies exactly [`REFINEMENT_STEPS`] Halley
//! corrections against [`erfc`]. Fixed cost, bounded precision.

use core::f64::consts::{FRAC_2_SQRT_PI, LN_2};

use crate::FloatScalar;
use super::erfc;

/// Magnitude returned by [`ierfc`] outside the open interval (0, 2).
///
/// Stands in for ±∞ on the erfc scale. On the standard normal this is
/// ∓100·√2 ≈ ∓141.42 through `ppf`. Callers treat |r| ≥ 100 as saturation,
/// not as a precise inverse.
pub const IERFC_SATURATION: f64 = 100.0;

const REFINEMENT_STEPS: usize = 2;

/// Inverse complementary error function: returns r with erfc(r) = x.
///
/// - `x >= 2` returns `-IERFC_SATURATION`
/// - `x <= 0` (including `-0.0`) returns `+IERFC_SATURATION`
/// - otherwise the argument is reflected into (0, 1], solved, and the sign
///   restored for `x >= 1`
///
/// Never fails; NaN propagates. Subnormal `x` stays finite: when `x/2`
/// underflows, ln(x/2) is taken as ln(x) − ln 2.
///
/// # Example
///
/// ```
/// use gaussian::special::{erfc, ierfc};
///
/// let r = ierfc(0.2_f64);
/// assert!((erfc(r) - 0.2).abs() < 1e-12);
/// assert!(ierfc(1.0_f64).abs() < 1e-7);
/// assert_eq!(ierfc(-0.5_f64), 100.0);
/// ```
pub fn ierfc<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = one + one;
    let saturation = T::from(IERFC_SATURATION).unwrap();

    if x >= two {
        tracing::trace!(x = ?x, "ierfc saturated low");
        return -saturation;
    }
    if x <= T::zero() {
        tracing::trace!(x = ?x, "ierfc saturated high");
        return saturation;
    }

    let xx = if x < one { x } else { two - x };
    let c = |v: f64| T::from(v).unwrap();
    let half = xx / two;
    let ln_half = if half > T::zero() { half.ln() } else { xx.ln() - c(LN_2) };
    let t = (-two * ln_half).sqrt();

    let num = c(2.30753) + t * c(0.27061);
    let den = one + t * (c(0.99229) + t * c(0.04481));
    let mut r = c(-0.70711) * (num / den - t);

    let two_over_sqrt_pi = c(FRAC_2_SQRT_PI);
    for _ in 0..REFINEMENT_STEPS {
        let err = erfc(r) - xx;
        r = r + err / (two_over_sqrt_pi * (-(r * r)).exp() - r * err);
    }

    if x < one {
        r
    } else {
        -r
    }
}

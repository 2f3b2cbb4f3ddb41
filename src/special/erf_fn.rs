//! Error function and complementary error function.
//!
//! erfc is the Numerical Recipes rational-Chebyshev fit
//! t·exp(−z² − 1.26551223 + t·P(t)) with t = 1/(1 + z/2), z = |x|.
//! Negative arguments use the reflection erfc(−x) = 2 − erfc(x).

use crate::FloatScalar;
use super::{ERFC_COEFFS, ERFC_OFFSET};

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// Fixed-cost: one `exp` and a nine-term Horner polynomial. Fractional
/// error is below 1.2e-7 for every finite x, so do not expect more than
/// six or seven significant digits. NaN propagates.
///
/// # Example
///
/// ```
/// use gaussian::special::erfc;
///
/// assert!((erfc(0.5_f64) - 0.4795001221869535).abs() < 1e-7);
/// assert!(erfc(6.0_f64) < 1e-15);
/// assert!((erfc(-6.0_f64) - 2.0).abs() < 1e-15);
/// ```
pub fn erfc<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = one + one;
    let z = x.abs();
    let t = one / (one + z / two);

    // Horner from the highest coefficient: c1 + t(c2 + t(... + t·c9))
    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| T::from(c).unwrap() + t * acc);

    let r = t * (-z * z + T::from(ERFC_OFFSET).unwrap() + t * poly).exp();
    if x >= T::zero() {
        r
    } else {
        two - r
    }
}

/// Error function erf(x) = 1 − erfc(x).
///
/// Inherits the absolute accuracy of [`erfc`]; near zero the relative error
/// of this form is poor, which is acceptable for probability work.
///
/// # Example
///
/// ```
/// use gaussian::special::erf;
///
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-7);
/// ```
pub fn erf<T: FloatScalar>(x: T) -> T {
    T::one() - erfc(x)
}

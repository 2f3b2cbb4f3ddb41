//! Special mathematical functions.
//!
//! Provides the complementary error function, its inverse, and the error
//! function derived from it. All functions are generic over [`FloatScalar`]
//! (f32/f64), no-std compatible, and total: they never fail and never loop
//! to a tolerance.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`erfc`] | Complementary error function 1−erf(x), relative error < 1.2e-7 |
//! | [`erf`] | Error function, as 1 − erfc(x) |
//! | [`ierfc`] | Inverse of [`erfc`] on (0, 2), saturating outside it |
//!
//! # Example
//!
//! ```
//! use gaussian::special::{erfc, ierfc};
//!
//! // erfc(0) = 1
//! assert!((erfc(0.0_f64) - 1.0).abs() < 1e-7);
//!
//! // erfc(-x) = 2 − erfc(x)
//! assert_eq!(erfc(-0.7_f64), 2.0 - erfc(0.7));
//!
//! // ierfc undoes erfc
//! assert!((ierfc(erfc(0.4_f64)) - 0.4).abs() < 1e-9);
//!
//! // and saturates at the domain edges
//! assert_eq!(ierfc(0.0_f64), 100.0);
//! assert_eq!(ierfc(2.0_f64), -100.0);
//! ```

mod erf_fn;
mod ierfc_fn;


pub use erf_fn::{erf, erfc};
pub use ierfc_fn::{ierfc, IERFC_SATURATION};

// ---------------------------------------------------------------------------
// Numerical Recipes rational-Chebyshev constants for erfc
// NR 3e §6.2.2 (erfccheb family), fractional error < 1.2e-7 everywhere.
// ---------------------------------------------------------------------------

/// Constant term of the erfc exponent.
pub(crate) const ERFC_OFFSET: f64 = -1.26551223;

/// Polynomial coefficients in t = 1/(1 + |x|/2), lowest order first.
pub(crate) const ERFC_COEFFS: [f64; 9] = [
    1.00002368,
    0.37409196,
    0.09678418,
    -0.18628806,
    0.27886807,
    -1.13520398,
    1.48851587,
    -0.82215223,
    0.17087277,
];

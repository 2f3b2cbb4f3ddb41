use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point element type of a distribution.
///
/// Blanket-implemented for all types satisfying the bounds, in practice
/// `f32` and `f64`. Requires `num_traits::Float` for `exp`, `ln`, `sqrt`,
/// `cos` and friends, which resolve to the system libm under `std` and to the
/// pure-Rust `libm` crate otherwise.
pub trait FloatScalar: Float + Copy + PartialEq + Debug {}

impl<T: Float + Copy + PartialEq + Debug> FloatScalar for T {}

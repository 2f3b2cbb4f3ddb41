//! # gaussian
//!
//! Univariate Gaussian (normal) distribution with a closed algebra, no-std
//! compatible. Density, cumulative probability, quantile and Box–Muller
//! sampling are built on a fixed-cost complementary error function and its
//! inverse.
//!
//! ## Quick start
//!
//! ```
//! use gaussian::Gaussian;
//!
//! let prior = Gaussian::new(0.0_f64, 1.0).unwrap();
//! assert!((prior.pdf(0.0) - 0.398942).abs() < 1e-6);
//! assert!((prior.ppf(0.1) + 1.28155).abs() < 1e-5);
//!
//! // Sum of independent variables: means and variances add.
//! let total = prior + Gaussian::new(1.0, 2.0).unwrap();
//! assert_eq!(total.mean(), 1.0);
//! assert_eq!(total.variance(), 3.0);
//!
//! // Fuse two independent estimates of the same quantity.
//! let fused = prior.product(&prior).unwrap();
//! assert_eq!(fused.variance(), 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — `erfc` (Numerical Recipes rational-Chebyshev
//!   approximation), its inverse `ierfc` (two Halley steps, saturating at
//!   ±[`special::IERFC_SATURATION`]) and `erf`.
//!
//! - [`stats`] — [`Gaussian<T>`] value type with `pdf`, `cdf`, `ppf`, sampling
//!   and the [`ContinuousDistribution`] trait. The algebra lives here too:
//!   `+`/`-` for sums and differences of independent variables,
//!   [`Gaussian::scale`] for constant factors, and [`Gaussian::product`] /
//!   [`Gaussian::quotient`] for precision-weighted belief fusion.
//!
//! - [`random`] — the [`UniformSource`] capability consumed by the sampler,
//!   closure adapter [`random::FnSource`], seeded [`random::create_rng`] and
//!   the Box–Muller transform.
//!
//! - [`traits`] — [`FloatScalar`], the element bound (`f32` / `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. System libm, thread-local RNG, `tracing/std` |
//! | `alloc` | via std  | `random(n)` / `random_with(n, ..)` returning `Vec<T>` |
//! | `libm`  | baseline | Pure-Rust software float fallback, always linked for `no_std` |
//! | `serde` | no       | `Serialize` / `Deserialize` for `Gaussian<T>`, validated on load |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod random;
pub mod special;
pub mod stats;
pub mod traits;

pub use random::UniformSource;
pub use stats::{ContinuousDistribution, Gaussian, StatsError};
pub use traits::FloatScalar;

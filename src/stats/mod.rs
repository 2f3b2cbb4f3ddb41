//! Univariate Gaussian distribution and its algebra.
//!
//! [`Gaussian`] provides the [`ContinuousDistribution`] trait implementation
//! plus sampling and a closed algebra: every operation on Gaussians yields
//! another Gaussian, validated through the same constructor.
//!
//! # Algebra
//!
//! | Operation | Model | Mean | Variance |
//! |---|---|---|---|
//! | `a + b` | sum of independent variables | μ₁ + μ₂ | σ₁² + σ₂² |
//! | `a - b` | difference of independent variables | μ₁ − μ₂ | σ₁² + σ₂² |
//! | [`Gaussian::scale`] / [`Gaussian::mul_constant`] | c·X | c·μ | c²·σ² |
//! | [`Gaussian::div_constant`] | X / c | μ / c | σ² / c² |
//! | [`Gaussian::product`] | precision fusion | (μ₁τ₁ + μ₂τ₂)/τ | 1/τ, τ = τ₁ + τ₂ |
//! | [`Gaussian::quotient`] | precision removal | (μ₁τ₁ − μ₂τ₂)/τ | 1/τ, τ = τ₁ − τ₂ |
//!
//! τ = 1/σ² is the precision.
//!
//! # Example
//!
//! ```
//! use gaussian::stats::{Gaussian, ContinuousDistribution};
//!
//! let n = Gaussian::new(0.0_f64, 1.0).unwrap();
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-7);
//! assert!((n.quantile(0.975) - 1.96).abs() < 0.01);
//!
//! let belief = n.product(&Gaussian::new(2.0, 1.0).unwrap()).unwrap();
//! assert_eq!(belief.mean(), 1.0);
//! assert_eq!(belief.variance(), 0.5);
//! ```

mod algebra;
mod gaussian;


pub use gaussian::Gaussian;
#[cfg(feature = "serde")]
pub use gaussian::Moments;

/// Errors from distribution construction and algebra.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// A constructed or derived variance is not strictly positive (or is NaN).
    #[error("variance must be > 0 (but was {0})")]
    InvalidVariance(f64),
    /// Removing a belief left a non-positive combined precision.
    #[error("combined precision must be > 0 (but was {0})")]
    InvalidPrecision(f64),
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

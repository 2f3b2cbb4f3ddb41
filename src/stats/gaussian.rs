use core::f64::consts::{PI, SQRT_2};
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::random::{generate_gaussian_with, UniformSource};
use crate::special::{erfc, ierfc};
use crate::FloatScalar;
use super::{ContinuousDistribution, StatsError};

/// Normal (Gaussian) distribution N(μ, σ²), parameterized by variance.
///
/// The standard deviation is derived from the variance at construction and
/// never stored independently, so `std_dev() == variance().sqrt()` always
/// holds. Every constructor and algebra operation rejects a non-positive
/// variance.
///
/// # Example
///
/// ```
/// use gaussian::stats::Gaussian;
///
/// let n = Gaussian::new(0.0_f64, 1.0).unwrap();
/// assert!((n.pdf(0.0) - 0.398942).abs() < 1e-6);
/// assert!((n.cdf(1.28155) - 0.9).abs() < 1e-5);
/// assert!((n.ppf(0.1) + 1.28155).abs() < 1e-5);
///
/// assert!(Gaussian::new(0.0_f64, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "Moments<T>",
        try_from = "Moments<T>",
        bound(
            serialize = "T: Copy + serde::Serialize",
            deserialize = "T: FloatScalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct Gaussian<T> {
    mean: T,
    variance: T,
    std_dev: T,
}

impl<T: FloatScalar> Gaussian<T> {
    /// Create a normal distribution with the given `mean` and `variance`.
    ///
    /// Requires `variance > 0`; zero, negative and NaN variances yield
    /// [`StatsError::InvalidVariance`] carrying the offending value.
    pub fn new(mean: T, variance: T) -> Result<Self, StatsError> {
        Self::validated(mean, variance, "new")
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self::from_parts(T::zero(), T::one())
    }

    /// Create a normal distribution from a standard deviation. Requires `std_dev > 0`.
    pub fn from_std_dev(mean: T, std_dev: T) -> Result<Self, StatsError> {
        if std_dev > T::zero() {
            Self::validated(mean, std_dev * std_dev, "from_std_dev")
        } else {
            Err(Self::reject(std_dev, "from_std_dev"))
        }
    }

    /// Single validation gate shared by construction and the algebra.
    pub(crate) fn validated(mean: T, variance: T, op: &'static str) -> Result<Self, StatsError> {
        // Positive-branch test so NaN lands in the error arm
        if variance > T::zero() {
            Ok(Self::from_parts(mean, variance))
        } else {
            Err(Self::reject(variance, op))
        }
    }

    /// Skips validation; only for variances that are positive by construction.
    pub(crate) fn from_parts(mean: T, variance: T) -> Self {
        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }

    pub(crate) fn reject(value: T, op: &'static str) -> StatsError {
        let value = value.to_f64().unwrap_or(f64::NAN);
        tracing::debug!(op, value, "rejected variance");
        StatsError::InvalidVariance(value)
    }

    /// Mean μ.
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Variance σ².
    pub fn variance(&self) -> T {
        self.variance
    }

    /// Standard deviation σ = √σ².
    pub fn std_dev(&self) -> T {
        self.std_dev
    }

    /// Precision τ = 1/σ².
    pub fn precision(&self) -> T {
        self.variance.recip()
    }

    /// Probability density exp(−(x−μ)²/(2σ²)) / (σ√(2π)).
    pub fn pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let pi = T::from(PI).unwrap();
        let m = self.std_dev * (two * pi).sqrt();
        let d = x - self.mean;
        (-(d * d) / (two * self.variance)).exp() / m
    }

    /// Natural log of [`pdf`](Self::pdf), without the underflow.
    pub fn ln_pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let pi = T::from(PI).unwrap();
        let d = x - self.mean;
        -self.std_dev.ln() - (two * pi).ln() / two - d * d / (two * self.variance)
    }

    /// Cumulative probability ½·erfc(−(x−μ)/(σ√2)).
    ///
    /// Non-decreasing in `x`; saturates to 0 and 1 in the tails.
    pub fn cdf(&self, x: T) -> T {
        let half = T::from(0.5).unwrap();
        let sqrt2 = T::from(SQRT_2).unwrap();
        half * erfc(-(x - self.mean) / (self.std_dev * sqrt2))
    }

    /// Percent point function (quantile): μ − σ√2·ierfc(2p).
    ///
    /// Never fails. Probabilities at or beyond the ends of (0, 1) saturate
    /// through [`ierfc`]: `p <= 0` gives μ − 100·σ√2, `p >= 1` gives
    /// μ + 100·σ√2 (±141.4213562373095 for the standard normal).
    pub fn ppf(&self, p: T) -> T {
        let two = T::one() + T::one();
        let sqrt2 = T::from(SQRT_2).unwrap();
        self.mean - self.std_dev * sqrt2 * ierfc(two * p)
    }

    /// Draw one variate using the Box–Muller cosine branch.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> T {
        generate_gaussian_with(source, self.mean, self.std_dev)
    }

    /// Draw `n` independent variates from `source`.
    ///
    /// Each variate consumes exactly two uniform draws.
    ///
    /// # Example
    ///
    /// ```
    /// use gaussian::Gaussian;
    /// use gaussian::random::FnSource;
    ///
    /// let n = Gaussian::new(0.0_f64, 0.3).unwrap();
    /// let mut half = FnSource(|| 0.5);
    /// let draws = n.random_with(2, &mut half);
    /// assert_eq!(draws.len(), 2);
    /// assert!((draws[0] + 0.644894028).abs() < 1e-8);
    /// ```
    #[cfg(feature = "alloc")]
    pub fn random_with<S: UniformSource + ?Sized>(&self, n: usize, source: &mut S) -> Vec<T> {
        tracing::trace!(n, "drawing gaussian samples");
        (0..n).map(|_| self.sample(source)).collect()
    }

    /// Draw `n` independent variates from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn random(&self, n: usize) -> Vec<T> {
        self.random_with(n, &mut rand::rng())
    }
}

impl<T: FloatScalar> Default for Gaussian<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Gaussian<T> {
    fn pdf(&self, x: T) -> T {
        Gaussian::pdf(self, x)
    }

    fn ln_pdf(&self, x: T) -> T {
        Gaussian::ln_pdf(self, x)
    }

    fn cdf(&self, x: T) -> T {
        Gaussian::cdf(self, x)
    }

    fn quantile(&self, p: T) -> T {
        self.ppf(p)
    }

    fn mean(&self) -> T {
        self.mean
    }

    fn variance(&self) -> T {
        self.variance
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for Gaussian<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({}, {})", self.mean, self.variance)
    }
}

/// Serialized form of a [`Gaussian`]: the two defining moments.
///
/// Deserializing a `Gaussian` goes through [`Gaussian::new`], so a stored
/// non-positive variance is rejected rather than loaded.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Moments<T> {
    pub mean: T,
    pub variance: T,
}

#[cfg(feature = "serde")]
impl<T> From<Gaussian<T>> for Moments<T> {
    fn from(g: Gaussian<T>) -> Self {
        Self {
            mean: g.mean,
            variance: g.variance,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: FloatScalar> TryFrom<Moments<T>> for Gaussian<T> {
    type Error = StatsError;

    fn try_from(m: Moments<T>) -> Result<Self, StatsError> {
        Gaussian::validated(m.mean, m.variance, "deserialize")
    }
}

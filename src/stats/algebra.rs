use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::FloatScalar;
use super::{Gaussian, StatsError};

// ── Independent sums and differences ────────────────────────────────
//
// Both add variances, and a sum of two positive variances is positive (or
// +∞ on overflow), so these are infallible and skip the validation gate.

impl<T: FloatScalar> Add for Gaussian<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Gaussian::from_parts(self.mean() + rhs.mean(), self.variance() + rhs.variance())
    }
}

impl<T: FloatScalar> Add<&Gaussian<T>> for Gaussian<T> {
    type Output = Gaussian<T>;

    fn add(self, rhs: &Gaussian<T>) -> Gaussian<T> {
        self + *rhs
    }
}

impl<T: FloatScalar> Add<&Gaussian<T>> for &Gaussian<T> {
    type Output = Gaussian<T>;

    fn add(self, rhs: &Gaussian<T>) -> Gaussian<T> {
        *self + *rhs
    }
}

impl<T: FloatScalar> AddAssign for Gaussian<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatScalar> Sub for Gaussian<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Gaussian::from_parts(self.mean() - rhs.mean(), self.variance() + rhs.variance())
    }
}

impl<T: FloatScalar> Sub<&Gaussian<T>> for Gaussian<T> {
    type Output = Gaussian<T>;

    fn sub(self, rhs: &Gaussian<T>) -> Gaussian<T> {
        self - *rhs
    }
}

impl<T: FloatScalar> Sub<&Gaussian<T>> for &Gaussian<T> {
    type Output = Gaussian<T>;

    fn sub(self, rhs: &Gaussian<T>) -> Gaussian<T> {
        *self - *rhs
    }
}

impl<T: FloatScalar> SubAssign for Gaussian<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for Gaussian<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Gaussian::from_parts(-self.mean(), self.variance())
    }
}

impl<T: FloatScalar> Neg for &Gaussian<T> {
    type Output = Gaussian<T>;

    fn neg(self) -> Gaussian<T> {
        (*self).neg()
    }
}

// ── Constant factors and precision fusion ───────────────────────────

impl<T: FloatScalar> Gaussian<T> {
    /// Distribution of c·X: mean `c·μ`, variance `c²·σ²`.
    ///
    /// Fails when the scaled variance is not positive, e.g. `c == 0` or an
    /// underflow to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gaussian::Gaussian;
    ///
    /// let x = Gaussian::new(1.0_f64, 1.0).unwrap().scale(2.0).unwrap();
    /// assert_eq!((x.mean(), x.variance()), (2.0, 4.0));
    /// assert!(x.scale(0.0).is_err());
    /// ```
    pub fn scale(&self, c: T) -> Result<Self, StatsError> {
        Self::validated(self.mean() * c, self.variance() * (c * c), "scale")
    }

    /// Alias for [`scale`](Self::scale).
    pub fn mul_constant(&self, c: T) -> Result<Self, StatsError> {
        self.scale(c)
    }

    /// Distribution of X / c: mean `μ/c`, variance `σ²/c²`.
    ///
    /// `c == ±∞` collapses the variance to zero and `c == 0` blows it up to
    /// +∞; both fail with [`StatsError::InvalidVariance`].
    pub fn div_constant(&self, c: T) -> Result<Self, StatsError> {
        let variance = self.variance() / (c * c);
        if c == T::zero() {
            return Err(Self::reject(variance, "div_constant"));
        }
        Self::validated(self.mean() / c, variance, "div_constant")
    }

    /// Precision-weighted fusion of two independent estimates of the same
    /// quantity (product of the two densities, renormalized).
    ///
    /// τ = τ₁ + τ₂, σ² = 1/τ, μ = (μ₁τ₁ + μ₂τ₂)/τ, evaluated on the
    /// variances as σ² = σ₁²·σ₂²/(σ₁² + σ₂²) so subnormal inputs survive.
    /// Only fails when σ₁² + σ₂² overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use gaussian::Gaussian;
    ///
    /// let a = Gaussian::new(0.0_f64, 1.0).unwrap();
    /// let fused = a.product(&a).unwrap();
    /// assert_eq!((fused.mean(), fused.variance()), (0.0, 0.5));
    /// ```
    pub fn product(&self, other: &Self) -> Result<Self, StatsError> {
        let total = self.variance() + other.variance();
        let w_self = other.variance() / total;
        let w_other = self.variance() / total;
        let variance = w_other * other.variance();
        let mean = self.mean() * w_self + other.mean() * w_other;
        Self::validated(mean, variance, "product")
    }

    /// Inverse of [`product`](Self::product): removes the information
    /// carried by `other` from `self`.
    ///
    /// τ = τ₁ − τ₂, σ² = 1/τ, μ = (μ₁τ₁ − μ₂τ₂)/τ, evaluated as
    /// σ² = σ₁²·σ₂²/(σ₂² − σ₁²). Fails with
    /// [`StatsError::InvalidPrecision`] unless `self` is strictly more
    /// precise than `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use gaussian::{Gaussian, StatsError};
    ///
    /// let a = Gaussian::new(1.0_f64, 1.0).unwrap();
    /// let b = Gaussian::new(1.0_f64, 2.0).unwrap();
    /// let q = a.quotient(&b).unwrap();
    /// assert_eq!((q.mean(), q.variance()), (1.0, 2.0));
    ///
    /// assert_eq!(b.quotient(&a), Err(StatsError::InvalidPrecision(-0.5)));
    /// ```
    pub fn quotient(&self, other: &Self) -> Result<Self, StatsError> {
        // τ₁ > τ₂ exactly when σ₂² > σ₁²
        let gap = other.variance() - self.variance();
        if gap <= T::zero() || gap.is_nan() {
            let precision = self.precision() - other.precision();
            let value = precision.to_f64().unwrap_or(f64::NAN);
            tracing::debug!(op = "quotient", value, "rejected non-positive precision");
            return Err(StatsError::InvalidPrecision(value));
        }
        let w_self = other.variance() / gap;
        let w_other = self.variance() / gap;
        let variance = w_other * other.variance();
        let mean = self.mean() * w_self - other.mean() * w_other;
        Self::validated(mean, variance, "quotient")
    }
}

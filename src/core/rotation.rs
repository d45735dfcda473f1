//! Unbounded angle type with on-demand normalization.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Angles closer to zero than this are treated as zero by [`Rotation::sinc`].
const SINC_EPSILON: f64 = 1e-4;

/// A rotation or angular displacement, stored in radians.
///
/// # Non-modularity
///
/// `Rotation` is unbounded and NOT modular 2π:
/// `Rotation::from_degrees(0.0) != Rotation::from_degrees(360.0)`.
/// Arithmetic operates on the raw stored value, so headings accumulated
/// from angular velocity keep their full turn count. Wrapping is an
/// explicit operation ([`Rotation::normalized`]), never a side effect.
///
/// Equality and ordering compare the raw stored value for the same reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation(f64);

impl Rotation {
    /// Zero rotation.
    pub const ZERO: Self = Self(0.0);

    /// Create a rotation from radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Create a rotation from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// The stored angle in radians.
    #[inline]
    pub const fn as_radians(self) -> f64 {
        self.0
    }

    /// The stored angle in degrees.
    #[inline]
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Map the angle into `(-cap, cap]`.
    ///
    /// Uses a double modulo so arbitrarily negative inputs land in range;
    /// a single `%` would leave them negative past `-cap`. Idempotent:
    /// normalizing an already-normalized angle is a no-op.
    pub fn normalized_with_cap(self, cap: Rotation) -> Rotation {
        let span = 2.0 * cap.0;
        let offset = ((cap.0 - self.0) % span + span) % span;
        Rotation(cap.0 - offset)
    }

    /// Map the angle into `(-180°, 180°]`.
    #[inline]
    pub fn normalized(self) -> Rotation {
        self.normalized_with_cap(Rotation::from_degrees(180.0))
    }

    /// Snap to the nearest multiple of `increment`.
    ///
    /// Halfway cases round away from zero, so
    /// `from_degrees(45.0).rounded(from_degrees(10.0))` is 50°.
    pub fn rounded(self, increment: Rotation) -> Rotation {
        Rotation((self.0 / increment.0).round() * increment.0)
    }

    /// Magnitude of the rotation.
    #[inline]
    pub fn abs(self) -> Rotation {
        Rotation(self.0.abs())
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// The unnormalized cardinal sine `sin(x) / x`.
    ///
    /// Returns exactly 1.0 within [`SINC_EPSILON`] radians of zero, where
    /// the quotient loses precision.
    pub fn sinc(self) -> f64 {
        if self.0.abs() < SINC_EPSILON {
            1.0
        } else {
            self.0.sin() / self.0
        }
    }
}

impl Add for Rotation {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Rotation {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Rotation {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Rotation {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Rotation {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl MulAssign<f64> for Rotation {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl Div<f64> for Rotation {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl DivAssign<f64> for Rotation {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl Neg for Rotation {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

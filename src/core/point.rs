//! 2D vector type in field units (inches).

use super::rotation::Rotation;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D point or vector in inches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in inches.
    pub x: f64,
    /// Y coordinate in inches.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm of the vector from the origin.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared norm (avoids the sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar cross product (z-component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Bearing from this point to another, via `atan2`.
    ///
    /// `atan2(0, 0)` is conventionally zero; callers that need a
    /// meaningful bearing must rule out coincident points first.
    #[inline]
    pub fn angle_to(self, other: Point) -> Rotation {
        Rotation::from_radians((other.y - self.y).atan2(other.x - self.x))
    }

    /// Rotate about the origin by `angle` (standard 2D rotation matrix).
    pub fn rotated(self, angle: Rotation) -> Point {
        let (sin, cos) = (angle.sin(), angle.cos());
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Unit vector in the same direction, or the point itself if zero-length.
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len > 0.0 {
            Point::new(self.x / len, self.y / len)
        } else {
            self
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_and_distance() {
        let p = Point::new(3.0, 4.0);
        assert_relative_eq!(p.length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.length_squared(), 25.0, epsilon = 1e-12);
        assert_relative_eq!(Point::ZERO.distance(p), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_relative_eq!(a.dot(b), 0.0, epsilon = 1e-12);
        assert_relative_eq!(a.cross(b), 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.cross(a), -1.0, epsilon = 1e-12);
        assert_relative_eq!(a.dot(a), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_to() {
        let origin = Point::ZERO;
        assert_relative_eq!(
            origin.angle_to(Point::new(1.0, 0.0)).as_degrees(),
            0.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            origin.angle_to(Point::new(0.0, 1.0)).as_degrees(),
            90.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            origin.angle_to(Point::new(-1.0, -1.0)).as_degrees(),
            -135.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotated(Rotation::from_degrees(90.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_identity_and_full_turn() {
        let p = Point::new(2.5, -1.5);

        let same = p.rotated(Rotation::ZERO);
        assert_eq!(same, p);

        // 360° is numerically distinct from 0° as an angle, yet rotation
        // goes through trig and lands back on the point.
        let turned = p.rotated(Rotation::from_degrees(360.0));
        assert_relative_eq!(turned.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(turned.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn test_component_wise_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Point::new(4.0, 1.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_normalized() {
        let n = Point::new(3.0, 4.0).normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_eq!(Point::ZERO.normalized(), Point::ZERO);
    }
}

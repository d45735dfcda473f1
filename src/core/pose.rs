//! Rigid 2D pose: position plus heading.

use super::point::Point;
use super::rotation::Rotation;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A rigid-body pose in the field frame.
///
/// `theta` is the heading of the body frame relative to the field frame.
/// Like [`Rotation`] itself, it is never normalized implicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position in inches.
    pub x: f64,
    /// Y position in inches.
    pub y: f64,
    /// Heading, counter-clockwise from the field +X axis.
    pub theta: Rotation,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f64, y: f64, theta: Rotation) -> Self {
        Self { x, y, theta }
    }

    /// The pose at the field origin, facing +X.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, Rotation::ZERO)
    }

    /// The translational part, dropping the heading.
    ///
    /// This narrowing is only available as a named method so heading loss
    /// stays visible at call sites.
    #[inline]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn forward(self) -> Point {
        Point::new(self.theta.cos(), self.theta.sin())
    }

    /// Compose with a pure rotation about the **field origin**.
    ///
    /// The translational part rotates about (0, 0) and `angle` adds to the
    /// heading. This is not a rotation about the pose's own position:
    /// placing a mounted sensor reads
    /// `offset.rotated(robot.theta) + robot.position()`.
    pub fn rotated(self, angle: Rotation) -> Pose {
        let position = self.position().rotated(angle);
        Pose::new(position.x, position.y, self.theta + angle)
    }
}

impl Add<Point> for Pose {
    type Output = Self;

    /// Translate the pose; the heading is untouched.
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Pose::new(self.x + rhs.x, self.y + rhs.y, self.theta)
    }
}

impl Sub<Point> for Pose {
    type Output = Self;

    /// Translate the pose backwards; the heading is untouched.
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Pose::new(self.x - rhs.x, self.y - rhs.y, self.theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin() {
        let pose = Pose::origin();
        assert_eq!(pose.x, 0.0);
        assert_eq!(pose.y, 0.0);
        assert_eq!(pose.theta, Rotation::ZERO);
    }

    #[test]
    fn test_position_drops_heading() {
        let pose = Pose::new(1.0, 2.0, Rotation::from_degrees(45.0));
        assert_eq!(pose.position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_forward() {
        let east = Pose::origin().forward();
        assert_relative_eq!(east.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(east.y, 0.0, epsilon = 1e-12);

        let north = Pose::new(3.0, 3.0, Rotation::from_degrees(90.0)).forward();
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(north.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_is_about_field_origin() {
        let pose = Pose::new(1.0, 0.0, Rotation::from_degrees(30.0));
        let turned = pose.rotated(Rotation::from_degrees(90.0));

        // The position swings around (0, 0), not around (1, 0).
        assert_relative_eq!(turned.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(turned.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(turned.theta.as_degrees(), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_translation_keeps_heading() {
        let pose = Pose::new(1.0, 1.0, Rotation::from_degrees(60.0));
        let moved = pose + Point::new(2.0, -1.0);
        assert_eq!(moved.x, 3.0);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.theta, pose.theta);

        let back = moved - Point::new(2.0, -1.0);
        assert_eq!(back.x, pose.x);
        assert_eq!(back.y, pose.y);
        assert_eq!(back.theta, pose.theta);
    }

    #[test]
    fn test_mounting_offset_composition() {
        // Sensor 5 inches ahead and 2 to the left of the robot center,
        // facing the same way as the robot.
        let offset = Pose::new(5.0, 2.0, Rotation::ZERO);
        let robot = Pose::new(10.0, 10.0, Rotation::from_degrees(90.0));

        let sensor = offset.rotated(robot.theta) + robot.position();

        // Robot faces +Y, so "ahead" is +Y and "left" is -X.
        assert_relative_eq!(sensor.x, 8.0, epsilon = 1e-12);
        assert_relative_eq!(sensor.y, 15.0, epsilon = 1e-12);
        assert_relative_eq!(sensor.theta.as_degrees(), 90.0, epsilon = 1e-9);
    }
}

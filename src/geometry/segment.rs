//! Line segment type using endpoint representation.

use crate::core::Point;
use serde::{Deserialize, Serialize};

/// A 2D line segment defined by its endpoints.
///
/// Endpoints rather than a parametric form: transforms are just two
/// points, and the segment's extent is implicit, which is what bounds the
/// intersection test below.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point of the segment.
    pub start: Point,
    /// End point of the segment.
    pub end: Point,
}

impl Segment {
    /// Create a new segment from two points.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(self) -> Point {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(self) -> f64 {
        self.direction().length()
    }

    /// The point at parameter `t` along the segment (0 = start, 1 = end).
    #[inline]
    pub fn point_at(self, t: f64) -> Point {
        self.start + self.direction() * t
    }

    /// Intersection point with another segment, if the segments cross.
    ///
    /// Solves the parametric line equations with the cross-product
    /// formulation; the hit is valid only when both parameters lie in
    /// `[0, 1]`, i.e. inside both segments rather than on their infinite
    /// extensions. Parallel and collinear pairs return `None`.
    pub fn intersection(self, other: Segment) -> Option<Point> {
        let d1 = self.direction();
        let d2 = other.direction();

        let denominator = d1.cross(d2);
        if denominator.abs() < f64::EPSILON {
            return None;
        }

        let between = other.start - self.start;
        let t = between.cross(d2) / denominator;
        let u = between.cross(d1) / denominator;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.point_at(t))
        } else {
            None
        }
    }
}

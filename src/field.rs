//! Field boundary model.
//!
//! A [`Field`] is an ordered collection of wall segments supplied once at
//! startup and treated as immutable. Wall order never affects raycast
//! results; only distances do.

use crate::core::Point;
use crate::geometry::Segment;
use serde::{Deserialize, Serialize};

/// The playing-field boundary as a list of wall segments, in inches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    walls: Vec<Segment>,
}

impl Field {
    /// Create a field from an explicit wall list.
    pub fn new(walls: Vec<Segment>) -> Self {
        Self { walls }
    }

    /// A closed axis-aligned rectangular field centered on the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let corners = [
            Point::new(-half_w, -half_h),
            Point::new(half_w, -half_h),
            Point::new(half_w, half_h),
            Point::new(-half_w, half_h),
        ];
        let walls = (0..4)
            .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
            .collect();
        Self { walls }
    }

    /// A closed square field centered on the origin.
    pub fn square(side: f64) -> Self {
        Self::rectangle(side, side)
    }

    /// The wall segments, in the order they were supplied.
    #[inline]
    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    /// Number of walls.
    #[inline]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether the field has no walls.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Diagonal of the bounding box enclosing every wall endpoint.
    ///
    /// This is the longest straight line the field can contain, which
    /// makes it the basis for a ray length that always reaches a boundary
    /// from inside. Zero for an empty field.
    pub fn diagonal(&self) -> f64 {
        let mut endpoints = self
            .walls
            .iter()
            .flat_map(|wall| [wall.start, wall.end]);

        let Some(first) = endpoints.next() else {
            return 0.0;
        };

        let (mut min, mut max) = (first, first);
        for p in endpoints {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        min.distance(max)
    }
}

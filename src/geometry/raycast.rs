//! Ray casting against field walls.
//!
//! Simulates a distance sensor by intersecting a fixed-length ray with
//! every wall segment and keeping the closest hit.

use crate::core::{Point, Pose};
use crate::geometry::Segment;

/// A wall hit found by [`raycast`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point, in inches.
    pub distance: f64,
    /// Index of the hit wall in the wall list.
    pub wall: usize,
    /// The hit point in the field frame.
    pub point: Point,
}

/// Cast a ray of length `range` from `from` along its heading.
///
/// Every wall is tested and the hit with the minimum distance wins, so
/// the result does not depend on wall order. Returns `None` when no wall
/// lies on the ray within `range`.
pub fn raycast(from: Pose, range: f64, walls: &[Segment]) -> Option<RayHit> {
    let origin = from.position();
    let ray = Segment::new(origin, origin + from.forward() * range);

    let mut closest: Option<RayHit> = None;
    for (index, wall) in walls.iter().enumerate() {
        if let Some(point) = ray.intersection(*wall) {
            let distance = origin.distance(point);
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(RayHit {
                    distance,
                    wall: index,
                    point,
                });
            }
        }
    }

    closest
}

//! Geometric primitives for wall raycasting.

pub mod raycast;
pub mod segment;

pub use raycast::{raycast, RayHit};
pub use segment::Segment;

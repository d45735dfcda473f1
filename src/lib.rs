//! # Kshetra: field-based localization primitives
//!
//! A 2D pose algebra and a noise-filtered, field-geometry-aware distance
//! sensor model for robot self-localization on a bounded rectangular
//! playing field.
//!
//! ## Features
//!
//! - **Exact pose algebra**: value types for rotations and poses with
//!   well-defined composition rules and no hidden angle wrapping
//! - **Raycast prediction**: predict what a distance sensor *should* read
//!   from any hypothesized pose by intersecting a ray with the field walls
//! - **Reading filter**: rejects ambiguous and out-of-range readings
//!   from the physical sensor before they reach a localizer
//! - **Hardware-free testing**: an always-available simulated sensor
//!   driver that raycasts the same field model
//!
//! ## Quick Start
//!
//! ```rust
//! use kshetra_localization::core::{Pose, Rotation};
//! use kshetra_localization::field::Field;
//! use kshetra_localization::sensors::{DistanceSensorModel, SimulatedDistanceSensor};
//!
//! // A 96-inch square field centered on the origin.
//! let field = Field::square(96.0);
//!
//! // Sensor mounted 5 inches ahead of the robot center, facing forward.
//! let offset = Pose::new(5.0, 0.0, Rotation::ZERO);
//!
//! let truth = Pose::new(0.0, 0.0, Rotation::ZERO);
//! let sensor = SimulatedDistanceSensor::new(field.clone(), offset.rotated(truth.theta) + truth.position());
//! let mut model = DistanceSensorModel::new(sensor, offset, field);
//!
//! // What the sensor should read from a candidate pose.
//! let predicted = model.predict(truth).unwrap();
//! assert!((predicted - 43.0).abs() < 1e-6);
//!
//! // What the (simulated) sensor actually reads.
//! let measured = model.get().unwrap();
//! assert!((measured - predicted).abs() < 0.1);
//! ```
//!
//! ## Coordinate Frame
//!
//! - **Field frame**: fixed global frame of the playing field, lengths in
//!   inches, angles counter-clockwise positive from the +X axis
//! - **Body frame**: the robot's own frame; a sensor's mounting offset is
//!   a fixed [`core::Pose`] in this frame
//!
//! ## Architecture
//!
//! - [`core`]: fundamental value types ([`core::Rotation`],
//!   [`core::Point`], [`core::Pose`])
//! - [`geometry`]: segment intersection and wall raycasting
//! - [`field`]: the wall-segment boundary model
//! - [`sensors`]: the driver interface, the measurement/prediction model,
//!   and the simulation driver
//! - [`config`]: filter thresholds and ray projection settings
//! - [`error`]: driver-boundary error types

pub mod config;
pub mod core;
pub mod error;
pub mod field;
pub mod geometry;
pub mod sensors;

// Re-export commonly used types
pub use config::DistanceModelConfig;
pub use core::{Point, Pose, Rotation};
pub use error::{Error, Result};
pub use field::Field;
pub use geometry::{raycast, RayHit, Segment};
pub use sensors::{DistanceSensor, DistanceSensorModel, SimulatedDistanceSensor};

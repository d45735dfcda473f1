//! Distance sensor filtering and prediction.
//!
//! [`DistanceSensorModel`] wraps a physical (or simulated) distance
//! sensor. [`DistanceSensorModel::get`] reads the hardware and filters
//! out ambiguous or out-of-range readings.
//! [`DistanceSensorModel::predict`] raycasts the field from a
//! hypothesized robot pose to compute what the sensor should read there.
//! A localizer scores candidate poses by comparing the two.

use log::{debug, warn};

use crate::config::DistanceModelConfig;
use crate::core::Pose;
use crate::error::Result;
use crate::field::Field;
use crate::geometry::raycast;

/// Millimeters per inch, for converting native sensor readings.
const MM_PER_INCH: f64 = 25.4;

/// Driver interface for a time-of-flight distance sensor.
///
/// Implementations convert the hardware's "no data" sentinel into
/// `Ok(None)` at this boundary, so the filtering above never sees magic
/// numbers. `Err` is reserved for transport faults (unplugged device,
/// bus error).
pub trait DistanceSensor: Send {
    /// Distance to the nearest detected object, in millimeters.
    ///
    /// `None` when the sensor sees no object.
    fn distance_mm(&mut self) -> Result<Option<u32>>;

    /// Approximate size of the detected object on the sensor's native
    /// scale.
    ///
    /// `None` when the object is too large or too diffuse to size.
    fn object_size(&mut self) -> Result<Option<u32>>;
}

/// Noise-filtered distance sensor with field-geometry prediction.
///
/// Constructed once at startup with a fixed mounting offset and field;
/// only the `enabled` flag changes afterwards, toggled by a supervisor
/// between control-loop iterations on the same thread.
pub struct DistanceSensorModel<S> {
    sensor: S,
    offset: Pose,
    field: Field,
    config: DistanceModelConfig,
    ray_length: f64,
    enabled: bool,
}

impl<S: DistanceSensor> DistanceSensorModel<S> {
    /// Create a model with default filter thresholds.
    pub fn new(sensor: S, offset: Pose, field: Field) -> Self {
        Self::with_config(sensor, offset, field, DistanceModelConfig::default())
    }

    /// Create a model with explicit filter thresholds.
    pub fn with_config(
        sensor: S,
        offset: Pose,
        field: Field,
        config: DistanceModelConfig,
    ) -> Self {
        // Long enough to reach a boundary from anywhere inside the field.
        let ray_length = field.diagonal() * config.ray_margin;
        Self {
            sensor,
            offset,
            field,
            config,
            ray_length,
            enabled: true,
        }
    }

    /// The sensor's mounting offset in the robot's body frame.
    pub fn offset(&self) -> Pose {
        self.offset
    }

    /// Whether readings are currently being used.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the sensor, e.g. when it is known to misbehave.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Read the sensor and return a filtered distance in inches.
    ///
    /// `None` when the model is disabled, the driver faults or reports no
    /// object, the reading fails the visibility check (small reported
    /// object size far away), or it fails the validity check (beyond the
    /// reliable range). Callers treat `None` as "skip this update", never
    /// as a zero distance.
    pub fn get(&mut self) -> Option<f64> {
        if !self.enabled {
            return None;
        }

        let distance_mm = match self.sensor.distance_mm() {
            Ok(reading) => reading?,
            Err(err) => {
                warn!("distance read failed: {err}");
                return None;
            }
        };

        if !self.visible(distance_mm) || distance_mm > self.config.max_range_mm {
            return None;
        }

        Some(f64::from(distance_mm) / MM_PER_INCH)
    }

    /// Whether a reading looks like a real, unambiguous single-object hit.
    ///
    /// Very close objects are always trusted; size estimation breaks down
    /// at short range. Otherwise the reported size must either exceed the
    /// solid-hit threshold or be unavailable, which the sensor uses for
    /// objects too large to size, such as a wall.
    fn visible(&mut self, distance_mm: u32) -> bool {
        if distance_mm < self.config.near_trust_mm {
            return true;
        }
        match self.sensor.object_size() {
            Ok(None) => true,
            Ok(Some(size)) => size > self.config.min_object_size,
            Err(err) => {
                warn!("object size read failed: {err}");
                false
            }
        }
    }

    /// Expected distance in inches from a hypothesized robot pose.
    ///
    /// Transforms the mounting offset into the field frame, casts a ray
    /// along the sensor's heading, and returns the distance to the
    /// closest wall. `None` if the ray escapes the field, which a closed
    /// boundary never allows but an open one can.
    ///
    /// Touches no sensor state, so candidate poses may be evaluated
    /// concurrently.
    pub fn predict(&self, robot: Pose) -> Option<f64> {
        let sensor_pose = self.offset.rotated(robot.theta) + robot.position();
        let hit = raycast(sensor_pose, self.ray_length, self.field.walls());
        if hit.is_none() {
            debug!(
                "ray from ({:.1}, {:.1}) at {:.1} deg left the field",
                sensor_pose.x,
                sensor_pose.y,
                sensor_pose.theta.as_degrees()
            );
        }
        hit.map(|hit| hit.distance)
    }
}

//! Simulation distance sensor driver.
//!
//! Always-available driver that raycasts a simulated field from a known
//! true pose, for testing localization without hardware.

use crate::core::Pose;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::geometry::raycast;
use crate::sensors::distance::DistanceSensor;
use crate::sensors::noise::NoiseGenerator;

/// Millimeters per inch; the simulated hardware reports millimeters.
const MM_PER_INCH: f64 = 25.4;

/// Native range limit of the simulated hardware, in millimeters.
const NATIVE_MAX_RANGE_MM: f64 = 2500.0;

/// Simulated distance sensor.
///
/// Holds the ground-truth sensor pose in the field frame and answers
/// reads by raycasting the field, the same way the real sensor's beam
/// works. The reported object size defaults to `None`, the unsized
/// response a wall produces.
pub struct SimulatedDistanceSensor {
    field: Field,
    pose: Pose,
    object_size: Option<u32>,
    noise: NoiseGenerator,
    noise_stddev_mm: f64,
    port: u8,
    connected: bool,
}

impl SimulatedDistanceSensor {
    /// Create a noiseless simulated sensor at the given true pose.
    pub fn new(field: Field, pose: Pose) -> Self {
        Self {
            field,
            pose,
            object_size: None,
            noise: NoiseGenerator::new(0),
            noise_stddev_mm: 0.0,
            port: 1,
            connected: true,
        }
    }

    /// Builder-style setter for Gaussian range noise.
    ///
    /// A seed of 0 draws entropy; any other seed is reproducible.
    pub fn with_noise(mut self, stddev_mm: f64, seed: u64) -> Self {
        self.noise = NoiseGenerator::new(seed);
        self.noise_stddev_mm = stddev_mm;
        self
    }

    /// Builder-style setter for the reported object size.
    pub fn with_object_size(mut self, size: Option<u32>) -> Self {
        self.object_size = size;
        self
    }

    /// Move the ground-truth sensor pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// The ground-truth sensor pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Simulate unplugging the device; subsequent reads fail.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Restore the connection after [`disconnect`](Self::disconnect).
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    fn check_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(Error::NoDevice(self.port))
        }
    }
}

impl DistanceSensor for SimulatedDistanceSensor {
    fn distance_mm(&mut self) -> Result<Option<u32>> {
        self.check_connected()?;

        // The beam travels at most the native range.
        let beam_range_in = NATIVE_MAX_RANGE_MM / MM_PER_INCH;
        let Some(hit) = raycast(self.pose, beam_range_in, self.field.walls()) else {
            return Ok(None);
        };

        let noisy_mm = hit.distance * MM_PER_INCH + self.noise.gaussian(self.noise_stddev_mm);
        if noisy_mm > NATIVE_MAX_RANGE_MM {
            return Ok(None);
        }
        Ok(Some(noisy_mm.max(0.0).round() as u32))
    }

    fn object_size(&mut self) -> Result<Option<u32>> {
        self.check_connected()?;
        Ok(self.object_size)
    }
}

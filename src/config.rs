//! Configuration for the distance-sensor model.

use serde::{Deserialize, Serialize};

/// Thresholds for the measurement filter and ray projection.
///
/// The defaults are tuned empirically against the physical sensor and
/// match the values the filter shipped with; override them only with
/// bench data for a specific sensor unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceModelConfig {
    /// Reported object sizes above this value count as a solid,
    /// unambiguous hit. Units follow the sensor's native size scale.
    /// Default: 80
    pub min_object_size: u32,

    /// Readings closer than this are trusted regardless of reported size;
    /// size estimation is unreliable at short range.
    /// Default: 100 mm
    pub near_trust_mm: u32,

    /// Readings beyond this range are discarded as unreliable.
    /// Default: 2000 mm
    pub max_range_mm: u32,

    /// Projected ray length as a multiple of the field diagonal. Values
    /// above 1.0 guarantee the ray reaches a boundary from anywhere
    /// inside the field.
    /// Default: 1.5
    pub ray_margin: f64,
}

impl Default for DistanceModelConfig {
    fn default() -> Self {
        Self {
            min_object_size: 80,
            near_trust_mm: 100,
            max_range_mm: 2000,
            ray_margin: 1.5,
        }
    }
}

impl DistanceModelConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum trusted object size.
    pub fn with_min_object_size(mut self, size: u32) -> Self {
        self.min_object_size = size;
        self
    }

    /// Builder-style setter for the near-trust range.
    pub fn with_near_trust_mm(mut self, mm: u32) -> Self {
        self.near_trust_mm = mm;
        self
    }

    /// Builder-style setter for the maximum reliable range.
    pub fn with_max_range_mm(mut self, mm: u32) -> Self {
        self.max_range_mm = mm;
        self
    }

    /// Builder-style setter for the ray length margin.
    pub fn with_ray_margin(mut self, margin: f64) -> Self {
        self.ray_margin = margin;
        self
    }
}

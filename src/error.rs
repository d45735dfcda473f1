//! Error types for the sensor driver boundary.
//!
//! Only driver transport faults are errors. Filtered-out readings and
//! missed rays are ordinary absent values (`None`), never errors.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Driver-boundary error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No device is responding on the given port
    #[error("no device on port {0}")]
    NoDevice(u8),

    /// The device reported a hardware fault
    #[error("sensor fault: {0}")]
    Sensor(String),
}

//! Climate sensor boundary types
//!
//! Readings use the fixed-point x10 convention used throughout the
//! firmware (235 = 23.5).

/// Errors from the climate sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer within the protocol timing budget
    Timeout,
    /// Frame received but the checksum does not match
    Checksum,
    /// Line fault (stuck level)
    Bus,
}

/// One temperature + humidity sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Temperature in 0.1 C units (e.g. 235 = 23.5 C)
    pub temp_c_x10: i16,
    /// Relative humidity in 0.1 % units (e.g. 405 = 40.5 %)
    pub humidity_x10: u16,
}
